//! Character encoding detection and transcoding.
//!
//! Byte input is sniffed for a charset declaration in the document head
//! and decoded to UTF-8 before tokenization. Undeclared input is treated
//! as UTF-8; invalid sequences decode lossily to the replacement
//! character rather than failing the parse.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Number of leading bytes examined for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// `<meta charset="...">`, which also matches the charset parameter of a
/// `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Detect the character encoding declared in the document head.
///
/// Falls back to UTF-8 when nothing usable is declared.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    META_CHARSET
        .captures(&head)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string, replacing invalid sequences.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
