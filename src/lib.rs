//! # rs-boilerpipe
//!
//! Rust port of boilerpipe - boilerplate removal and main content
//! extraction from HTML.
//!
//! The crate turns an HTML token stream into a [`TextDocument`]: an
//! ordered sequence of [`TextBlock`]s, each annotated with word counts,
//! line-wrap statistics, link density and structural nesting depth. Those
//! annotations are the substrate on which content/boilerplate classifiers
//! (the [`Processor`] trait) operate; the core itself never decides what
//! is content.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_boilerpipe::parse_document;
//!
//! let html = r#"<html><head><title>Hi</title></head>
//! <body><p>Hello world this is a test</p></body></html>"#;
//!
//! let doc = parse_document(html);
//! assert_eq!(doc.title.as_deref(), Some("Hi"));
//! assert_eq!(doc.text_blocks.len(), 1);
//! assert_eq!(doc.text_blocks[0].num_words, 6);
//! ```
//!
//! ## Design
//!
//! - **Streaming**: the segmenter consumes tokens one at a time and never
//!   builds a DOM. Memory stays proportional to the current block, not
//!   the document.
//! - **Separation of concerns**: segmentation produces statistics;
//!   classification (external, via [`Processor`]) consumes them.
//! - **Best-effort errors**: recoverable tokenizer errors are collected
//!   while the stream drains; only transport failures abort a parse.

mod error;
mod extract;
mod patterns;

/// Text documents and projections.
pub mod document;

/// Character encoding detection and transcoding.
pub mod encoding;

/// The streaming segmentation engine.
pub mod segmenter;

/// The tag policy table consulted by the segmenter.
pub mod tags;

/// Text blocks and classification labels.
pub mod textblock;

/// URL utilities (publication-date recovery from paths).
pub mod url_utils;

// Public API - re-exports
pub use document::{Processor, TextDocument};
pub use error::{Error, Result};
pub use segmenter::Segmenter;
pub use textblock::{Label, TextBlock, EMPTY_END, EMPTY_START};

/// Segment an HTML document into annotated text blocks.
///
/// In-memory input cannot fail: recoverable tokenizer errors are
/// collected on [`TextDocument::warnings`] and the document is returned
/// regardless.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::parse_document;
///
/// let doc = parse_document("<body><p>Some article text</p></body>");
/// assert_eq!(doc.text_blocks.len(), 1);
/// assert_eq!(doc.text_blocks[0].num_words, 3);
/// ```
#[must_use]
pub fn parse_document(html: &str) -> TextDocument {
    extract::parse_document(html)
}

/// Segment HTML bytes, sniffing the character encoding first.
///
/// Charset declarations in `<meta>` tags are honored; everything else is
/// treated as UTF-8 with lossy replacement.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::parse_document_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><body><p>Caf\xE9 culture</p></body>";
/// let doc = parse_document_bytes(html);
/// assert_eq!(doc.text_blocks[0].text, "Caf\u{e9} culture");
/// ```
#[must_use]
pub fn parse_document_bytes(html: &[u8]) -> TextDocument {
    extract::parse_document_bytes(html)
}

/// Segment an HTML document obtained from `url`, recovering a publication
/// date from the URL path when one is present.
///
/// The URL is used for metadata only; no fetching happens here.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::parse_document_with_url;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/2016/05/27/hello")?;
/// let doc = parse_document_with_url("<body><p>dated article text</p></body>", &url);
/// assert!(doc.date.is_some());
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn parse_document_with_url(html: &str, url: &url::Url) -> TextDocument {
    extract::parse_document_with_url(html, url)
}

/// Segment an HTML document read from a byte stream.
///
/// A transport failure aborts with [`Error::Io`]; recoverable tokenizer
/// errors do not (they ride on [`TextDocument::warnings`]).
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::parse_document_reader;
///
/// let html: &[u8] = b"<body><p>streamed content here</p></body>";
/// let doc = parse_document_reader(html)?;
/// assert_eq!(doc.text_blocks.len(), 1);
/// # Ok::<(), rs_boilerpipe::Error>(())
/// ```
pub fn parse_document_reader<R: std::io::Read>(reader: R) -> Result<TextDocument> {
    extract::parse_document_reader(reader)
}

/// Extract readable plain text, skipping all block and density
/// bookkeeping.
///
/// Text inside ignorable regions is dropped; runs are joined with single
/// spaces except across anchor and no-whitespace inline boundaries.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::extract_text;
///
/// let text = extract_text("<body>Hello <b>world</b>!</body>");
/// assert_eq!(text, "Hello world!");
/// ```
#[must_use]
pub fn extract_text(html: &str) -> String {
    extract::extract_text(html)
}

/// Extract readable plain text from a byte stream.
pub fn extract_text_reader<R: std::io::Read>(reader: R) -> Result<String> {
    extract::extract_text_reader(reader)
}
