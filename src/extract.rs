//! Token-loop drivers wiring the `html5gum` tokenizer to the segmenter.
//!
//! The tokenizer is a pure token source: it performs no tree construction,
//! so the drivers here make the two adjustments a tree builder would
//! otherwise provide - raw-text elements tokenize as text (emitter state
//! switching), and a body-context token arriving while no `<body>` is open
//! opens one.

use std::io::Read;

use html5gum::{DefaultEmitter, IoReader, Reader, Token, Tokenizer};
use url::Url;

use crate::document::TextDocument;
use crate::encoding;
use crate::error::{Error, Result};
use crate::patterns::WHITESPACE_RUN;
use crate::segmenter::Segmenter;
use crate::tags::{tag_action, TagAction};
use crate::url_utils;

/// Emitter configuration shared by every driver: `script`, `style`,
/// `title` and friends tokenize as raw text, the way the tree-construction
/// feedback loop in a browser would make them.
fn emitter() -> DefaultEmitter {
    let mut emitter = DefaultEmitter::default();
    emitter.naively_switch_states(true);
    emitter
}

/// Tags that may appear inside `<head>`. Anything else opening while no
/// body is open implies `<body>`.
fn belongs_to_head(name: &str) -> bool {
    matches!(
        name,
        "html"
            | "head"
            | "body"
            | "title"
            | "base"
            | "basefont"
            | "bgsound"
            | "link"
            | "meta"
            | "style"
            | "script"
            | "noscript"
            | "template"
    )
}

/// Head elements holding text of their own; their content must not imply
/// `<body>` (a title is not body content).
fn holds_head_text(name: &str) -> bool {
    matches!(name, "title" | "script" | "style" | "noscript" | "template")
}

fn run_segmenter<R: Reader>(tokenizer: Tokenizer<R>) -> std::result::Result<Segmenter, R::Error> {
    let mut segmenter = Segmenter::new();
    let mut body_seen = false;
    let mut head_text_depth: i32 = 0;

    for token in tokenizer {
        match token? {
            Token::String(text) => {
                let text = String::from_utf8_lossy(&text);
                if !body_seen && head_text_depth <= 0 && text.chars().any(|ch| !ch.is_whitespace())
                {
                    segmenter.start_tag("body");
                    body_seen = true;
                }
                segmenter.text(&text);
            }
            Token::StartTag(tag) => {
                if tag.self_closing {
                    continue;
                }
                let name = String::from_utf8_lossy(&tag.name);
                if holds_head_text(&name) {
                    head_text_depth += 1;
                }
                if !body_seen {
                    if name == "body" {
                        body_seen = true;
                    } else if !belongs_to_head(&name) {
                        segmenter.start_tag("body");
                        body_seen = true;
                    }
                }
                segmenter.start_tag(&name);
            }
            Token::EndTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name);
                if holds_head_text(&name) {
                    head_text_depth -= 1;
                }
                segmenter.end_tag(&name);
            }
            Token::Error(error) => segmenter.record_error(error.to_string()),
            Token::Comment(_) | Token::Doctype(_) => {}
        }
    }

    segmenter.flush_block();
    Ok(segmenter)
}

pub(crate) fn parse_document(html: &str) -> TextDocument {
    let segmenter = match run_segmenter(Tokenizer::new_with_emitter(html, emitter())) {
        Ok(segmenter) => segmenter,
        Err(never) => match never {},
    };
    segmenter.into_document()
}

pub(crate) fn parse_document_bytes(html: &[u8]) -> TextDocument {
    parse_document(&encoding::transcode_to_utf8(html))
}

pub(crate) fn parse_document_with_url(html: &str, url: &Url) -> TextDocument {
    let mut document = parse_document(html);
    document.date = url_utils::date_from_url(url);
    document
}

pub(crate) fn parse_document_reader<R: Read>(reader: R) -> Result<TextDocument> {
    let tokenizer = Tokenizer::new_with_emitter(IoReader::new(reader), emitter());
    let segmenter = run_segmenter(tokenizer).map_err(Error::Io)?;
    Ok(segmenter.into_document())
}

/// Plain-text mode: no blocks, no counts, no labels. The segmenter is
/// reused only for its tag bookkeeping (ignorable depth, last end tag).
fn run_plain_text<R: Reader>(tokenizer: Tokenizer<R>) -> std::result::Result<String, R::Error> {
    let mut segmenter = Segmenter::new();
    let mut buffer = String::new();

    for token in tokenizer {
        match token? {
            Token::String(text) => {
                if !segmenter.in_ignorable() {
                    // Text directly after a closed anchor or no-whitespace
                    // inline tag joins the previous run.
                    let joins_previous = matches!(
                        tag_action(segmenter.last_end_tag()),
                        Some(TagAction::Anchor | TagAction::InlineNoWhitespace)
                    );
                    if !joins_previous {
                        buffer.push(' ');
                    }
                    buffer.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Token::StartTag(tag) => {
                if !tag.self_closing {
                    segmenter.start_tag(&String::from_utf8_lossy(&tag.name));
                }
            }
            Token::EndTag(tag) => segmenter.end_tag(&String::from_utf8_lossy(&tag.name)),
            Token::Error(_) | Token::Comment(_) | Token::Doctype(_) => {}
        }
    }

    Ok(WHITESPACE_RUN.replace_all(buffer.trim(), " ").into_owned())
}

pub(crate) fn extract_text(html: &str) -> String {
    match run_plain_text(Tokenizer::new_with_emitter(html, emitter())) {
        Ok(text) => text,
        Err(never) => match never {},
    }
}

pub(crate) fn extract_text_reader<R: Read>(reader: R) -> Result<String> {
    run_plain_text(Tokenizer::new_with_emitter(IoReader::new(reader), emitter()))
        .map_err(Error::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_without_body_still_produces_blocks() {
        let doc = parse_document("<p>Click <a href=\"x\">here</a> now</p>");
        assert_eq!(doc.text_blocks.len(), 1);
        assert_eq!(doc.text_blocks[0].text, "Click here now");
    }

    #[test]
    fn head_only_markup_implies_no_body() {
        let doc = parse_document("<head><title>Just a title</title></head>");
        assert!(doc.text_blocks.is_empty());
        assert_eq!(doc.title.as_deref(), Some("Just a title"));
    }

    #[test]
    fn bare_text_implies_a_body() {
        let doc = parse_document("loose words outside markup");
        assert_eq!(doc.text_blocks.len(), 1);
        assert_eq!(doc.text_blocks[0].num_words, 4);
    }

    #[test]
    fn reader_input_matches_string_input() {
        let html = "<body><p>same either way</p></body>";
        let from_reader = parse_document_reader(html.as_bytes()).unwrap();
        let from_str = parse_document(html);
        assert_eq!(from_reader.text_blocks, from_str.text_blocks);
    }
}
