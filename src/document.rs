//! Text documents and their content projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::textblock::TextBlock;

/// An ordered collection of text blocks plus document-level metadata.
///
/// Blocks are owned exclusively by the document once appended; nothing in
/// the core mutates them afterwards except merging, and classifiers
/// flipping `is_content` and labels through a [`Processor`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextDocument {
    /// Document title, captured at most once from pre-body content.
    pub title: Option<String>,

    /// Publication timestamp, when one could be recovered.
    pub date: Option<DateTime<Utc>>,

    /// Emitted blocks in document order.
    pub text_blocks: Vec<TextBlock>,

    /// Recoverable tokenizer errors collected while draining the stream.
    /// The document remains usable alongside them.
    pub warnings: Vec<String>,
}

impl TextDocument {
    /// The text of every block flagged as content, one block per line.
    #[must_use]
    pub fn content(&self) -> String {
        self.text(true, false)
    }

    /// Project the document's text, selecting the content and/or
    /// non-content partitions. Output is trimmed of leading and trailing
    /// blank space and entity-escaped for safe embedding.
    #[must_use]
    pub fn text(&self, include_content: bool, include_non_content: bool) -> String {
        let mut buffer = String::new();
        for block in &self.text_blocks {
            let include = if block.is_content {
                include_content
            } else {
                include_non_content
            };
            if !include {
                continue;
            }
            buffer.push_str(&block.text);
            buffer.push('\n');
        }
        html_escape::encode_safe(buffer.trim_matches([' ', '\n'])).into_owned()
    }

    /// The single aggregate error wrapping every recoverable tokenizer
    /// error of the run, or `None` for a clean parse.
    #[must_use]
    pub fn error(&self) -> Option<Error> {
        if self.warnings.is_empty() {
            None
        } else {
            Some(Error::Tokenizer(self.warnings.clone()))
        }
    }
}

/// A classification pass over a document.
///
/// Implementations inspect block statistics and flip `is_content` and
/// label state; the core never does. `process` reports whether it changed
/// the document.
pub trait Processor {
    /// Identifying name, for diagnostics.
    fn name(&self) -> &str;

    /// Run the pass; returns whether the document was modified.
    fn process(&self, document: &mut TextDocument) -> bool;
}
