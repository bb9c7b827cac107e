//! The streaming content segmenter.
//!
//! [`Segmenter`] is a token-driven state machine. Fed start-tag, end-tag
//! and text events in document order, it accumulates text into two
//! buffers - a token buffer carrying in-band anchor markers for the word
//! statistics, and a render buffer holding clean text only - and emits a
//! [`TextBlock`] whenever a structural boundary forces a flush.
//!
//! The segmenter never touches bytes or attributes and never initiates
//! I/O; any pull-based HTML tokenizer can drive it. The drivers in this
//! crate feed it from `html5gum`.

use std::borrow::Cow;

use crate::document::TextDocument;
use crate::patterns::WORD_CHARACTER;
use crate::tags::{tag_action, TagAction};
use crate::textblock::TextBlock;

/// In-band marker opening a run of anchor text inside the token buffer.
pub(crate) const ANCHOR_TEXT_START: &str = "$\u{e00a}<";
/// In-band marker closing a run of anchor text inside the token buffer.
pub(crate) const ANCHOR_TEXT_END: &str = ">\u{e00a}$";

/// Visual line width for the wrapped-line statistics.
const MAX_LINE_LENGTH: i32 = 80;

/// Token-driven state machine turning an HTML token stream into an
/// ordered sequence of [`TextBlock`]s.
#[derive(Debug)]
pub struct Segmenter {
    title: Option<String>,

    /// Accumulated text plus anchor markers; source of the word counts.
    token_buffer: String,
    /// Accumulated renderable text only; becomes the block's text.
    text_buffer: String,

    depth_body: i32,
    depth_anchor: i32,
    depth_ignorable: i32,

    /// General nesting counter.
    depth_tag: i32,
    /// Depth stamped at the first text token of the current block, -1
    /// while unset. A block's level is fixed at its origin, not its
    /// deepest content.
    depth_block_tag: i32,

    last_was_whitespace: bool,

    text_blocks: Vec<TextBlock>,

    last_start_tag: String,
    last_end_tag: String,

    /// Next block-sequence offset, post-incremented on emission.
    offset_blocks: i32,

    /// A structural boundary was seen; the accumulation must flush before
    /// more text is accepted.
    flush: bool,
    in_anchor_text: bool,

    errors: Vec<String>,
}

impl Segmenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            token_buffer: String::new(),
            text_buffer: String::new(),
            depth_body: 0,
            depth_anchor: 0,
            depth_ignorable: 0,
            depth_tag: 0,
            depth_block_tag: -1,
            last_was_whitespace: false,
            text_blocks: Vec::new(),
            last_start_tag: String::new(),
            last_end_tag: String::new(),
            offset_blocks: 0,
            flush: false,
            in_anchor_text: false,
            errors: Vec::new(),
        }
    }

    /// Whether the current position is inside an ignorable subtree.
    #[must_use]
    pub fn in_ignorable(&self) -> bool {
        self.depth_ignorable > 0
    }

    /// The lower-cased name of the most recently closed tag.
    #[must_use]
    pub fn last_end_tag(&self) -> &str {
        &self.last_end_tag
    }

    /// Record a recoverable tokenizer error; segmentation continues.
    pub fn record_error(&mut self, message: String) {
        self.errors.push(message);
    }

    /// Feed a start tag.
    pub fn start_tag(&mut self, name: &str) {
        let name = normalized(name);
        match tag_action(&name) {
            Some(action) => {
                if action.changes_tag_level() {
                    self.depth_tag += 1;
                }
                let forces_flush = self.enter(action);
                self.flush = forces_flush || self.flush;
            }
            None => {
                self.depth_tag += 1;
                self.flush = true;
            }
        }
        self.last_start_tag.clear();
        self.last_start_tag.push_str(&name);
    }

    /// Feed an end tag. Performs the pending flush, if any.
    pub fn end_tag(&mut self, name: &str) {
        let name = normalized(name);
        match tag_action(&name) {
            Some(action) => {
                let forces_flush = self.leave(action);
                self.flush = forces_flush || self.flush;
                if action.changes_tag_level() {
                    self.depth_tag -= 1;
                }
            }
            None => {
                self.flush = true;
                self.depth_tag -= 1;
            }
        }
        if self.flush {
            self.flush_block();
            // The pending flag stays set; the next text token clears it.
        }
        self.last_end_tag.clear();
        self.last_end_tag.push_str(&name);
    }

    fn enter(&mut self, action: TagAction) -> bool {
        match action {
            TagAction::Ignorable => {
                self.depth_ignorable += 1;
                true
            }
            TagAction::Anchor => {
                self.depth_anchor += 1;
                if self.depth_anchor == 1 && !self.in_ignorable() {
                    self.add_whitespace_if_necessary();
                    self.token_buffer.push_str(ANCHOR_TEXT_START);
                    self.token_buffer.push(' ');
                    self.last_was_whitespace = true;
                }
                false
            }
            TagAction::Body => {
                self.flush_block();
                self.depth_body += 1;
                false
            }
            TagAction::InlineWhitespace => {
                self.add_whitespace_if_necessary();
                false
            }
            TagAction::InlineNoWhitespace => false,
        }
    }

    fn leave(&mut self, action: TagAction) -> bool {
        match action {
            TagAction::Ignorable => {
                self.depth_ignorable -= 1;
                true
            }
            TagAction::Anchor => {
                self.depth_anchor -= 1;
                if self.depth_anchor == 0 && !self.in_ignorable() {
                    self.add_whitespace_if_necessary();
                    self.token_buffer.push_str(ANCHOR_TEXT_END);
                    self.token_buffer.push(' ');
                    self.last_was_whitespace = true;
                }
                false
            }
            TagAction::Body => {
                self.flush_block();
                self.depth_body -= 1;
                false
            }
            TagAction::InlineWhitespace => {
                self.add_whitespace_if_necessary();
                false
            }
            TagAction::InlineNoWhitespace => false,
        }
    }

    /// Feed a text token.
    pub fn text(&mut self, raw: &str) {
        if self.flush {
            self.flush_block();
            self.flush = false;
        }

        if self.in_ignorable() || raw.is_empty() {
            return;
        }

        let (collapsed, was_first_ws, was_last_ws) = collapse_whitespace(raw);

        if collapsed.is_empty() {
            if was_first_ws || was_last_ws {
                if !self.last_was_whitespace {
                    self.text_buffer.push(' ');
                    self.token_buffer.push(' ');
                }
                self.last_was_whitespace = true;
            } else {
                self.last_was_whitespace = false;
            }
            return;
        }

        if was_first_ws && !self.last_was_whitespace {
            self.text_buffer.push(' ');
            self.token_buffer.push(' ');
        }

        if self.depth_block_tag == -1 {
            self.depth_block_tag = self.depth_tag;
        }

        self.text_buffer.push_str(&collapsed);
        self.token_buffer.push_str(&collapsed);
        if was_last_ws {
            self.text_buffer.push(' ');
            self.token_buffer.push(' ');
        }
        self.last_was_whitespace = was_last_ws;
    }

    /// Terminate the current accumulation and emit a block if it holds
    /// countable text.
    pub fn flush_block(&mut self) {
        // Pre-body content never forms a block; a title tag's text may
        // become the document title, exactly once.
        if self.depth_body == 0 {
            if self.last_start_tag == "title" {
                let title = self.token_buffer.trim();
                if !title.is_empty() && self.title.as_deref().is_none_or(str::is_empty) {
                    self.title = Some(title.to_owned());
                }
            }
            self.text_buffer.clear();
            self.token_buffer.clear();
            return;
        }

        match self.token_buffer.len() {
            0 => return,
            1 if self.last_was_whitespace => {
                self.text_buffer.clear();
                self.token_buffer.clear();
                return;
            }
            _ => {}
        }

        let mut num_words = 0usize;
        let mut num_linked_words = 0usize;
        let mut num_wrapped_lines = 0usize;
        let mut num_tokens = 0usize;
        let mut num_words_current_line = 0usize;
        // Start at -1 so the first word's leading separator is free.
        let mut current_line_length: i32 = -1;

        for token in self.token_buffer.split(' ') {
            if token == ANCHOR_TEXT_START {
                self.in_anchor_text = true;
            } else if token == ANCHOR_TEXT_END {
                self.in_anchor_text = false;
            } else if is_word(token) {
                num_tokens += 1;
                num_words += 1;
                num_words_current_line += 1;
                if self.in_anchor_text {
                    num_linked_words += 1;
                }

                let token_length = token.len() as i32;
                current_line_length += token_length + 1;
                if current_line_length > MAX_LINE_LENGTH {
                    num_wrapped_lines += 1;
                    current_line_length = token_length;
                    num_words_current_line = 1;
                }
            } else {
                num_tokens += 1;
            }
        }

        // A buffer holding nothing but anchor markers counts no tokens.
        if num_tokens == 0 {
            self.text_buffer.clear();
            self.token_buffer.clear();
            self.depth_block_tag = -1;
            return;
        }

        let num_words_in_wrapped_lines = if num_wrapped_lines == 0 {
            num_wrapped_lines = 1;
            num_words
        } else {
            num_words - num_words_current_line
        };

        let text = self.text_buffer.trim();
        if !text.is_empty() {
            self.text_blocks.push(TextBlock::new(
                text.to_owned(),
                num_words,
                num_linked_words,
                num_words_in_wrapped_lines,
                num_wrapped_lines,
                self.offset_blocks,
                self.depth_block_tag,
            ));
            self.offset_blocks += 1;
        }

        self.text_buffer.clear();
        self.token_buffer.clear();
        self.depth_block_tag = -1;
    }

    fn add_whitespace_if_necessary(&mut self) {
        if !self.last_was_whitespace {
            self.token_buffer.push(' ');
            self.text_buffer.push(' ');
            self.last_was_whitespace = true;
        }
    }

    /// Finish the run and hand the accumulated state over as a document.
    #[must_use]
    pub fn into_document(self) -> TextDocument {
        TextDocument {
            title: self.title,
            date: None,
            text_blocks: self.text_blocks,
            warnings: self.errors,
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word(token: &str) -> bool {
    WORD_CHARACTER.is_match(token)
}

fn normalized(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Collapse internal Unicode whitespace runs to single spaces and trim,
/// reporting whether the raw text began and/or ended with whitespace.
fn collapse_whitespace(raw: &str) -> (String, bool, bool) {
    let mut collapsed = String::with_capacity(raw.len());
    let mut was_first_ws = false;
    let mut was_last_ws = false;

    for (index, ch) in raw.chars().enumerate() {
        if ch.is_whitespace() {
            if index == 0 {
                was_first_ws = true;
            }
            if !was_last_ws {
                collapsed.push(' ');
                was_last_ws = true;
            }
        } else {
            collapsed.push(ch);
            was_last_ws = false;
        }
    }

    (collapsed.trim().to_owned(), was_first_ws, was_last_ws)
}
