//! Text blocks: the unit of content/boilerplate classification.
//!
//! A [`TextBlock`] is a maximal run of rendered text produced by the
//! segmenter, annotated with the word and line-wrap statistics that
//! downstream classifiers consume. Blocks are created only by a flush,
//! appended once to a document, and thereafter only merged with an
//! adjacent block or label-mutated by a classifier.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Classification label attached to a block by later passes.
///
/// Only membership matters; labels carry no ordering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    IndicatesEndOfText,
    MightBeContent,
    VeryLikelyContent,
    Title,
    List,
    Heading,
    Heading1,
    Heading2,
    Heading3,
}

/// A maximal run of rendered text treated as one classification unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// The cleaned, rendering-ready text.
    pub text: String,

    /// Position among emitted blocks (block-sequence index, not a byte
    /// offset). Start and end are equal at creation and only diverge
    /// through merging.
    pub offset_blocks_start: i32,
    pub offset_blocks_end: i32,

    pub num_words: usize,
    pub num_linked_words: usize,
    pub num_words_in_wrapped_lines: usize,
    pub num_wrapped_lines: usize,

    /// Nesting depth at which the block's first text token occurred.
    pub tag_level: i32,

    /// Whether a classifier decided this block is main content.
    pub is_content: bool,

    /// Labels attached by classification passes.
    pub labels: HashSet<Label>,
}

/// Sentinel preceding every real block; offsets at negative infinity.
pub static EMPTY_START: LazyLock<TextBlock> =
    LazyLock::new(|| TextBlock::new(String::new(), 0, 0, 0, 0, i32::MIN, 0));

/// Sentinel following every real block; offsets at positive infinity.
pub static EMPTY_END: LazyLock<TextBlock> =
    LazyLock::new(|| TextBlock::new(String::new(), 0, 0, 0, 0, i32::MAX, 0));

impl TextBlock {
    /// Create a block at the given block-sequence offset.
    ///
    /// A block that never wrapped has all its words "in wrapped lines" by
    /// convention: a zero `num_words_in_wrapped_lines` is normalized to
    /// `num_words` with a single wrapped line, so `num_wrapped_lines >= 1`
    /// always holds.
    #[must_use]
    pub fn new(
        text: String,
        num_words: usize,
        num_linked_words: usize,
        num_words_in_wrapped_lines: usize,
        num_wrapped_lines: usize,
        offset_blocks: i32,
        tag_level: i32,
    ) -> Self {
        let (num_words_in_wrapped_lines, num_wrapped_lines) = if num_words_in_wrapped_lines == 0 {
            (num_words, 1)
        } else {
            (num_words_in_wrapped_lines, num_wrapped_lines)
        };

        Self {
            text,
            offset_blocks_start: offset_blocks,
            offset_blocks_end: offset_blocks,
            num_words,
            num_linked_words,
            num_words_in_wrapped_lines,
            num_wrapped_lines,
            tag_level,
            is_content: false,
            labels: HashSet::new(),
        }
    }

    /// Words per wrapped line. Recomputed from the counters on every call.
    #[must_use]
    pub fn text_density(&self) -> f64 {
        self.num_words_in_wrapped_lines as f64 / self.num_wrapped_lines as f64
    }

    /// Fraction of words inside anchor text, `0.0` for an empty block.
    #[must_use]
    pub fn link_density(&self) -> f64 {
        if self.num_words == 0 {
            0.0
        } else {
            self.num_linked_words as f64 / self.num_words as f64
        }
    }

    pub fn add_label(&mut self, label: Label) -> &mut Self {
        self.labels.insert(label);
        self
    }

    #[must_use]
    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Merge the following block into this one.
    ///
    /// Text concatenates with a line break; the four counters sum; labels
    /// union; `is_content` ORs; `tag_level` takes the minimum. Both offset
    /// fields take the *minimum* of the two blocks' values, matching
    /// upstream boilerpipe - the end offset does not expand to cover the
    /// merged range.
    pub fn merge_next(&mut self, next: &TextBlock) {
        self.text.push('\n');
        self.text.push_str(&next.text);

        self.num_words += next.num_words;
        self.num_linked_words += next.num_linked_words;
        self.num_words_in_wrapped_lines += next.num_words_in_wrapped_lines;
        self.num_wrapped_lines += next.num_wrapped_lines;

        self.offset_blocks_start = self.offset_blocks_start.min(next.offset_blocks_start);
        self.offset_blocks_end = self.offset_blocks_end.min(next.offset_blocks_end);

        self.is_content = self.is_content || next.is_content;
        self.labels.extend(&next.labels);
        self.tag_level = self.tag_level.min(next.tag_level);
    }
}
