//! Compiled regex patterns for segmentation.
//!
//! All patterns are compiled once at first use via `LazyLock` and reused
//! for the lifetime of the program.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// The word-character class: a space-split fragment counts as a word when
/// it contains at least one letter, decimal digit, letter number, or other
/// numeric symbol.
pub static WORD_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{Nd}\p{Nl}\p{No}]").expect("WORD_CHARACTER regex"));

/// Any run of Unicode whitespace; collapsed to a single space by the
/// plain-text extraction mode.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));
