//! The tag policy table consulted by the segmenter.
//!
//! Each known tag maps to a small structural behavior; the segmenter never
//! inspects anything else about a tag. Tags absent from the table take the
//! conservative default: they change the nesting depth and force a flush on
//! both enter and exit, so unrecognized structure always breaks a block.

/// Structural behavior of a known tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    /// Starts a subtree whose text never reaches any block or the title
    /// (script, style, form controls and embedded objects).
    Ignorable,
    /// A hyperlink; enclosed text is tracked separately for link density.
    Anchor,
    /// The document body. Only text inside it can form blocks.
    Body,
    /// Inline markup that implies a word boundary around itself.
    InlineWhitespace,
    /// Inline markup that joins adjacent text without a word boundary.
    InlineNoWhitespace,
}

impl TagAction {
    /// Whether entering or leaving a tag with this action moves the
    /// structural nesting depth. Inline markup does not.
    #[must_use]
    pub fn changes_tag_level(self) -> bool {
        !matches!(self, Self::InlineWhitespace | Self::InlineNoWhitespace)
    }
}

/// Look up the policy for a lower-cased tag name.
#[must_use]
pub fn tag_action(name: &str) -> Option<TagAction> {
    match name {
        "applet" | "figcaption" | "figure" | "noscript" | "object" | "option" | "script"
        | "style" => Some(TagAction::Ignorable),

        "a" => Some(TagAction::Anchor),

        "body" => Some(TagAction::Body),

        "abbr" | "acronym" => Some(TagAction::InlineWhitespace),

        "b" | "code" | "em" | "font" | "i" | "strike" | "strong" | "sub" | "sup" | "tt" | "u"
        | "var" => Some(TagAction::InlineNoWhitespace),

        _ => None,
    }
}
