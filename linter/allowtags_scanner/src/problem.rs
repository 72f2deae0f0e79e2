//! Tag problems: the diagnostic taxonomy shared by scanning and validation.
//!
//! Problems are plain data `{kind, offset}`. Nothing in the scanner or the
//! validator throws; every malformed input degrades to more problems.

use std::fmt;

/// What is wrong with a tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagProblemKind {
    /// The literal is not delimited by `"` or `` ` `` (or does not unquote).
    MalformedLiteral,
    /// A control character outside a value, or a character keys may not hold.
    InvalidKeyChar,
    /// A `:` with no key text before it.
    EmptyKey,
    /// A key missing from the allow-list.
    UnknownKey(String),
    /// A pair whose value is zero-length.
    EmptyValue,
    /// A value not wrapped in `"`.
    UnquotedValue,
    /// A quoted value that never saw its closing `"`.
    UnterminatedQuote,
    /// A value reached without a `:` after the key.
    MissingSeparator,
}

impl fmt::Display for TagProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagProblemKind::MalformedLiteral => write!(f, "tags should be in a string literal"),
            TagProblemKind::InvalidKeyChar => write!(f, "invalid tag key character"),
            TagProblemKind::EmptyKey => write!(f, "empty tag key"),
            TagProblemKind::UnknownKey(key) => write!(f, "unknown tag key '{key}'"),
            TagProblemKind::EmptyValue => write!(f, "empty tag value"),
            TagProblemKind::UnquotedValue => write!(f, "tag values should be quoted"),
            TagProblemKind::UnterminatedQuote => write!(f, "unterminated value quote"),
            TagProblemKind::MissingSeparator => write!(f, "missing key-value separator"),
        }
    }
}

/// A problem located at a byte offset.
///
/// Inside the state machine the offset is relative to the tag content;
/// everything leaving the scanner carries absolute source offsets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagProblem {
    pub kind: TagProblemKind,
    pub offset: u32,
}

impl TagProblem {
    pub fn new(kind: TagProblemKind, offset: u32) -> Self {
        TagProblem { kind, offset }
    }

    /// Move a content-relative offset into source coordinates.
    #[must_use]
    pub(crate) fn relocate(mut self, to_source: impl Fn(u32) -> u32) -> Self {
        self.offset = to_source(self.offset);
        self
    }
}

impl fmt::Display for TagProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_reporting_text() {
        assert_eq!(TagProblemKind::EmptyKey.to_string(), "empty tag key");
        assert_eq!(
            TagProblemKind::UnknownKey("xml".into()).to_string(),
            "unknown tag key 'xml'"
        );
        assert_eq!(
            TagProblemKind::MalformedLiteral.to_string(),
            "tags should be in a string literal"
        );
    }

    #[test]
    fn relocate_and_display() {
        let problem = TagProblem::new(TagProblemKind::EmptyValue, 4).relocate(|at| at + 10);
        assert_eq!(problem.offset, 14);
        assert_eq!(problem.to_string(), "empty tag value at 14");
    }
}
