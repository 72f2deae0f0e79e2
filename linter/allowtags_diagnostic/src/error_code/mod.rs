//! Error codes for all tag diagnostics.
//!
//! Each code is a stable identifier (`T0001`) used for `explain` lookups and
//! in machine-readable output.

use std::fmt;

/// Error codes for tag diagnostics.
///
/// Format: T####, numbered in the order problems are described:
/// literal problems first, then key problems, then value problems.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Tag is not a string literal
    T0001,
    /// Invalid character in tag key
    T0002,
    /// Empty tag key
    T0003,
    /// Key missing from the allow-list
    T0004,
    /// Empty tag value
    T0005,
    /// Unquoted tag value
    T0006,
    /// Unterminated value quote
    T0007,
    /// Missing key-value separator
    T0008,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::T0001,
        ErrorCode::T0002,
        ErrorCode::T0003,
        ErrorCode::T0004,
        ErrorCode::T0005,
        ErrorCode::T0006,
        ErrorCode::T0007,
        ErrorCode::T0008,
    ];

    /// Get the code as a string (e.g., "T0004").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::T0001 => "T0001",
            ErrorCode::T0002 => "T0002",
            ErrorCode::T0003 => "T0003",
            ErrorCode::T0004 => "T0004",
            ErrorCode::T0005 => "T0005",
            ErrorCode::T0006 => "T0006",
            ErrorCode::T0007 => "T0007",
            ErrorCode::T0008 => "T0008",
        }
    }

    /// One-line summary shown when listing codes.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::T0001 => "tag is not a string literal",
            ErrorCode::T0002 => "invalid character in tag key",
            ErrorCode::T0003 => "empty tag key",
            ErrorCode::T0004 => "tag key not in the allow-list",
            ErrorCode::T0005 => "empty tag value",
            ErrorCode::T0006 => "unquoted tag value",
            ErrorCode::T0007 => "unterminated value quote",
            ErrorCode::T0008 => "missing key-value separator",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"T0004"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and
/// [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
