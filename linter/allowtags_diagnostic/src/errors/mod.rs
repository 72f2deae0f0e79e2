//! Embedded error documentation for `explain` support.
//!
//! Each error code has a markdown file in this directory explaining the
//! problem with an example and a fix. Files are embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `TXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the markdown documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::T0001, include_str!("T0001.md")),
    (ErrorCode::T0002, include_str!("T0002.md")),
    (ErrorCode::T0003, include_str!("T0003.md")),
    (ErrorCode::T0004, include_str!("T0004.md")),
    (ErrorCode::T0005, include_str!("T0005.md")),
    (ErrorCode::T0006, include_str!("T0006.md")),
    (ErrorCode::T0007, include_str!("T0007.md")),
    (ErrorCode::T0008, include_str!("T0008.md")),
];
