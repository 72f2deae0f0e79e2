//! Struct tag scanner.
//!
//! Turns one raw tag literal into an ordered list of [`ParsedEntry`] values
//! plus scan-time [`TagProblem`]s, without ever failing: malformed input
//! degrades to best-effort entries and more problems.
//!
//! # Architecture
//!
//! - [`literal`]: unquotes the source literal (raw or interpreted), with a
//!   quote-trimming fallback
//! - [`state`]: the pure per-character transition table
//! - [`scan()`]: drives the state machine and translates content offsets to
//!   absolute source offsets
//!
//! ```text
//! `json:"id,omitempty" xml:"id"`
//!   -> ParsedEntry { key: "json", value: "id,omitempty", .. }
//!   -> ParsedEntry { key: "xml",  value: "id", .. }
//! ```

mod entry;
pub mod literal;
mod problem;
mod scan;
pub mod state;

pub use entry::{ParsedEntry, RawEntry};
pub use problem::{TagProblem, TagProblemKind};
pub use scan::{scan, scan_literal, ScanOutput};
pub use state::ScanState;

/// Convert a byte index to a `u32` offset, saturating for oversized input.
#[inline]
pub(crate) fn offset(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}
