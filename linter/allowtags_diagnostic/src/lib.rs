//! Diagnostic reporting for tag problems.
//!
//! - Error codes for searchability and `explain`
//! - A fixed message per code
//! - A span pointing into the source file
//! - Optional notes and help lines
//!
//! Emitters render diagnostics for people ([`emitter::TerminalEmitter`]) or
//! for tooling ([`emitter::JsonEmitter`]).

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
