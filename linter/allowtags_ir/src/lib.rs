//! allowtags IR - shared data types
//!
//! This crate contains the data structures every other allowtags crate
//! agrees on:
//! - Spans for source locations (content-relative or absolute)
//! - The host declaration model (`TypeDecl`, `FieldDecl`, `TagLiteral`)
//!
//! Enable the `manifest` feature to (de)serialize the declaration model.

mod decl;
mod span;

pub use decl::{FieldDecl, TagLiteral, TypeDecl};
pub use span::{Span, SpanError};
