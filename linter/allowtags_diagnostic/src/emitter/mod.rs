//! Diagnostic emitters.
//!
//! - Terminal: colored, human-readable output with source snippets
//! - JSON: machine-readable output for tooling
//!
//! Both render byte offsets as `file:line:col` when given the source text,
//! and fall back to raw offsets otherwise.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Source text with its line table, borrowed by an emitter.
#[derive(Clone, Debug)]
struct SourceText<'src> {
    text: &'src str,
    lines: LineOffsetTable,
}

impl<'src> SourceText<'src> {
    fn new(text: &'src str) -> Self {
        SourceText {
            text,
            lines: LineOffsetTable::build(text),
        }
    }

    fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(self.text, offset)
    }

    fn line(&self, line: u32) -> &'src str {
        self.lines.line_text(self.text, line).unwrap_or_default()
    }
}
