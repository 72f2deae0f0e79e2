//! Scan driver: runs the state machine over a whole tag.

use allowtags_ir::TagLiteral;

use crate::entry::ParsedEntry;
use crate::literal;
use crate::offset;
use crate::problem::{TagProblem, TagProblemKind};
use crate::state::ScanState;

/// Everything one scan produced, in left-to-right order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOutput {
    pub entries: Vec<ParsedEntry>,
    /// Scan-time problems (`MalformedLiteral`, `InvalidKeyChar`).
    pub problems: Vec<TagProblem>,
}

/// Scan unquoted tag content.
///
/// `base` is the absolute offset of the first content byte; every offset in
/// the output is `base` plus a content offset. Content is walked by code
/// point, and offsets are the byte offsets of code-point boundaries.
#[tracing::instrument(level = "trace", skip(content), fields(len = content.len()))]
pub fn scan(content: &str, base: u32) -> ScanOutput {
    scan_with(content, |at| base.saturating_add(at))
}

fn scan_with(content: &str, to_source: impl Fn(u32) -> u32) -> ScanOutput {
    let mut out = ScanOutput::default();
    let mut state = ScanState::Separator;

    for (i, c) in content.char_indices() {
        let at = offset(i);
        let step = state.step(at, c);
        if let Some(problem) = step.problem_at(at) {
            out.problems.push(problem.relocate(&to_source));
        }
        if let Some(raw) = step.entry {
            out.entries.push(ParsedEntry::from_raw(content, raw, &to_source));
        }
        state = step.next;
    }

    if let Some(raw) = state.finish(offset(content.len())) {
        tracing::trace!(?state, "flushing entry at end of tag");
        out.entries.push(ParsedEntry::from_raw(content, raw, &to_source));
    }

    out
}

/// Unquote a raw tag literal and scan it.
///
/// An empty literal yields nothing. A literal that is not properly delimited
/// reports `MalformedLiteral` at the literal offset, then the content left
/// after trimming outer quotes is scanned anyway. Offsets point into the
/// source text, so inside an interpreted literal they land past any escape
/// sequence that preceded them.
pub fn scan_literal(literal: &TagLiteral) -> ScanOutput {
    if literal.text.is_empty() {
        return ScanOutput::default();
    }

    let prepared = literal::prepare(&literal.text);
    let mut out = scan_with(&prepared.content, |at| {
        literal.offset.saturating_add(prepared.literal_offset(at))
    });

    if prepared.error.is_some() {
        out.problems.insert(
            0,
            TagProblem::new(TagProblemKind::MalformedLiteral, literal.offset),
        );
    }

    tracing::debug!(
        offset = literal.offset,
        entries = out.entries.len(),
        problems = out.problems.len(),
        "scanned tag literal"
    );
    out
}
