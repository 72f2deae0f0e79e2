//! Tag problem rendering.
//!
//! Converts [`TagProblem`]s into [`Diagnostic`]s: one stable code per kind,
//! the problem's fixed message, a label at its offset and a help line.

use allowtags_check::ReportedProblem;
use allowtags_diagnostic::{Diagnostic, ErrorCode};
use allowtags_ir::Span;
use allowtags_scanner::{TagProblem, TagProblemKind};

/// The error code for a problem kind.
pub fn error_code(kind: &TagProblemKind) -> ErrorCode {
    match kind {
        TagProblemKind::MalformedLiteral => ErrorCode::T0001,
        TagProblemKind::InvalidKeyChar => ErrorCode::T0002,
        TagProblemKind::EmptyKey => ErrorCode::T0003,
        TagProblemKind::UnknownKey(_) => ErrorCode::T0004,
        TagProblemKind::EmptyValue => ErrorCode::T0005,
        TagProblemKind::UnquotedValue => ErrorCode::T0006,
        TagProblemKind::UnterminatedQuote => ErrorCode::T0007,
        TagProblemKind::MissingSeparator => ErrorCode::T0008,
    }
}

/// Render a single tag problem. All tag problems are errors.
pub fn tag_problem_to_diagnostic(problem: &TagProblem) -> Diagnostic {
    let at = problem.offset;
    let diag =
        Diagnostic::error(error_code(&problem.kind)).with_message(problem.kind.to_string());

    match &problem.kind {
        TagProblemKind::MalformedLiteral => diag
            .with_label(Span::point(at), "expected a string literal")
            .with_suggestion("write tags as a raw string: `key:\"value\"`"),
        TagProblemKind::InvalidKeyChar => diag
            .with_label(Span::new(at, at.saturating_add(1)), "not allowed in a tag key")
            .with_suggestion("keys cannot hold spaces, quotes, colons or control characters"),
        TagProblemKind::EmptyKey => diag
            .with_label(Span::point(at), "key expected before ':'")
            .with_suggestion("add a key, as in `json:\"name\"`"),
        TagProblemKind::UnknownKey(key) => {
            let len = u32::try_from(key.len()).unwrap_or(u32::MAX);
            diag.with_label(Span::new(at, at.saturating_add(len)), "not in the allow-list")
                .with_suggestion(format!("pass `--allow-key {key}` to accept it"))
        }
        TagProblemKind::EmptyValue => diag
            .with_label(Span::point(at), "value expected here")
            .with_suggestion("give the key a quoted value or remove the pair"),
        TagProblemKind::UnquotedValue => diag
            .with_label(Span::point(at), "value should start with '\"'")
            .with_suggestion("quote the value, as in `key:\"value\"`"),
        TagProblemKind::UnterminatedQuote => diag
            .with_label(Span::point(at), "closing '\"' expected here")
            .with_suggestion("close the value with '\"'"),
        TagProblemKind::MissingSeparator => diag
            .with_label(Span::point(at), "':' expected here")
            .with_suggestion("separate key and value with ':' and no spaces"),
    }
}

/// Render a problem found by the walker, naming the field it belongs to.
pub fn reported_to_diagnostic(reported: &ReportedProblem) -> Diagnostic {
    tag_problem_to_diagnostic(&reported.problem).with_note(format!(
        "in field `{}` of `{}`",
        reported.field_name, reported.type_name
    ))
}
