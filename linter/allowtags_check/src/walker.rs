//! Field walker: the seam between a host and the tag checker.
//!
//! A host supplies declarations through [`DeclarationSource`] and receives
//! problems through [`DiagnosticSink`]. The walker holds no state beyond
//! the allow-list it is given. Nothing is suppressed or deduplicated.

use allowtags_ir::{FieldDecl, TagLiteral, TypeDecl};
use allowtags_scanner::{scan_literal, TagProblem};

use crate::validate::validate;
use crate::AllowedKeys;

/// Supplies the declarations to check, in source order.
pub trait DeclarationSource {
    fn declarations(&self) -> &[TypeDecl];
}

impl DeclarationSource for [TypeDecl] {
    fn declarations(&self) -> &[TypeDecl] {
        self
    }
}

impl DeclarationSource for Vec<TypeDecl> {
    fn declarations(&self) -> &[TypeDecl] {
        self
    }
}

/// The field a problem belongs to.
#[derive(Copy, Clone, Debug)]
pub struct FieldContext<'a> {
    pub decl: &'a TypeDecl,
    pub field: &'a FieldDecl,
    pub tag: &'a TagLiteral,
}

/// Receives every problem the walker finds.
pub trait DiagnosticSink {
    fn report(&mut self, ctx: &FieldContext<'_>, problem: TagProblem);
}

/// A problem detached from the borrowed declaration it was found in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReportedProblem {
    pub type_name: String,
    pub field_name: String,
    pub problem: TagProblem,
}

impl DiagnosticSink for Vec<ReportedProblem> {
    fn report(&mut self, ctx: &FieldContext<'_>, problem: TagProblem) {
        self.push(ReportedProblem {
            type_name: ctx.decl.display_name().to_owned(),
            field_name: ctx.field.display_name().to_owned(),
            problem,
        });
    }
}

/// Counts of one walk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WalkSummary {
    pub decls: usize,
    pub fields: usize,
    /// Fields that carried a tag literal.
    pub tags: usize,
    pub problems: usize,
}

/// Scan and validate one tag literal.
///
/// Scan-time problems come first, then validation-time problems, each in
/// left-to-right order.
pub fn check_literal(literal: &TagLiteral, allowed: &AllowedKeys) -> Vec<TagProblem> {
    let scanned = scan_literal(literal);
    let mut problems = scanned.problems;
    problems.extend(validate(&scanned.entries, allowed));
    problems
}

/// Visit every field of every declaration and report its tag problems.
#[tracing::instrument(level = "debug", skip_all, fields(allowed = allowed.len()))]
pub fn walk_decls<S, K>(source: &S, allowed: &AllowedKeys, sink: &mut K) -> WalkSummary
where
    S: DeclarationSource + ?Sized,
    K: DiagnosticSink + ?Sized,
{
    let mut summary = WalkSummary::default();

    for decl in source.declarations() {
        summary.decls += 1;
        for field in &decl.fields {
            summary.fields += 1;
            let Some(tag) = &field.tag else {
                continue;
            };
            summary.tags += 1;

            let ctx = FieldContext { decl, field, tag };
            let problems = check_literal(tag, allowed);
            if !problems.is_empty() {
                tracing::debug!(
                    decl = decl.display_name(),
                    field = field.display_name(),
                    count = problems.len(),
                    "tag problems"
                );
            }
            summary.problems += problems.len();
            for problem in problems {
                sink.report(&ctx, problem);
            }
        }
    }

    tracing::debug!(?summary, "walk finished");
    summary
}
