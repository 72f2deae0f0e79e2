//! Tag checking on top of the scanner.
//!
//! - [`AllowedKeys`]: the read-only allow-list for a run
//! - [`validate`]: semantic problems of scanned entries
//! - [`walk_decls`]: visits every tagged field of every declaration and
//!   forwards scan-time then validation-time problems to a [`DiagnosticSink`]

mod allow_keys;
mod validate;
mod walker;

pub use allow_keys::AllowedKeys;
pub use validate::{validate, validate_entry};
pub use walker::{
    check_literal, walk_decls, DeclarationSource, DiagnosticSink, FieldContext, ReportedProblem,
    WalkSummary,
};
