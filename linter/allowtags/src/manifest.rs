//! Declaration manifests.
//!
//! A manifest is the JSON document a host writes for the linter:
//!
//! ```json
//! {
//!   "path": "models.go",
//!   "source": "type A struct { ... }",
//!   "decls": [
//!     { "name": "A", "offset": 5, "fields": [
//!       { "name": "ID", "offset": 16, "tag": { "text": "`json:\"id\"`", "offset": 23 } }
//!     ] }
//!   ]
//! }
//! ```
//!
//! `source` is optional; when present, diagnostics show source snippets and
//! every tag literal must lie inside it.

use std::io;
use std::path::Path;

use allowtags_check::DeclarationSource;
use allowtags_ir::{Span, SpanError, TypeDecl};
use serde::Deserialize;

/// Fatal driver errors. Tag problems are never errors; these are.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest '{path}': {source}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: tag of {decl}.{field} does not fit in a 32-bit span: {source}")]
    SpanOverflow {
        path: String,
        decl: String,
        field: String,
        #[source]
        source: SpanError,
    },

    #[error("{path}: tag of {decl}.{field} ends at byte {end}, past the end of the {len}-byte source")]
    TagOutOfRange {
        path: String,
        decl: String,
        field: String,
        end: u32,
        len: usize,
    },

    #[error("unknown error code '{0}'; codes look like T0001")]
    UnknownCode(String),
}

/// A host-supplied list of declarations for one source file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Source file the declarations came from, used in diagnostics.
    pub path: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub decls: Vec<TypeDecl>,
}

impl Manifest {
    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self, DriverError> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: origin.clone(),
            source,
        })?;
        Manifest::parse(&text, &origin)
    }

    /// Parse and validate manifest JSON. `origin` names the input in errors.
    pub fn parse(text: &str, origin: &str) -> Result<Self, DriverError> {
        let manifest: Manifest =
            serde_json::from_str(text).map_err(|source| DriverError::Manifest {
                path: origin.to_owned(),
                source,
            })?;
        manifest.validate(origin)?;
        tracing::debug!(
            path = %manifest.path,
            decls = manifest.decls.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    fn validate(&self, origin: &str) -> Result<(), DriverError> {
        for decl in &self.decls {
            for field in &decl.fields {
                let Some(tag) = &field.tag else {
                    continue;
                };
                let start = tag.offset as usize;
                let span = Span::try_from_range(start..start + tag.text.len()).map_err(
                    |source| DriverError::SpanOverflow {
                        path: origin.to_owned(),
                        decl: decl.display_name().to_owned(),
                        field: field.display_name().to_owned(),
                        source,
                    },
                )?;

                if let Some(source) = &self.source {
                    if span.end as usize > source.len() {
                        return Err(DriverError::TagOutOfRange {
                            path: origin.to_owned(),
                            decl: decl.display_name().to_owned(),
                            field: field.display_name().to_owned(),
                            end: span.end,
                            len: source.len(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl DeclarationSource for Manifest {
    fn declarations(&self) -> &[TypeDecl] {
        &self.decls
    }
}
