//! JSON Emitter
//!
//! Machine-readable diagnostic output: one JSON array of diagnostic
//! objects, written incrementally between [`JsonEmitter::begin`] and
//! [`JsonEmitter::end`].

use std::io::Write;

use serde_json::{json, Value};

use crate::{Diagnostic, Label};

use super::{DiagnosticEmitter, SourceText};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<'src, W: Write> {
    writer: W,
    first: bool,
    source: Option<SourceText<'src>>,
    file_path: Option<String>,
}

impl<'src, W: Write> JsonEmitter<'src, W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text, adding `line`/`column` to every label.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(SourceText::new(source));
        self
    }

    /// Attach the file path, added as `file` to every diagnostic.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Point the emitter at another file; later offsets refer to `source`.
    pub fn set_file(&mut self, path: Option<String>, source: Option<&'src str>) {
        self.file_path = path;
        self.source = source.map(SourceText::new);
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }

    fn label_value(&self, label: &Label) -> Value {
        let mut value = json!({
            "start": label.span.start,
            "end": label.span.end,
            "message": label.message,
        });
        if let (Some(source), Some(object)) = (&self.source, value.as_object_mut()) {
            let (line, column) = source.line_col(label.span.start);
            object.insert("line".into(), line.into());
            object.insert("column".into(), column.into());
        }
        value
    }

    fn diagnostic_value(&self, diagnostic: &Diagnostic) -> Value {
        let labels: Vec<Value> = diagnostic
            .labels
            .iter()
            .map(|label| self.label_value(label))
            .collect();
        json!({
            "code": diagnostic.code.as_str(),
            "severity": "error",
            "message": diagnostic.message,
            "file": self.file_path,
            "labels": labels,
            "notes": diagnostic.notes,
            "suggestions": diagnostic.suggestions,
        })
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let separator = if self.first { "\n" } else { ",\n" };
        self.first = false;

        let value = self.diagnostic_value(diagnostic);
        let _ = write!(self.writer, "{separator}  ");
        let _ = serde_json::to_writer(&mut self.writer, &value);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
