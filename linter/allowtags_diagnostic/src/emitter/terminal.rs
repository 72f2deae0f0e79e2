//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::Write;

use crate::{Diagnostic, Label};

use super::{DiagnosticEmitter, SourceText};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Given the source text (and optionally its path), labels render as
/// `path:line:col` headers followed by the source line and a caret
/// underline. Without it, labels show raw byte spans.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceText<'src>>,
    file_path: Option<String>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a terminal emitter with explicit color mode.
    ///
    /// `is_tty` is whether `writer` is a terminal (used for `ColorMode::Auto`).
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text offsets point into.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(SourceText::new(source));
        self
    }

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

    /// `error: N tag problems found`; nothing when the run was clean.
    pub fn emit_summary(&mut self, problem_count: usize) {
        if problem_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": {problem_count} tag problem{} found",
            plural_s(problem_count)
        );
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// `  --> 12..15: message`
    fn write_label_plain(&mut self, label: &Label) {
        let _ = write!(self.writer, "  --> ");
        if let Some(path) = &self.file_path {
            let _ = write!(self.writer, "{path}@");
        }
        let _ = write!(self.writer, "{}: ", label.span);
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }

    /// Location header, source line and caret underline.
    fn write_label_snippet(&mut self, label: &Label, source: &SourceText<'_>) {
        let (line, col) = source.line_col(label.span.start);
        let (end_line, end_col) = source.line_col(label.span.end);
        let text = source.line(line);
        let line_chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);

        let end_col = if end_line == line {
            end_col
        } else {
            line_chars.saturating_add(1)
        };
        let carets = end_col.saturating_sub(col).max(1) as usize;

        // Keep tabs in the padding so carets line up under tabbed source.
        let pad: String = text
            .chars()
            .take(col.saturating_sub(1) as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        let gutter = " ".repeat(line.to_string().len());

        let _ = write!(self.writer, "{gutter}--> ");
        if let Some(path) = &self.file_path {
            let _ = write!(self.writer, "{path}:");
        }
        let _ = writeln!(self.writer, "{line}:{col}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {text}");
        let _ = write!(self.writer, "{gutter} | {pad}");

        let underline = "^".repeat(carets);
        self.write_colored(&underline, colors::ERROR);
        let _ = write!(self.writer, " ");
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let source = self.source.take();
        for label in &diagnostic.labels {
            match &source {
                Some(src) => self.write_label_snippet(label, src),
                None => self.write_label_plain(label),
            }
        }
        self.source = source;

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
