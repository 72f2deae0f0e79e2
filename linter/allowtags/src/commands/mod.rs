//! CLI subcommands.
//!
//! Each command is an `Args` struct plus a `run_*` function returning the
//! process exit status, so the binary stays a thin dispatcher.

mod check;
mod explain;
mod tag;

pub use check::{check_manifests, run_check, CheckArgs};
pub use explain::{run_explain, ExplainArgs};
pub use tag::{run_tag, TagArgs};

use std::io::Write;

use allowtags_check::AllowedKeys;
use allowtags_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use allowtags_diagnostic::Diagnostic;
use clap::{Args, ValueEnum};

/// No tag problems.
pub const EXIT_CLEAN: u8 = 0;
/// At least one tag problem was reported.
pub const EXIT_PROBLEMS: u8 = 1;
/// The linter could not run (unreadable input, bad manifest, bad arguments).
pub const EXIT_ERROR: u8 = 2;

/// Exit status for a run that reported `problems` diagnostics.
pub fn exit_status(problems: usize) -> u8 {
    if problems == 0 {
        EXIT_CLEAN
    } else {
        EXIT_PROBLEMS
    }
}

/// Build the allow-list from repeated `--allow-key` values.
pub fn allowed_keys(values: &[String]) -> AllowedKeys {
    let allowed = AllowedKeys::build(values);
    tracing::debug!(keys = ?allowed.iter().collect::<Vec<_>>(), "allow-list");
    allowed
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable diagnostics with source snippets.
    #[default]
    Human,
    /// A JSON array of diagnostics.
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// Output flags shared by `check` and `tag`.
#[derive(Clone, Debug, Default, Args)]
pub struct OutputArgs {
    /// Diagnostic output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// When to color human-readable output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// The emitter selected by [`OutputArgs`].
pub enum Renderer<'src, W: Write> {
    Human(TerminalEmitter<'src, W>),
    Json(JsonEmitter<'src, W>),
}

impl<'src, W: Write> Renderer<'src, W> {
    pub fn new(writer: W, output: &OutputArgs, is_tty: bool) -> Self {
        match output.format {
            OutputFormat::Human => Renderer::Human(TerminalEmitter::with_color_mode(
                writer,
                output.color.into(),
                is_tty,
            )),
            OutputFormat::Json => {
                let mut emitter = JsonEmitter::new(writer);
                emitter.begin();
                Renderer::Json(emitter)
            }
        }
    }

    /// Offsets of later diagnostics refer to `source` (when known).
    pub fn set_file(&mut self, path: Option<String>, source: Option<&'src str>) {
        match self {
            Renderer::Human(emitter) => emitter.set_file(path, source),
            Renderer::Json(emitter) => emitter.set_file(path, source),
        }
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        match self {
            Renderer::Human(emitter) => emitter.emit(diagnostic),
            Renderer::Json(emitter) => emitter.emit(diagnostic),
        }
    }

    /// Write the trailer (summary line or closing bracket) and flush.
    pub fn finish(mut self, problems: usize) {
        match &mut self {
            Renderer::Human(emitter) => {
                emitter.emit_summary(problems);
                emitter.flush();
            }
            Renderer::Json(emitter) => {
                emitter.end();
                emitter.flush();
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
