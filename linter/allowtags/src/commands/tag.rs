//! The `tag` command: lint one tag literal given on the command line.

use std::io::Write;

use allowtags_check::{check_literal, validate};
use allowtags_ir::TagLiteral;
use allowtags_scanner::{scan, TagProblem};
use clap::Args;

use crate::problem::tag_problem_to_diagnostic;

use super::{allowed_keys, exit_status, OutputArgs, Renderer};

#[derive(Clone, Debug, Args)]
pub struct TagArgs {
    /// Allowed tag key; repeat the flag or comma-join keys.
    #[arg(long = "allow-key", value_name = "KEYS")]
    pub allow_key: Vec<String>,

    /// LITERAL is bare tag content, without surrounding quotes.
    #[arg(long)]
    pub bare: bool,

    #[command(flatten)]
    pub output: OutputArgs,

    /// The tag literal, quotes included (e.g. '`json:"id"`').
    #[arg(value_name = "LITERAL", allow_hyphen_values = true)]
    pub literal: String,
}

/// Lint `args.literal` as if it started at offset 0 of a one-line file.
pub fn run_tag<W: Write>(args: &TagArgs, out: W, is_tty: bool) -> u8 {
    let allowed = allowed_keys(&args.allow_key);

    let problems: Vec<TagProblem> = if args.bare {
        let scanned = scan(&args.literal, 0);
        let mut problems = scanned.problems;
        problems.extend(validate(&scanned.entries, &allowed));
        problems
    } else {
        check_literal(&TagLiteral::new(args.literal.as_str(), 0), &allowed)
    };

    let mut renderer = Renderer::new(out, &args.output, is_tty);
    renderer.set_file(None, Some(args.literal.as_str()));
    for problem in &problems {
        renderer.emit(&tag_problem_to_diagnostic(problem));
    }
    renderer.finish(problems.len());
    exit_status(problems.len())
}
