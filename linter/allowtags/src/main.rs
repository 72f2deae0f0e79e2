//! `allowtags`: check struct tag keys against an allow-list.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use allowtags::commands::{
    run_check, run_explain, run_tag, CheckArgs, ExplainArgs, TagArgs, EXIT_ERROR,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "allowtags",
    version,
    about = "Report struct tag keys that are not in an allow-list"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check every tagged field listed in declaration manifests
    Check(CheckArgs),
    /// Check a single tag literal
    Tag(TagArgs),
    /// Show documentation for a diagnostic code
    Explain(ExplainArgs),
}

fn main() -> ExitCode {
    allowtags::init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let out = stdout.lock();

    let result = match &cli.command {
        Command::Check(args) => run_check(args, out, is_tty),
        Command::Tag(args) => Ok(run_tag(args, out, is_tty)),
        Command::Explain(args) => run_explain(args, out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
