//! The `check` command: lint every tagged field in declaration manifests.

use std::io::Write;
use std::path::PathBuf;

use allowtags_check::{walk_decls, AllowedKeys, ReportedProblem};
use clap::Args;

use crate::manifest::{DriverError, Manifest};
use crate::problem::reported_to_diagnostic;

use super::{allowed_keys, exit_status, OutputArgs, Renderer};

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Allowed tag key; repeat the flag or comma-join keys.
    #[arg(long = "allow-key", value_name = "KEYS")]
    pub allow_key: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Declaration manifests (JSON) to check.
    #[arg(required = true, value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,
}

/// Load every manifest, then lint them all.
///
/// Manifests are loaded up front so a broken one fails the run before any
/// diagnostics are written.
pub fn run_check<W: Write>(args: &CheckArgs, out: W, is_tty: bool) -> Result<u8, DriverError> {
    let allowed = allowed_keys(&args.allow_key);
    let manifests = args
        .manifests
        .iter()
        .map(|path| Manifest::load(path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(check_manifests(
        &manifests,
        &allowed,
        &args.output,
        out,
        is_tty,
    ))
}

/// Lint loaded manifests and render their diagnostics in order.
pub fn check_manifests<W: Write>(
    manifests: &[Manifest],
    allowed: &AllowedKeys,
    output: &OutputArgs,
    out: W,
    is_tty: bool,
) -> u8 {
    let mut renderer = Renderer::new(out, output, is_tty);
    let mut problems = 0;

    for manifest in manifests {
        renderer.set_file(Some(manifest.path.clone()), manifest.source.as_deref());

        let mut reported: Vec<ReportedProblem> = Vec::new();
        let summary = walk_decls(manifest, allowed, &mut reported);
        tracing::debug!(path = %manifest.path, ?summary, "manifest checked");

        for problem in &reported {
            renderer.emit(&reported_to_diagnostic(problem));
        }
        problems += summary.problems;
    }

    renderer.finish(problems);
    exit_status(problems)
}
