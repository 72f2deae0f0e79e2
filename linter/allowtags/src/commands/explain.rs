//! The `explain` command: display documentation for diagnostic codes.

use std::io::Write;

use allowtags_diagnostic::{ErrorCode, ErrorDocs};
use clap::Args;

use crate::manifest::DriverError;

use super::EXIT_CLEAN;

#[derive(Clone, Debug, Args)]
pub struct ExplainArgs {
    /// Code to explain (e.g. T0004); lists every code when omitted.
    #[arg(value_name = "CODE")]
    pub code: Option<String>,
}

pub fn run_explain<W: Write>(args: &ExplainArgs, mut out: W) -> Result<u8, DriverError> {
    let Some(code_str) = &args.code else {
        for code in ErrorDocs::all_codes() {
            let _ = writeln!(out, "{code}  {}", code.title());
        }
        let _ = out.flush();
        return Ok(EXIT_CLEAN);
    };

    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|()| DriverError::UnknownCode(code_str.clone()))?;

    match ErrorDocs::get(code) {
        Some(doc) => {
            let _ = writeln!(out, "{doc}");
        }
        None => {
            let _ = writeln!(out, "{code}: {}", code.title());
        }
    }
    let _ = out.flush();
    Ok(EXIT_CLEAN)
}
