//! allowtags driver library.
//!
//! Everything the `allowtags` binary does lives here so it can be tested
//! without spawning a process:
//! - [`manifest`]: loading host-supplied declaration manifests
//! - [`problem`]: turning tag problems into rendered diagnostics
//! - [`commands`]: the `check`, `tag` and `explain` subcommands

pub mod commands;
pub mod manifest;
pub mod problem;

pub use manifest::{DriverError, Manifest};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging
/// cost. Safe to call more than once.
///
/// ```bash
/// RUST_LOG=allowtags_check=debug allowtags check decls.json
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
