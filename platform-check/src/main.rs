//! HDN platform check
//!
//! Prints the host architecture and how the ARM64 tool gate resolves on it:
//! - whether the drone executor tool would be available
//! - whether startup would register the ARM64-specific tools
//! - whether an invocation of one would proceed
//!
//! The report goes to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod gate;
mod platform;
mod report;

/// Used when `RUST_LOG` is unset; keeps stderr quiet on a plain run.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    // The report still runs without logging
    if let Err(e) = init_logging() {
        eprintln!("platform-check: {e:#}");
    }
    run();
}

fn run() {
    debug!("HDN platform check v{}", env!("CARGO_PKG_VERSION"));

    let platform = platform::detect();

    if let Err(e) = report::report(&platform) {
        warn!("Failed to write report: {e}");
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}
