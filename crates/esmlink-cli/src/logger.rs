//! Logging setup for the esmlink CLI.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber. Logs go to stderr so `--json` output on stdout stays clean.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: debug for esmlink crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. `settings.log_level` from config, `info` by default

use esmlink_config::LogLevel;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &["esmlink", "esmlink_config", "esmlink_cli"];

/// Filter directives enabling `level` for every esmlink crate.
pub fn crate_filter(level: LogLevel) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool, default_level: LogLevel) -> EnvFilter {
    if verbose {
        EnvFilter::new(crate_filter(LogLevel::Debug))
    } else if quiet {
        EnvFilter::new(crate_filter(LogLevel::Error))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(crate_filter(default_level)))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, default_level: LogLevel) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second call is a no-op.
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet, default_level))
        .with(fmt_layer)
        .try_init();
}
