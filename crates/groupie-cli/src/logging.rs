//! Logger setup.
//!
//! Library crates log through the `log` facade; the binary installs
//! `twyg` as the backend before running a command. Log lines go to
//! stderr so stdout carries only command output.

use anyhow::Result;

use crate::config::LoggingConfig;

/// Map a configured level name onto a `twyg` level.
///
/// Unrecognized names fall back to `warn`.
fn level(name: &str) -> twyg::LogLevel {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => twyg::LogLevel::Trace,
        "debug" => twyg::LogLevel::Debug,
        "info" => twyg::LogLevel::Info,
        "error" => twyg::LogLevel::Error,
        _ => twyg::LogLevel::Warn,
    }
}

fn opts(config: &LoggingConfig) -> Result<twyg::Opts> {
    twyg::OptsBuilder::new()
        .coloured(config.coloured)
        .level(level(&config.level))
        .output(twyg::Output::Stderr)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build logger options: {e:?}"))
}

/// Install the global logger.
///
/// # Errors
///
/// Returns an error if the options are rejected or a logger is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    twyg::setup(opts(config)?).map_err(|e| anyhow::anyhow!("Failed to set up logger: {e:?}"))?;

    log::debug!("Logger initialised at level {}", config.level);
    Ok(())
}
