//! Logging setup
//!
//! Diagnostics go through `tracing` to stderr; stdout is reserved for the
//! progress and summary lines.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_FILTER: &str = "warn";

/// Build the log filter
///
/// `RUST_LOG` takes precedence, then the configured level, then
/// [`DEFAULT_FILTER`].
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = level.unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directive)
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", directive, e))
}

/// Install the global tracing subscriber
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
