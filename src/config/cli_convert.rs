//! CLI to Config conversion utilities

use crate::config::cli::Cli;
use crate::config::{toml, Config};
use anyhow::{Context, Result};

/// Parse a size string (e.g., "1G", "100M", "4k") to bytes
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("k") || s.ends_with("kb") {
        (s.trim_end_matches("kb").trim_end_matches("k"), 1024u64)
    } else if s.ends_with("m") || s.ends_with("mb") {
        (s.trim_end_matches("mb").trim_end_matches("m"), 1024 * 1024)
    } else if s.ends_with("g") || s.ends_with("gb") {
        (s.trim_end_matches("gb").trim_end_matches("g"), 1024 * 1024 * 1024)
    } else if s.ends_with("t") || s.ends_with("tb") {
        (s.trim_end_matches("tb").trim_end_matches("t"), 1024 * 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str.trim().parse()
        .with_context(|| format!("Invalid size format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Size out of range: {}", s))
}

/// Build the run configuration from CLI arguments
///
/// Starts from the TOML file named by `--config` (or the built-in
/// defaults) and applies every flag given on the command line on top.
pub fn build_config_from_cli(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => toml::parse_toml_file(path)?,
        None => Config::default(),
    };

    toml::merge_cli_with_config(cli, base)
}
