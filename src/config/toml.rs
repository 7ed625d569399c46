//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::parse_size;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Serialize a configuration back to TOML (used by dry runs)
pub fn to_toml_string(config: &Config) -> Result<String> {
    ::toml::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override generation settings
    if let Some(ref target) = cli.target {
        config.generation.target_dir = target.clone();
    }
    if let Some(count) = cli.count {
        config.generation.file_count = count;
    }
    if let Some(min) = cli.min_size {
        config.generation.min_size_mb = min;
    }
    if let Some(max) = cli.max_size {
        config.generation.max_size_mb = max;
    }
    if let Some(ref chunk_str) = cli.chunk_size {
        let chunk = parse_size(chunk_str).context("Invalid chunk size")?;
        config.generation.chunk_size = usize::try_from(chunk)
            .with_context(|| format!("Chunk size too large: {}", chunk_str))?;
    }

    // Override output settings
    if cli.quiet {
        config.output.quiet = true;
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.verify {
        config.output.verify = true;
    }

    // Override runtime settings
    if cli.seed.is_some() {
        config.runtime.seed = cli.seed;
    }
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if let Some(ref level) = cli.log_level {
        config.runtime.log_level = Some(level.clone());
    } else if cli.debug {
        config.runtime.log_level = Some("debug".to_string());
    }

    Ok(config)
}
