//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// bulkgen - Bulk random test-file generator
#[derive(Parser, Debug)]
#[command(name = "bulkgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target directory for generated files (created if missing)
    #[arg(value_name = "DIR", env = "BULKGEN_TARGET")]
    pub target: Option<PathBuf>,

    // === Generation Options ===
    /// Number of files to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Minimum file size in megabytes (inclusive)
    #[arg(long, value_name = "MB")]
    pub min_size: Option<u64>,

    /// Maximum file size in megabytes (inclusive)
    #[arg(long, value_name = "MB")]
    pub max_size: Option<u64>,

    /// Write chunk size (e.g., 1M, 256k)
    #[arg(long)]
    pub chunk_size: Option<String>,

    /// Seed for reproducible sizes and contents (default: entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    // === Output Options ===
    /// Suppress per-file progress lines
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Re-check every generated file size after the run
    #[arg(long)]
    pub verify: bool,

    // === Configuration Options ===
    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Validate configuration and print the plan without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Log filter (e.g. info, bulkgen=debug); RUST_LOG takes precedence
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only checks that can be made on the flags alone; the merged
    /// configuration is checked again by the validator.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.count == Some(0) {
            anyhow::bail!("--count must be at least 1");
        }

        if self.min_size == Some(0) {
            anyhow::bail!("--min-size must be at least 1 MB");
        }

        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                anyhow::bail!("--min-size ({}) must not exceed --max-size ({})", min, max);
            }
        }

        Ok(())
    }
}
