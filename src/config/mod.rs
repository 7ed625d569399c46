//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::util::units::{format_bytes, MIB};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Parameters of a single generation run
///
/// Built once before the run starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Directory that receives the generated files (created if missing)
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,
    /// Number of files to generate
    #[serde(default = "default_file_count")]
    pub file_count: usize,
    /// Smallest file size in whole megabytes (inclusive)
    #[serde(default = "default_min_size_mb")]
    pub min_size_mb: u64,
    /// Largest file size in whole megabytes (inclusive)
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,
    /// Bytes of random data generated and written per write call
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("/tmp/target")
}

fn default_file_count() -> usize {
    300
}

fn default_min_size_mb() -> u64 {
    1
}

fn default_max_size_mb() -> u64 {
    50
}

fn default_chunk_size() -> usize {
    MIB as usize
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            file_count: default_file_count(),
            min_size_mb: default_min_size_mb(),
            max_size_mb: default_max_size_mb(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl GenerationConfig {
    /// Convenience constructor used by tests and library callers
    pub fn new(target_dir: impl Into<PathBuf>, file_count: usize, min_size_mb: u64, max_size_mb: u64) -> Self {
        Self {
            target_dir: target_dir.into(),
            file_count,
            min_size_mb,
            max_size_mb,
            chunk_size: default_chunk_size(),
        }
    }

    /// Upper bound on disk usage for the run, in bytes
    pub fn max_total_bytes(&self) -> u64 {
        (self.file_count as u64)
            .saturating_mul(self.max_size_mb)
            .saturating_mul(MIB)
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Suppress per-file progress lines (summary is still printed)
    #[serde(default)]
    pub quiet: bool,
    /// Write a JSON summary to this path after a successful run
    pub json_output: Option<PathBuf>,
    /// Re-stat every generated file after the run
    #[serde(default)]
    pub verify: bool,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Seed for sizes and file contents; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Validate and print the plan without touching the disk
    #[serde(default)]
    pub dry_run: bool,
    /// Log filter directive (e.g. "info", "bulkgen=debug")
    pub log_level: Option<String>,
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Generation: {}", self.generation)?;
        writeln!(f, "  Output: {}", self.output)?;
        writeln!(f, "  Runtime: {}", self.runtime)?;
        Ok(())
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files of {}-{}MB in {}, chunk={}",
            self.file_count,
            self.min_size_mb,
            self.max_size_mb,
            self.target_dir.display(),
            format_bytes(self.chunk_size as u64)
        )
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quiet={}, verify={}", self.quiet, self.verify)?;
        if let Some(ref path) = self.json_output {
            write!(f, ", json={}", path.display())?;
        }
        Ok(())
    }
}

impl fmt::Display for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.seed {
            Some(seed) => write!(f, "seed={}", seed)?,
            None => write!(f, "seed=entropy")?,
        }
        if self.dry_run {
            write!(f, ", dry_run")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.target_dir, PathBuf::from("/tmp/target"));
        assert_eq!(config.file_count, 300);
        assert_eq!(config.min_size_mb, 1);
        assert_eq!(config.max_size_mb, 50);
        assert_eq!(config.chunk_size, 1024 * 1024);
    }

    #[test]
    fn test_max_total_bytes() {
        let config = GenerationConfig::new("/tmp/x", 3, 1, 2);
        assert_eq!(config.max_total_bytes(), 3 * 2 * 1024 * 1024);
    }

    #[test]
    fn test_display_generation() {
        let config = GenerationConfig::new("/tmp/x", 3, 1, 2);
        let s = config.to_string();
        assert!(s.contains("3 files of 1-2MB"));
        assert!(s.contains("/tmp/x"));
        assert!(s.contains("1.00 MB"));
    }

    #[test]
    fn test_display_runtime() {
        let runtime = RuntimeConfig { seed: Some(7), dry_run: true, log_level: None };
        assert_eq!(runtime.to_string(), "seed=7, dry_run");
        assert_eq!(RuntimeConfig::default().to_string(), "seed=entropy");
    }
}
