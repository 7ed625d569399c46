//! JSON output formatting
//!
//! Serializes a completed run for downstream tooling: totals, timing and
//! one record per generated file.

use crate::config::GenerationConfig;
use crate::generator::{FileRecord, RunSummary};
use crate::Result;
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct JsonRunSummary<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    /// RFC 3339 completion time
    pub completed_at: String,
    pub config: JsonRunConfig,
    pub totals: JsonTotals,
    pub files: &'a [FileRecord],
}

/// Parameters the run was started with
#[derive(Debug, Serialize)]
pub struct JsonRunConfig {
    pub target_dir: PathBuf,
    pub file_count: usize,
    pub min_size_mb: u64,
    pub max_size_mb: u64,
    pub chunk_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Aggregate numbers for the run
#[derive(Debug, Serialize)]
pub struct JsonTotals {
    pub files: usize,
    pub bytes: u64,
    pub gib: f64,
    pub elapsed_secs: f64,
}

/// Build the JSON document for a run
pub fn build_json_summary<'a>(
    summary: &'a RunSummary,
    config: &GenerationConfig,
    seed: Option<u64>,
    completed_at: DateTime<Utc>,
) -> JsonRunSummary<'a> {
    JsonRunSummary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        completed_at: completed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        config: JsonRunConfig {
            target_dir: config.target_dir.clone(),
            file_count: config.file_count,
            min_size_mb: config.min_size_mb,
            max_size_mb: config.max_size_mb,
            chunk_size: config.chunk_size,
            seed,
        },
        totals: JsonTotals {
            files: summary.file_count(),
            bytes: summary.total_bytes(),
            gib: summary.total_gib(),
            elapsed_secs: summary.elapsed().as_secs_f64(),
        },
        files: summary.files(),
    }
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, document: &JsonRunSummary<'_>) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)
        .with_context(|| format!("Failed to write JSON output: {}", output_path.display()))?;
    writer.flush()
        .with_context(|| format!("Failed to flush JSON output: {}", output_path.display()))?;

    Ok(())
}
