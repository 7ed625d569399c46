//! Configuration validation

use super::*;
use crate::error::GenerateError;
use anyhow::Result;
use tracing::warn;

/// Smallest accepted write chunk
pub const MIN_CHUNK_SIZE: usize = 4 * 1024;

/// Largest accepted write chunk
pub const MAX_CHUNK_SIZE: usize = 256 * 1024 * 1024;

/// Worst-case disk usage above which a warning is emitted
pub const LARGE_RUN_WARN_BYTES: u64 = 100 * 1024 * 1024 * 1024;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_generation(&config.generation)?;
    validate_chunk_bounds(&config.generation)?;
    validate_target_path(&config.generation)?;
    validate_output(&config.output)?;

    if config.generation.max_total_bytes() > LARGE_RUN_WARN_BYTES {
        warn!(
            max_bytes = config.generation.max_total_bytes(),
            "run may consume up to {} of disk space",
            format_bytes(config.generation.max_total_bytes())
        );
    }

    Ok(())
}

/// Validate the generation parameters
///
/// This is the subset of checks the generator itself enforces, so it
/// returns the typed error rather than an `anyhow` one.
pub fn validate_generation(config: &GenerationConfig) -> std::result::Result<(), GenerateError> {
    if config.file_count == 0 {
        return Err(GenerateError::InvalidConfig(
            "file_count must be greater than 0".to_string(),
        ));
    }

    if config.min_size_mb == 0 {
        return Err(GenerateError::InvalidConfig(
            "min_size_mb must be at least 1".to_string(),
        ));
    }

    if config.min_size_mb > config.max_size_mb {
        return Err(GenerateError::InvalidConfig(format!(
            "min_size_mb ({}) must not exceed max_size_mb ({})",
            config.min_size_mb, config.max_size_mb
        )));
    }

    if config.max_size_mb.checked_mul(MIB).is_none() {
        return Err(GenerateError::InvalidConfig(format!(
            "max_size_mb ({}) is too large",
            config.max_size_mb
        )));
    }

    if config.chunk_size == 0 {
        return Err(GenerateError::InvalidConfig(
            "chunk_size must be greater than 0".to_string(),
        ));
    }

    if config.target_dir.as_os_str().is_empty() {
        return Err(GenerateError::InvalidConfig(
            "target_dir must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Check that the chunk size is in the accepted range
///
/// Kept separate from `validate_generation` so library callers can use
/// tiny chunks in tests while CLI runs stay within sane bounds.
fn validate_chunk_bounds(config: &GenerationConfig) -> Result<()> {
    if config.chunk_size < MIN_CHUNK_SIZE || config.chunk_size > MAX_CHUNK_SIZE {
        anyhow::bail!(
            "chunk_size must be between {} and {}, got {}",
            format_bytes(MIN_CHUNK_SIZE as u64),
            format_bytes(MAX_CHUNK_SIZE as u64),
            format_bytes(config.chunk_size as u64)
        );
    }
    Ok(())
}

/// Validate the target path
///
/// A missing path is fine (it is created); an existing non-directory is not.
fn validate_target_path(config: &GenerationConfig) -> Result<()> {
    if config.target_dir.exists() && !config.target_dir.is_dir() {
        anyhow::bail!(
            "target path exists and is not a directory: {}",
            config.target_dir.display()
        );
    }

    Ok(())
}

/// Validate output configuration
fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.json_output {
        if path.is_dir() {
            anyhow::bail!("json_output must be a file path, got directory: {}", path.display());
        }
    }
    Ok(())
}
