//! bulkgen - Bulk random test-file generator
//!
//! bulkgen fills a directory with a configurable number of files of random
//! size and random contents, for exercising storage, backup and
//! file-processing tools against realistic volumes of data.
//!
//! # Architecture
//!
//! - **Generator**: sequential run, one file fully written before the next
//! - **Backends**: local filesystem, in-memory mock with failure injection
//! - **Distributions**: uniform inclusive file sizes in whole megabytes
//! - **Output**: console progress, JSON run summaries, post-run verification

pub mod backend;
pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod util;

// Re-export commonly used types
pub use config::{Config, GenerationConfig};
pub use error::GenerateError;
pub use generator::{run, FileTask, RunSummary};

/// Result type used throughout bulkgen
pub type Result<T> = anyhow::Result<T>;
