//! Error types for the generation run
//!
//! Every failure is fatal for the run. The variants mirror where in the
//! run the failure happened so callers can tell a setup failure (nothing
//! written) from a mid-run failure (some files already on disk).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::generator::run`] and [`crate::generator::Generator`]
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Configuration rejected before any filesystem effect
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Target directory could not be created
    #[error("failed to create target directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A test file could not be opened for writing
    #[error("failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing random data failed partway through a file
    #[error("failed to write {} ({written} of {expected} bytes written): {source}", .path.display())]
    Write {
        path: PathBuf,
        written: u64,
        expected: u64,
        #[source]
        source: io::Error,
    },
}
