//! Per-file work item

use crate::util::units::mb_to_bytes;
use std::path::{Path, PathBuf};

/// One file to generate
///
/// Built at the start of a loop iteration and dropped once the file is
/// fully written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    /// 0-based position in the run
    pub index: usize,
    /// Drawn size in megabytes
    pub size_mb: u64,
    /// Exact byte count to write (`size_mb * 1_048_576`)
    pub size_bytes: u64,
    /// File name inside the target directory
    pub filename: String,
}

impl FileTask {
    /// Build the task for file `index` with the drawn size
    pub fn new(index: usize, size_mb: u64) -> Self {
        Self {
            index,
            size_mb,
            size_bytes: mb_to_bytes(size_mb),
            filename: file_name(index, size_mb),
        }
    }

    /// Full path of the file inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.filename)
    }
}

/// File name for a given index and size
///
/// The index is zero-padded to four digits, so names are unique within a
/// run even when sizes repeat.
pub fn file_name(index: usize, size_mb: u64) -> String {
    format!("test_file_{:04}_{}mb.bin", index, size_mb)
}
