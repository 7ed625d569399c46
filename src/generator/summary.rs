//! Run summary accumulated across a generation run

use crate::generator::task::FileTask;
use crate::util::units::bytes_to_gib;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file that was fully written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub filename: String,
    pub path: PathBuf,
    pub size_mb: u64,
    pub size_bytes: u64,
}

/// Totals for a generation run
///
/// Updated once per completed file and read once at the end.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    target_dir: PathBuf,
    total_bytes: u64,
    files: Vec<FileRecord>,
    elapsed: Duration,
}

impl RunSummary {
    /// Start an empty summary for `target_dir`
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Default::default()
        }
    }

    /// Record a completed file
    pub fn record(&mut self, task: &FileTask, path: PathBuf) {
        self.total_bytes += task.size_bytes;
        self.files.push(FileRecord {
            filename: task.filename.clone(),
            path,
            size_mb: task.size_mb,
            size_bytes: task.size_bytes,
        });
    }

    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Total bytes written across all completed files
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Total size in (binary) gigabytes
    pub fn total_gib(&self) -> f64 {
        bytes_to_gib(self.total_bytes)
    }

    /// Number of completed files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Completed files in generation order
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Wall-clock duration of the run
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accumulates() {
        let mut summary = RunSummary::new("/tmp/target");
        assert_eq!(summary.total_bytes(), 0);
        assert_eq!(summary.file_count(), 0);

        for (i, mb) in [1u64, 3, 2].iter().enumerate() {
            let task = FileTask::new(i, *mb);
            let path = task.path_in(Path::new("/tmp/target"));
            summary.record(&task, path);
        }

        assert_eq!(summary.file_count(), 3);
        assert_eq!(summary.total_bytes(), 6 * 1_048_576);
        assert_eq!(summary.files()[1].filename, "test_file_0001_3mb.bin");
        assert_eq!(summary.target_dir(), Path::new("/tmp/target"));
    }

    #[test]
    fn test_summary_total_gib() {
        let mut summary = RunSummary::new("/tmp/target");
        summary.record(&FileTask::new(0, 512), PathBuf::from("/tmp/target/a"));
        summary.record(&FileTask::new(1, 512), PathBuf::from("/tmp/target/b"));
        assert_eq!(summary.total_gib(), 1.0);
    }
}
