//! Local filesystem backend
//!
//! Thin wrapper over `std::fs`. Each created file is a plain `File`; chunks
//! are already large, so no extra buffering layer is added.

use super::FileBackend;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::trace;

/// Backend writing to the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBackend;

impl LocalBackend {
    /// Create a new local backend
    pub fn new() -> Self {
        Self
    }
}

impl FileBackend for LocalBackend {
    type Writer = File;

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        trace!(path = %path.display(), "create_dir_all");
        fs::create_dir_all(path)
    }

    fn create(&mut self, path: &Path) -> io::Result<File> {
        trace!(path = %path.display(), "create");
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
    }
}
