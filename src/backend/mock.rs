//! Mock backend for testing
//!
//! Keeps directories and file contents in memory so generator tests run
//! without touching the disk, and can be told to fail in specific places
//! to exercise the abort paths.
//!
//! # Features
//!
//! - Records every directory and file creation in order
//! - Stores written bytes per file
//! - Fails directory creation on demand
//! - Fails writes to the n-th created file after a given number of bytes
//!
//! # Example
//!
//! ```
//! use bulkgen::backend::{FileBackend, mock::MockBackend};
//! use std::io::Write;
//! use std::path::Path;
//!
//! let backend = MockBackend::new();
//! backend.fail_write_on_file(0, 4);
//!
//! let mut handle = backend.clone();
//! let mut writer = handle.create(Path::new("/mock/a.bin")).unwrap();
//! assert!(writer.write_all(&[0u8; 8]).is_err());
//! assert_eq!(backend.file_len(Path::new("/mock/a.bin")), Some(4));
//! ```

use super::FileBackend;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Planned write failure for one created file
#[derive(Debug, Clone, Copy)]
struct WriteFailure {
    /// 0-based creation order of the file to fail
    file_index: usize,
    /// Bytes accepted before writes start failing
    after_bytes: u64,
}

#[derive(Debug, Default)]
struct MockState {
    dirs: Vec<PathBuf>,
    /// Files in creation order; re-creating a path truncates its entry
    files: Vec<(PathBuf, Vec<u8>)>,
    create_calls: usize,
    fail_create_dir: bool,
    fail_create_file: Option<usize>,
    fail_write: Option<WriteFailure>,
}

/// In-memory backend
///
/// Cloning shares state, so a test can hand one clone to the generator
/// and inspect the results through another.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    /// Create a new mock backend that succeeds every operation
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create_dir_all` fail with `PermissionDenied`
    pub fn fail_create_dir(&self) {
        self.state.lock().unwrap().fail_create_dir = true;
    }

    /// Make the `file_index`-th `create` call (0-based) fail
    pub fn fail_create_on_file(&self, file_index: usize) {
        self.state.lock().unwrap().fail_create_file = Some(file_index);
    }

    /// Make writes to the `file_index`-th created file fail once
    /// `after_bytes` bytes have been accepted
    pub fn fail_write_on_file(&self, file_index: usize, after_bytes: u64) {
        self.state.lock().unwrap().fail_write = Some(WriteFailure { file_index, after_bytes });
    }

    /// Directories created so far
    pub fn dirs(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().dirs.clone()
    }

    /// Paths of created files, in creation order
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.state
            .lock()
            .unwrap()
            .files
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Number of `create` calls made, including failed ones
    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    /// Length of a stored file
    pub fn file_len(&self, path: &Path) -> Option<u64> {
        self.state
            .lock()
            .unwrap()
            .files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, data)| data.len() as u64)
    }

    /// Copy of a stored file's contents
    pub fn file_contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.state
            .lock()
            .unwrap()
            .files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, data)| data.clone())
    }
}

impl FileBackend for MockBackend {
    type Writer = MockWriter;

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_create_dir {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock: directory creation denied",
            ));
        }
        if !state.dirs.iter().any(|d| d == path) {
            state.dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    fn create(&mut self, path: &Path) -> io::Result<MockWriter> {
        let mut state = self.state.lock().unwrap();
        let file_index = state.create_calls;
        state.create_calls += 1;

        if state.fail_create_file == Some(file_index) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "mock: create denied"));
        }

        let slot = match state.files.iter().position(|(p, _)| p == path) {
            Some(slot) => {
                state.files[slot].1.clear();
                slot
            }
            None => {
                state.files.push((path.to_path_buf(), Vec::new()));
                state.files.len() - 1
            }
        };

        let fail_after = state
            .fail_write
            .filter(|f| f.file_index == file_index)
            .map(|f| f.after_bytes);

        Ok(MockWriter {
            state: Arc::clone(&self.state),
            slot,
            written: 0,
            fail_after,
        })
    }
}

/// Writer for one in-memory file
pub struct MockWriter {
    state: Arc<Mutex<MockState>>,
    slot: usize,
    written: u64,
    fail_after: Option<u64>,
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let accepted = match self.fail_after {
            Some(limit) if self.written >= limit => {
                return Err(io::Error::new(io::ErrorKind::Other, "mock: injected write failure"));
            }
            Some(limit) => buf.len().min((limit - self.written) as usize),
            None => buf.len(),
        };

        let mut state = self.state.lock().unwrap();
        state.files[self.slot].1.extend_from_slice(&buf[..accepted]);
        self.written += accepted as u64;
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
