//! Filesystem backend abstraction
//!
//! The generator never touches `std::fs` directly; it goes through a
//! `FileBackend`. The local backend writes real files, the mock backend
//! keeps everything in memory and can inject failures.
//!
//! # Example
//!
//! ```no_run
//! use bulkgen::backend::{FileBackend, local::LocalBackend};
//! use std::io::Write;
//! use std::path::Path;
//!
//! let mut backend = LocalBackend::new();
//! backend.create_dir_all(Path::new("/tmp/target"))?;
//! let mut file = backend.create(Path::new("/tmp/target/example.bin"))?;
//! file.write_all(&[0u8; 16])?;
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};
use std::path::Path;

/// Backend trait for directory and file creation
///
/// # Lifecycle
///
/// 1. `create_dir_all()` once for the target directory
/// 2. `create()` once per file; the returned writer is dropped (closed)
///    before the next file is created
pub trait FileBackend {
    /// Writer handed out for each created file
    type Writer: Write;

    /// Create a directory and all missing parents
    ///
    /// Must succeed when the directory already exists.
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;

    /// Create a file for writing, truncating it if it already exists
    fn create(&mut self, path: &Path) -> io::Result<Self::Writer>;
}

pub mod local;
pub mod mock;
