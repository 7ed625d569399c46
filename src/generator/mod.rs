//! Bulk random file generation
//!
//! Fills a target directory with `file_count` files whose sizes are drawn
//! uniformly from `[min_size_mb, max_size_mb]`, each filled with fresh
//! pseudo-random bytes.
//!
//! # Run model
//!
//! The run is strictly sequential: a file is opened, written chunk by
//! chunk, and closed before the next one is opened. Any I/O error aborts
//! the run immediately. Files already written stay on disk and the file
//! being written when the error hit is left as-is (short or empty).
//!
//! Numbering always restarts at 0, so re-running into a populated
//! directory overwrites files whose index and size happen to match and
//! leaves every other file alone.
//!
//! # Example
//!
//! ```no_run
//! use bulkgen::config::GenerationConfig;
//! use bulkgen::generator;
//!
//! let config = GenerationConfig::new("/tmp/target", 3, 1, 1);
//! let summary = generator::run(&config)?;
//! assert_eq!(summary.total_bytes(), 3 * 1_048_576);
//! # Ok::<(), bulkgen::error::GenerateError>(())
//! ```

pub mod summary;
pub mod task;

pub use summary::{FileRecord, RunSummary};
pub use task::FileTask;

use crate::backend::local::LocalBackend;
use crate::backend::FileBackend;
use crate::config::validator::validate_generation;
use crate::config::GenerationConfig;
use crate::distribution::uniform::UniformSizes;
use crate::distribution::SizeDistribution;
use crate::error::GenerateError;
use crate::output::text::TextReporter;
use crate::output::Reporter;
use crate::util::buffer::ChunkBuffer;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

/// Generate files on the local filesystem, printing progress to stdout
pub fn run(config: &GenerationConfig) -> Result<RunSummary, GenerateError> {
    Generator::new(config.clone(), LocalBackend::new(), TextReporter::stdout(false))?.run()
}

/// Generation run with injectable backend, reporter and randomness
pub struct Generator<B: FileBackend, R: Reporter> {
    config: GenerationConfig,
    sizes: Box<dyn SizeDistribution>,
    buffer: ChunkBuffer,
    backend: B,
    reporter: R,
}

impl<B: FileBackend, R: Reporter> Generator<B, R> {
    /// Create a generator with entropy-seeded sizes and contents
    ///
    /// The configuration is validated here, so an invalid one is rejected
    /// before anything touches the backend.
    pub fn new(config: GenerationConfig, backend: B, reporter: R) -> Result<Self, GenerateError> {
        validate_generation(&config)?;
        let buffer = ChunkBuffer::new(config.chunk_size);

        Ok(Self {
            config,
            sizes: Box::new(UniformSizes::new()),
            buffer,
            backend,
            reporter,
        })
    }

    /// Seed sizes and contents for a reproducible run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sizes = Box::new(UniformSizes::with_seed(seed));
        // Separate stream for contents so sizes do not depend on chunk size
        self.buffer = ChunkBuffer::with_seed(self.config.chunk_size, seed.wrapping_add(1));
        self
    }

    /// Replace the size distribution
    pub fn with_sizes(mut self, sizes: Box<dyn SizeDistribution>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Consume the generator and return its backend and reporter
    pub fn into_parts(self) -> (B, R) {
        (self.backend, self.reporter)
    }

    /// Execute the run
    pub fn run(&mut self) -> Result<RunSummary, GenerateError> {
        let start = Instant::now();
        let target_dir = self.config.target_dir.clone();
        let total = self.config.file_count;

        info!(
            target_dir = %target_dir.display(),
            files = total,
            min_mb = self.config.min_size_mb,
            max_mb = self.config.max_size_mb,
            "starting generation run"
        );
        self.reporter.run_started(&self.config);

        self.backend.create_dir_all(&target_dir).map_err(|source| {
            error!(path = %target_dir.display(), error = %source, "target directory creation failed");
            GenerateError::CreateDir {
                path: target_dir.clone(),
                source,
            }
        })?;

        let mut summary = RunSummary::new(&target_dir);

        for index in 0..total {
            let (min_mb, max_mb) = (self.config.min_size_mb, self.config.max_size_mb);
            let size_mb = self.sizes.next_size_mb(min_mb, max_mb);
            if !(min_mb..=max_mb).contains(&size_mb) {
                error!(index, size_mb, min_mb, max_mb, "size distribution out of range");
                return Err(GenerateError::InvalidConfig(format!(
                    "drawn size {}MB for file {} is outside {}MB - {}MB",
                    size_mb, index, min_mb, max_mb
                )));
            }
            let task = FileTask::new(index, size_mb);
            let path = task.path_in(&target_dir);

            self.reporter.file_started(&task, total);
            if let Err(e) = self.write_file(&task, &path) {
                self.reporter.file_failed(&task, total);
                error!(index, path = %path.display(), error = %e, "aborting run");
                return Err(e);
            }
            self.reporter.file_finished(&task, total);

            debug!(index, size_mb, path = %path.display(), "file written");
            summary.record(&task, path);
        }

        summary.set_elapsed(start.elapsed());
        info!(
            files = summary.file_count(),
            total_bytes = summary.total_bytes(),
            elapsed_ms = summary.elapsed().as_millis() as u64,
            "generation run complete"
        );
        self.reporter.run_finished(&summary);

        Ok(summary)
    }

    /// Write one file in chunks of fresh random data
    ///
    /// The writer is owned by this call and dropped (closed) on every
    /// return path.
    fn write_file(&mut self, task: &FileTask, path: &Path) -> Result<(), GenerateError> {
        let mut writer = self.backend.create(path).map_err(|source| GenerateError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

        let chunk_size = self.buffer.capacity() as u64;
        let mut written = 0u64;

        while written < task.size_bytes {
            let len = (task.size_bytes - written).min(chunk_size) as usize;
            let mut chunk = self.buffer.next_chunk(len);

            // Count every accepted byte so a failure reports what is on disk
            while !chunk.is_empty() {
                let result = match writer.write(chunk) {
                    Ok(0) => Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole chunk",
                    )),
                    Ok(n) => Ok(n),
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => Err(e),
                };
                let n = result.map_err(|source| GenerateError::Write {
                    path: path.to_path_buf(),
                    written,
                    expected: task.size_bytes,
                    source,
                })?;
                written += n as u64;
                chunk = &chunk[n..];
            }
        }

        writer.flush().map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            written,
            expected: task.size_bytes,
            source,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::output::NullReporter;
    use crate::util::units::MIB;
    use std::collections::HashSet;
    use std::path::PathBuf;

    /// Sizes taken from a fixed list, for exact assertions
    struct ScriptedSizes(Vec<u64>);

    impl SizeDistribution for ScriptedSizes {
        fn next_size_mb(&mut self, _min_mb: u64, _max_mb: u64) -> u64 {
            self.0.remove(0)
        }
    }

    fn mock_generator(
        config: GenerationConfig,
    ) -> (Generator<MockBackend, NullReporter>, MockBackend) {
        let backend = MockBackend::new();
        let generator = Generator::new(config, backend.clone(), NullReporter).unwrap();
        (generator, backend)
    }

    #[test]
    fn test_three_one_megabyte_files() {
        let config = GenerationConfig::new("/mock/target", 3, 1, 1);
        let (mut generator, backend) = mock_generator(config);

        let summary = generator.run().unwrap();

        assert_eq!(summary.file_count(), 3);
        assert_eq!(summary.total_bytes(), 3_145_728);
        assert_eq!(backend.dirs(), vec![PathBuf::from("/mock/target")]);
        for record in summary.files() {
            assert_eq!(backend.file_len(&record.path), Some(1_048_576));
        }
    }

    #[test]
    fn test_sizes_within_bounds_and_names_unique() {
        let mut config = GenerationConfig::new("/mock/target", 20, 1, 4);
        config.chunk_size = 256 * 1024;
        let (generator, backend) = mock_generator(config);
        let mut generator = generator.with_seed(3);

        let summary = generator.run().unwrap();

        let names: HashSet<_> = summary.files().iter().map(|r| r.filename.clone()).collect();
        assert_eq!(names.len(), 20);

        let mut total = 0;
        for record in summary.files() {
            assert!((1..=4).contains(&record.size_mb));
            assert_eq!(record.size_bytes, record.size_mb * MIB);
            assert_eq!(backend.file_len(&record.path), Some(record.size_bytes));
            total += record.size_bytes;
        }
        assert_eq!(summary.total_bytes(), total);
    }

    #[test]
    fn test_file_names_follow_index_and_size() {
        let config = GenerationConfig::new("/mock/target", 3, 1, 5);
        let (generator, backend) = mock_generator(config);
        let mut generator = generator.with_sizes(Box::new(ScriptedSizes(vec![2, 5, 2])));

        generator.run().unwrap();

        assert_eq!(
            backend.file_paths(),
            vec![
                PathBuf::from("/mock/target/test_file_0000_2mb.bin"),
                PathBuf::from("/mock/target/test_file_0001_5mb.bin"),
                PathBuf::from("/mock/target/test_file_0002_2mb.bin"),
            ]
        );
    }

    #[test]
    fn test_chunks_are_not_repeated() {
        let mut config = GenerationConfig::new("/mock/target", 1, 1, 1);
        config.chunk_size = 64 * 1024;
        let (mut generator, backend) = mock_generator(config);

        let summary = generator.run().unwrap();
        let data = backend.file_contents(&summary.files()[0].path).unwrap();

        let first = &data[..64 * 1024];
        assert!(data.chunks(64 * 1024).skip(1).all(|chunk| chunk != first));
    }

    #[test]
    fn test_uneven_chunk_size() {
        let mut config = GenerationConfig::new("/mock/target", 2, 1, 1);
        config.chunk_size = 300_000;
        let (mut generator, backend) = mock_generator(config);

        let summary = generator.run().unwrap();
        for record in summary.files() {
            assert_eq!(backend.file_len(&record.path), Some(MIB));
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GenerationConfig::new("/mock/target", 4, 1, 3);

        let (g1, b1) = mock_generator(config.clone());
        let (g2, b2) = mock_generator(config);
        let s1 = g1.with_seed(77).run().unwrap();
        let s2 = g2.with_seed(77).run().unwrap();

        assert_eq!(s1.files(), s2.files());
        let path = &s1.files()[0].path;
        assert_eq!(b1.file_contents(path), b2.file_contents(path));
    }

    #[test]
    fn test_write_failure_aborts_run() {
        let config = GenerationConfig::new("/mock/target", 5, 1, 1);
        let (mut generator, backend) = mock_generator(config);
        backend.fail_write_on_file(2, 1000);

        let err = generator.run().unwrap_err();

        match &err {
            GenerateError::Write { path, written, expected, .. } => {
                assert_eq!(path, &PathBuf::from("/mock/target/test_file_0002_1mb.bin"));
                // Matches what the partial file actually holds
                assert_eq!(*written, 1000);
                assert_eq!(*expected, MIB);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("1000 of 1048576 bytes written"));

        // File 3 was never attempted
        assert_eq!(backend.create_calls(), 3);
        let paths = backend.file_paths();
        assert_eq!(backend.file_len(&paths[0]), Some(MIB));
        assert_eq!(backend.file_len(&paths[1]), Some(MIB));
        assert_eq!(backend.file_len(&paths[2]), Some(1000));
    }

    #[test]
    fn test_write_failure_counts_partial_chunk() {
        let mut config = GenerationConfig::new("/mock/target", 1, 1, 1);
        config.chunk_size = 64 * 1024;
        let (mut generator, backend) = mock_generator(config);
        // Two full chunks plus part of the third
        backend.fail_write_on_file(0, 150_000);

        match generator.run().unwrap_err() {
            GenerateError::Write { path, written, .. } => {
                assert_eq!(written, 150_000);
                assert_eq!(backend.file_len(&path), Some(written));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_size_rejected() {
        let config = GenerationConfig::new("/mock/target", 3, 1, 5);
        let (generator, backend) = mock_generator(config);
        let mut generator = generator.with_sizes(Box::new(ScriptedSizes(vec![2, 9, 1])));

        let err = generator.run().unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfig(_)));
        assert!(err.to_string().contains("9MB"));
        // Stopped before opening the offending file
        assert_eq!(backend.create_calls(), 1);
    }

    #[test]
    fn test_oversized_draw_does_not_overflow() {
        let config = GenerationConfig::new("/mock/target", 1, 1, 1);
        let (generator, backend) = mock_generator(config);
        let mut generator = generator.with_sizes(Box::new(ScriptedSizes(vec![u64::MAX])));

        assert!(matches!(generator.run(), Err(GenerateError::InvalidConfig(_))));
        assert_eq!(backend.create_calls(), 0);
    }

    #[test]
    fn test_create_failure_aborts_run() {
        let config = GenerationConfig::new("/mock/target", 4, 1, 1);
        let (mut generator, backend) = mock_generator(config);
        backend.fail_create_on_file(1);

        let err = generator.run().unwrap_err();
        assert!(matches!(err, GenerateError::CreateFile { .. }));
        assert_eq!(backend.create_calls(), 2);
        assert_eq!(backend.file_paths().len(), 1);
    }

    #[test]
    fn test_directory_failure_writes_nothing() {
        let config = GenerationConfig::new("/mock/target", 3, 1, 1);
        let (mut generator, backend) = mock_generator(config);
        backend.fail_create_dir();

        let err = generator.run().unwrap_err();
        assert!(matches!(err, GenerateError::CreateDir { .. }));
        assert_eq!(backend.create_calls(), 0);
    }

    #[test]
    fn test_invalid_config_rejected_before_backend() {
        let backend = MockBackend::new();
        let config = GenerationConfig::new("/mock/target", 0, 1, 1);

        let result = Generator::new(config, backend.clone(), NullReporter);
        assert!(matches!(result, Err(GenerateError::InvalidConfig(_))));
        assert!(backend.dirs().is_empty());
    }

    #[test]
    fn test_rerun_overwrites_matching_names() {
        let config = GenerationConfig::new("/mock/target", 2, 1, 1);
        let backend = MockBackend::new();

        for _ in 0..2 {
            Generator::new(config.clone(), backend.clone(), NullReporter)
                .unwrap()
                .run()
                .unwrap();
        }

        // Same indices and sizes: files replaced, not duplicated
        assert_eq!(backend.file_paths().len(), 2);
        assert_eq!(backend.create_calls(), 4);
        for path in backend.file_paths() {
            assert_eq!(backend.file_len(&path), Some(MIB));
        }
    }

    #[test]
    fn test_reporter_sees_every_file() {
        #[derive(Default)]
        struct Recording {
            started: bool,
            files: Vec<(usize, usize)>,
            failed: Vec<usize>,
            finished_total: Option<u64>,
        }

        impl Reporter for Recording {
            fn run_started(&mut self, _config: &GenerationConfig) {
                self.started = true;
            }
            fn file_finished(&mut self, task: &FileTask, total: usize) {
                self.files.push((task.index, total));
            }
            fn file_failed(&mut self, task: &FileTask, _total: usize) {
                self.failed.push(task.index);
            }
            fn run_finished(&mut self, summary: &RunSummary) {
                self.finished_total = Some(summary.total_bytes());
            }
        }

        let config = GenerationConfig::new("/mock/target", 3, 1, 1);
        let mut generator = Generator::new(config, MockBackend::new(), Recording::default()).unwrap();
        generator.run().unwrap();

        let (_, recording) = generator.into_parts();
        assert!(recording.started);
        assert_eq!(recording.files, vec![(0, 3), (1, 3), (2, 3)]);
        assert!(recording.failed.is_empty());
        assert_eq!(recording.finished_total, Some(3 * MIB));

        let backend = MockBackend::new();
        backend.fail_write_on_file(1, 10);
        let config = GenerationConfig::new("/mock/target", 3, 1, 1);
        let mut generator = Generator::new(config, backend, Recording::default()).unwrap();
        assert!(generator.run().is_err());

        let (_, recording) = generator.into_parts();
        assert_eq!(recording.files, vec![(0, 3)]);
        assert_eq!(recording.failed, vec![1]);
        assert_eq!(recording.finished_total, None);
    }
}
