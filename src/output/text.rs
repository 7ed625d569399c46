//! Human-readable text output

use super::Reporter;
use crate::config::GenerationConfig;
use crate::generator::{FileTask, RunSummary};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// Console reporter
///
/// Prints a header, one progress line per file and a closing summary:
///
/// ```text
/// Generating 3 test files in /tmp/target...
/// File sizes: 1MB - 50MB
///
/// [1/3] Creating test_file_0000_17mb.bin (17MB)... ✓
/// ...
///
/// Done! Created 3 files
/// Total size: 0.08 GB
/// Location: /tmp/target
/// ```
///
/// Output failures (closed stdout, full pipe) are logged and otherwise
/// ignored; they never abort a run.
pub struct TextReporter<W: Write> {
    out: W,
    quiet: bool,
}

impl TextReporter<io::Stdout> {
    /// Reporter printing to stdout
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write> TextReporter<W> {
    /// Reporter printing to any writer
    ///
    /// With `quiet` set, per-file lines are skipped; header and summary
    /// are still printed.
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    /// Consume the reporter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|_| self.out.flush()) {
            debug!(error = %e, "progress output failed");
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn run_started(&mut self, config: &GenerationConfig) {
        self.emit(format_args!(
            "Generating {} test files in {}...\n",
            config.file_count,
            config.target_dir.display()
        ));
        self.emit(format_args!(
            "File sizes: {}MB - {}MB\n\n",
            config.min_size_mb, config.max_size_mb
        ));
    }

    fn file_started(&mut self, task: &FileTask, total: usize) {
        if self.quiet {
            return;
        }
        self.emit(format_args!(
            "[{}/{}] Creating {} ({}MB)... ",
            task.index + 1,
            total,
            task.filename,
            task.size_mb
        ));
    }

    fn file_finished(&mut self, _task: &FileTask, _total: usize) {
        if self.quiet {
            return;
        }
        self.emit(format_args!("✓\n"));
    }

    fn file_failed(&mut self, _task: &FileTask, _total: usize) {
        if self.quiet {
            return;
        }
        self.emit(format_args!("✗\n"));
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        self.emit(format_args!("\n{}", SummaryBlock(summary)));
    }
}

/// Closing summary lines for a run
pub struct SummaryBlock<'a>(pub &'a RunSummary);

impl fmt::Display for SummaryBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Done! Created {} files", self.0.file_count())?;
        writeln!(f, "Total size: {:.2} GB", self.0.total_gib())?;
        writeln!(f, "Location: {}", self.0.target_dir().display())
    }
}

/// Print the plan for a dry run
pub fn print_plan(config: &GenerationConfig) {
    println!("Plan:");
    println!("  Target:     {}", config.target_dir.display());
    println!("  Files:      {}", config.file_count);
    println!("  Sizes:      {}MB - {}MB", config.min_size_mb, config.max_size_mb);
    println!("  Chunk size: {}", crate::util::units::format_bytes(config.chunk_size as u64));
    println!(
        "  Worst case: {}",
        crate::util::units::format_bytes(config.max_total_bytes())
    );
}
