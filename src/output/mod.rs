//! Run output
//!
//! Progress and summary reporting during a run, and summary export after it.

pub mod json;
pub mod text;

use crate::config::GenerationConfig;
use crate::generator::{FileTask, RunSummary};

/// Progress callbacks invoked by the generator
///
/// All methods default to doing nothing, so a reporter only implements the
/// events it cares about.
pub trait Reporter {
    /// Called once before the target directory is created
    fn run_started(&mut self, _config: &GenerationConfig) {}

    /// Called before a file is opened
    fn file_started(&mut self, _task: &FileTask, _total: usize) {}

    /// Called after a file is fully written and closed
    fn file_finished(&mut self, _task: &FileTask, _total: usize) {}

    /// Called when a file could not be created or written; the run aborts next
    fn file_failed(&mut self, _task: &FileTask, _total: usize) {}

    /// Called once after the last file
    fn run_finished(&mut self, _summary: &RunSummary) {}
}

/// Reporter that prints nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}
