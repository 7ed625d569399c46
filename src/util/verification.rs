//! Post-run verification
//!
//! Re-stats every file recorded in a [`RunSummary`] and compares its on-disk
//! length with the declared size. Verification is read-only, so files are
//! checked in parallel.

use crate::generator::{FileRecord, RunSummary};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Problem found for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationIssue {
    /// File could not be stat'ed
    Missing { path: PathBuf, kind: io::ErrorKind },
    /// File exists but its length differs from the declared size
    SizeMismatch { path: PathBuf, expected: u64, actual: u64 },
}

/// Outcome of verifying a run
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    /// Files checked
    pub checked: usize,
    /// Sum of on-disk lengths of all files that could be stat'ed
    pub on_disk_bytes: u64,
    /// Problems found, in generation order
    pub issues: Vec<VerificationIssue>,
}

impl VerificationReport {
    /// True when every file exists with its declared size
    pub fn is_success(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Verify every file recorded in `summary`
pub fn verify_summary(summary: &RunSummary) -> VerificationReport {
    let results: Vec<(u64, Option<VerificationIssue>)> =
        summary.files().par_iter().map(check_file).collect();

    let mut report = VerificationReport {
        checked: results.len(),
        ..Default::default()
    };

    for (len, issue) in results {
        report.on_disk_bytes += len;
        if let Some(issue) = issue {
            report.issues.push(issue);
        }
    }

    report
}

fn check_file(record: &FileRecord) -> (u64, Option<VerificationIssue>) {
    match fs::metadata(&record.path) {
        Ok(metadata) => {
            let actual = metadata.len();
            let issue = (actual != record.size_bytes).then(|| VerificationIssue::SizeMismatch {
                path: record.path.clone(),
                expected: record.size_bytes,
                actual,
            });
            (actual, issue)
        }
        Err(e) => (
            0,
            Some(VerificationIssue::Missing {
                path: record.path.clone(),
                kind: e.kind(),
            }),
        ),
    }
}
