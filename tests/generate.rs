//! End-to-end generation runs against a temporary directory

use bulkgen::backend::local::LocalBackend;
use bulkgen::generator::{self, Generator};
use bulkgen::output::NullReporter;
use bulkgen::util::verification::verify_summary;
use bulkgen::{GenerateError, GenerationConfig, RunSummary};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MIB: u64 = 1_048_576;

fn generate(config: &GenerationConfig) -> Result<RunSummary, GenerateError> {
    Generator::new(config.clone(), LocalBackend::new(), NullReporter)?.run()
}

fn dir_entries(dir: &Path) -> Vec<(String, u64)> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (e.file_name().to_string_lossy().into_owned(), e.metadata().unwrap().len())
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn test_three_one_megabyte_files_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    let config = GenerationConfig::new(&target, 3, 1, 1);

    let summary = generator::run(&config).unwrap();

    assert_eq!(summary.total_bytes(), 3_145_728);
    assert_eq!(
        dir_entries(&target),
        vec![
            ("test_file_0000_1mb.bin".to_string(), MIB),
            ("test_file_0001_1mb.bin".to_string(), MIB),
            ("test_file_0002_1mb.bin".to_string(), MIB),
        ]
    );
}

#[test]
fn test_random_sizes_match_disk() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("nested").join("target");
    let config = GenerationConfig::new(&target, 6, 1, 3);

    let summary = generate(&config).unwrap();

    let entries = dir_entries(&target);
    assert_eq!(entries.len(), 6);

    let names: HashSet<_> = entries.iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(names.len(), 6);

    for record in summary.files() {
        assert!((1..=3).contains(&record.size_mb));
        assert_eq!(fs::metadata(&record.path).unwrap().len(), record.size_mb * MIB);
    }

    let on_disk: u64 = entries.iter().map(|(_, len)| len).sum();
    assert_eq!(on_disk, summary.total_bytes());

    let report = verify_summary(&summary);
    assert!(report.is_success());
    assert_eq!(report.on_disk_bytes, summary.total_bytes());
}

#[test]
fn test_rerun_into_populated_directory() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("keep.txt"), b"unrelated").unwrap();

    let config = GenerationConfig::new(&target, 2, 1, 1);
    generate(&config).unwrap();
    generate(&config).unwrap();

    // Identical names overwritten, unrelated file untouched
    let entries = dir_entries(&target);
    assert_eq!(entries.len(), 3);
    assert!(entries.contains(&("keep.txt".to_string(), 9)));
    assert!(entries.contains(&("test_file_0001_1mb.bin".to_string(), MIB)));
}

#[test]
fn test_target_path_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("occupied");
    fs::write(&target, b"x").unwrap();

    let config = GenerationConfig::new(&target, 2, 1, 1);
    let err = generate(&config).unwrap_err();

    assert!(matches!(err, GenerateError::CreateDir { .. }));
    assert_eq!(fs::read(&target).unwrap(), b"x");
}

#[test]
fn test_invalid_range_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    let config = GenerationConfig::new(&target, 2, 4, 1);

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidConfig(_)));
    assert!(!target.exists());
}
