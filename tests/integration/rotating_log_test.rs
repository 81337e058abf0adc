// Integration tests for RotatingLogSink
// Covers size capping, backup shifting and retention limits

use std::fs;
use std::path::Path;
use sysmon::core::rotating_log::{RotatingLogSink, RotationPolicy, Severity};
use tempfile::TempDir;

fn file_len(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[test]
fn test_active_file_never_exceeds_cap() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("monitor.log");
    let policy = RotationPolicy {
        max_bytes: 200,
        backup_count: 2,
    };
    let mut sink = RotatingLogSink::open(&path, policy).unwrap();

    for i in 0..40 {
        sink.write(Severity::Info, &format!("sample record number {}", i))
            .unwrap();
        assert!(
            file_len(&path) <= 200,
            "active file grew to {} bytes",
            file_len(&path)
        );
        assert_eq!(sink.current_size(), file_len(&path));
    }

    assert!(sink.rotations() >= 1);
}

#[test]
fn test_backups_are_numbered_by_recency() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("monitor.log");
    let policy = RotationPolicy {
        max_bytes: 60,
        backup_count: 3,
    };
    let mut sink = RotatingLogSink::open(&path, policy).unwrap();

    // Each record is larger than half the cap, so every write after the first rotates
    sink.write(Severity::Info, "first record of the run").unwrap();
    sink.write(Severity::Info, "second record of the run").unwrap();
    sink.write(Severity::Info, "third record of the run").unwrap();
    sink.close().unwrap();

    let active = fs::read_to_string(&path).unwrap();
    let newest = fs::read_to_string(temp_dir.path().join("monitor.log.1")).unwrap();
    let older = fs::read_to_string(temp_dir.path().join("monitor.log.2")).unwrap();

    assert!(active.contains("third record"));
    assert!(newest.contains("second record"));
    assert!(older.contains("first record"));
    assert!(!temp_dir.path().join("monitor.log.3").exists());
}

#[test]
fn test_oldest_backup_is_discarded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("monitor.log");
    let policy = RotationPolicy {
        max_bytes: 60,
        backup_count: 2,
    };
    let mut sink = RotatingLogSink::open(&path, policy).unwrap();

    // backup_count + 2 rotations
    for i in 0..5 {
        sink.write(Severity::Info, &format!("generation {} of the log", i))
            .unwrap();
    }
    assert_eq!(sink.rotations(), 4);
    sink.close().unwrap();

    assert!(temp_dir.path().join("monitor.log.1").exists());
    assert!(temp_dir.path().join("monitor.log.2").exists());
    assert!(!temp_dir.path().join("monitor.log.3").exists());

    let all: String = ["monitor.log", "monitor.log.1", "monitor.log.2"]
        .iter()
        .map(|name| fs::read_to_string(temp_dir.path().join(name)).unwrap())
        .collect();
    assert!(!all.contains("generation 0"));
    assert!(!all.contains("generation 1"));
    assert!(all.contains("generation 4"));
}

#[test]
fn test_oversized_record_lands_in_fresh_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("monitor.log");
    let policy = RotationPolicy {
        max_bytes: 80,
        backup_count: 1,
    };
    let mut sink = RotatingLogSink::open(&path, policy).unwrap();

    sink.write(Severity::Info, "short").unwrap();
    let big = "x".repeat(200);
    sink.write(Severity::Warning, &big).unwrap();
    sink.close().unwrap();

    let active = fs::read_to_string(&path).unwrap();
    assert_eq!(active.lines().count(), 1);
    assert!(active.contains("| WARNING | xxxx"));

    let backup = fs::read_to_string(temp_dir.path().join("monitor.log.1")).unwrap();
    assert!(backup.contains("| INFO | short"));
}

#[test]
fn test_independent_sinks_in_one_process() {
    let temp_dir = TempDir::new().unwrap();
    let policy = RotationPolicy::default();
    let mut a = RotatingLogSink::open(temp_dir.path().join("a.log"), policy).unwrap();
    let mut b = RotatingLogSink::open(temp_dir.path().join("b.log"), policy).unwrap();

    a.write(Severity::Info, "only in a").unwrap();
    b.write(Severity::Error, "only in b").unwrap();
    drop(a);
    drop(b);

    let a_text = fs::read_to_string(temp_dir.path().join("a.log")).unwrap();
    let b_text = fs::read_to_string(temp_dir.path().join("b.log")).unwrap();
    assert!(a_text.contains("only in a") && !a_text.contains("only in b"));
    assert!(b_text.contains("| ERROR | only in b"));
}
