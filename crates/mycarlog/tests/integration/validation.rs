//! Validation of backup files before any restore begins.

use std::fs;

use mycarlog::backup::{self, BackupError};
use mycarlog::Shop;

use crate::fixtures::seeded_store;

/// A document missing one collection array is rejected during
/// validation, so no write transaction ever starts.
#[test]
fn missing_collection_array_fails_validation() {
    let (store, _) = seeded_store();
    let dir = tempfile::tempdir().expect("tempdir");

    let file = backup::create_backup(&store, dir.path()).expect("backup");
    let mut doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file.path).expect("read")).expect("json");
    doc["data"].as_object_mut().expect("data").remove("shops");
    fs::write(&file.path, doc.to_string()).expect("write");

    let result = backup::validate_backup_file(&file.path);
    assert!(matches!(result, Err(BackupError::InvalidFormat(_))));

    // The store is untouched.
    let tx = store.begin_read().expect("read");
    assert_eq!(tx.count::<Shop>().expect("count"), 1);
}

/// A file that is not JSON at all is reported as corrupted, not as a
/// format mismatch.
#[test]
fn non_json_file_is_malformed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("backup.json");
    fs::write(&path, "definitely { not json").expect("write");

    let result = backup::validate_backup_file(&path);
    assert!(matches!(result, Err(BackupError::Malformed(_))));
}

/// A snapshot from a future format version is refused outright.
#[test]
fn future_version_file_is_unsupported() {
    let (store, _) = seeded_store();
    let dir = tempfile::tempdir().expect("tempdir");

    let file = backup::create_backup(&store, dir.path()).expect("backup");
    let mut doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file.path).expect("read")).expect("json");
    doc["version"] = serde_json::json!("2.1.0");
    fs::write(&file.path, doc.to_string()).expect("write");

    let result = backup::validate_backup_file(&file.path);
    assert!(matches!(result, Err(BackupError::UnsupportedVersion(_))));
}

/// A missing file surfaces as an I/O error.
#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = backup::validate_backup_file(&dir.path().join("no_such_backup.json"));
    assert!(matches!(result, Err(BackupError::Io(_))));
}

/// Full backup file names carry the fixed prefix, the date, and a
/// millisecond suffix that keeps same-day backups distinct.
#[test]
fn backup_file_names_are_unique_per_call() {
    let (store, _) = seeded_store();
    let dir = tempfile::tempdir().expect("tempdir");

    let first = backup::create_backup(&store, dir.path()).expect("backup");
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = backup::create_backup(&store, dir.path()).expect("backup");

    let name = first.path.file_name().expect("name").to_string_lossy().into_owned();
    assert!(name.starts_with("mycarlog_backup_"), "{name}");
    assert!(name.ends_with(".json"), "{name}");
    assert_ne!(first.path, second.path);
    assert!(first.path.exists() && second.path.exists());
}
