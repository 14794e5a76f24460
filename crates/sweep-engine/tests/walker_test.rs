//! Integration tests for the directory walker.

use std::fs;
use std::path::Path;

use sweep_core::{Mode, RetentionPolicy};
use sweep_engine::walk;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn policy(extensions: &[&str], protected: &[&str], days: u32) -> RetentionPolicy {
    RetentionPolicy {
        retention_days: days,
        allowed_extensions: extensions.iter().map(|s| s.to_string()).collect(),
        protected_names: protected.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn missing_folder_yields_zero_result() {
    let quarantine = tempdir();
    let result = walk(
        Path::new("/no/such/folder"),
        &policy(&["*"], &[], 0),
        quarantine.path(),
        Mode::Quarantine,
    );
    assert_eq!(result.total_files, 0);
    assert_eq!(result.transferred, 0);
    assert_eq!(result.skipped, 0);
    assert!(result.records.is_empty());
}

#[test]
fn predicates_gate_each_file_independently() {
    let root = tempdir();
    let quarantine = tempdir();
    fs::create_dir_all(root.path().join("sub")).unwrap();
    fs::write(root.path().join("old.tmp"), b"eligible").unwrap();
    fs::write(root.path().join("keep.tmp"), b"protected").unwrap();
    fs::write(root.path().join("notes.log"), b"wrong extension").unwrap();
    fs::write(root.path().join("sub/deep.tmp"), b"eligible nested").unwrap();

    let result = walk(
        root.path(),
        &policy(&["tmp"], &["keep.tmp"], 0),
        quarantine.path(),
        Mode::Quarantine,
    );

    assert_eq!(result.total_files, 4);
    assert_eq!(result.transferred, 2);
    assert_eq!(result.skipped, 2);

    // structure preserved relative to the walked root
    assert!(quarantine.path().join("old.tmp").exists());
    assert!(quarantine.path().join("sub/deep.tmp").exists());
    // skipped files untouched
    assert!(root.path().join("keep.tmp").exists());
    assert!(root.path().join("notes.log").exists());
}

#[test]
fn fresh_files_survive_a_nonzero_retention() {
    let root = tempdir();
    let quarantine = tempdir();
    fs::write(root.path().join("young.tmp"), b"fresh").unwrap();

    let result = walk(
        root.path(),
        &policy(&["*"], &[], 7),
        quarantine.path(),
        Mode::Quarantine,
    );

    assert_eq!(result.total_files, 1);
    assert_eq!(result.transferred, 0);
    assert_eq!(result.skipped, 1);
    assert!(root.path().join("young.tmp").exists());
}

#[test]
fn delete_mode_removes_without_quarantine() {
    let root = tempdir();
    let quarantine = tempdir();
    fs::write(root.path().join("junk.tmp"), b"bye").unwrap();

    let result = walk(
        root.path(),
        &policy(&["tmp"], &[], 0),
        quarantine.path(),
        Mode::Delete,
    );

    assert_eq!(result.transferred, 1);
    assert!(!root.path().join("junk.tmp").exists());
    assert!(result.records[0].target_path.is_none());
    // nothing landed in quarantine
    assert_eq!(fs::read_dir(quarantine.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_touches_nothing() {
    let root = tempdir();
    let quarantine = tempdir();
    fs::write(root.path().join("junk.tmp"), b"still here").unwrap();

    let result = walk(
        root.path(),
        &policy(&["tmp"], &[], 0),
        quarantine.path(),
        Mode::DryRun,
    );

    assert_eq!(result.transferred, 1);
    assert!(result.records[0].target_path.is_none());
    assert!(root.path().join("junk.tmp").exists());
    assert_eq!(fs::read_dir(quarantine.path()).unwrap().count(), 0);
}

#[test]
fn quarantine_nested_in_root_is_not_rewalked() {
    let root = tempdir();
    let quarantine_root = root.path().join("recycle");
    fs::create_dir_all(&quarantine_root).unwrap();
    fs::write(quarantine_root.join("already.tmp"), b"previous run").unwrap();
    fs::write(root.path().join("fresh.tmp"), b"eligible").unwrap();

    let result = walk(
        root.path(),
        &policy(&["tmp"], &[], 0),
        &quarantine_root,
        Mode::Quarantine,
    );

    // only the file outside quarantine was considered
    assert_eq!(result.total_files, 1);
    assert_eq!(result.transferred, 1);
    assert!(quarantine_root.join("already.tmp").exists());
}

#[test]
fn relative_quarantine_root_is_still_skipped() {
    // A run-relative root must match absolute walk entries, otherwise
    // a second run would re-quarantine its own output.
    let root = tempdir();
    let root_path = root.path().canonicalize().unwrap();
    std::env::set_current_dir(&root_path).unwrap();
    fs::create_dir_all(root_path.join("recycle")).unwrap();
    fs::write(root_path.join("recycle/already.tmp"), b"previous run").unwrap();
    fs::write(root_path.join("fresh.tmp"), b"eligible").unwrap();

    let result = walk(
        &root_path,
        &policy(&["tmp"], &[], 0),
        Path::new("recycle"),
        Mode::Quarantine,
    );

    assert_eq!(result.total_files, 1);
    assert_eq!(result.transferred, 1);
    assert!(root_path.join("recycle/already.tmp").exists());
    assert!(root_path.join("recycle/fresh.tmp").exists());
}
