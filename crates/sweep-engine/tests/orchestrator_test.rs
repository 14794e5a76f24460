//! Integration tests for the cleanup orchestrator.

use std::fs;
use std::path::PathBuf;

use sweep_core::{Mode, QuarantineTarget, RetentionPolicy, SweepConfig, SweepError};
use sweep_engine::run;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn config(folders: Vec<PathBuf>, quarantine_root: PathBuf) -> SweepConfig {
    SweepConfig {
        retention: RetentionPolicy {
            retention_days: 0,
            allowed_extensions: vec!["tmp".into()],
            protected_names: vec![],
        },
        quarantine: QuarantineTarget {
            root: quarantine_root,
            ..Default::default()
        },
        folders,
    }
}

#[test]
fn aggregates_across_folders() {
    let folder_a = tempdir();
    let folder_b = tempdir();
    let quarantine = tempdir();
    fs::write(folder_a.path().join("a.tmp"), b"one").unwrap();
    fs::write(folder_b.path().join("b.tmp"), b"two").unwrap();
    fs::write(folder_b.path().join("skip.log"), b"three").unwrap();

    let config = config(
        vec![folder_a.path().to_path_buf(), folder_b.path().to_path_buf()],
        quarantine.path().to_path_buf(),
    );
    let report = run(&config, Mode::Quarantine).unwrap();

    assert_eq!(report.total_files, 3);
    assert_eq!(report.transferred_files, 2);
    assert_eq!(report.skipped_files, 1);
    assert_eq!(report.records.len(), 2);
    assert!(report.archive.is_none());
}

#[test]
fn wildcard_with_critical_folder_aborts_before_any_file_operation() {
    let safe_folder = tempdir();
    let quarantine = tempdir();
    fs::write(safe_folder.path().join("a.tmp"), b"untouchable").unwrap();

    let mut config = config(
        // the safe folder comes first: the guard must still protect it
        vec![safe_folder.path().to_path_buf(), PathBuf::from("/etc")],
        quarantine.path().to_path_buf(),
    );
    config.retention.allowed_extensions = vec!["*".into()];

    let err = run(&config, Mode::Quarantine).unwrap_err();
    assert!(matches!(
        err,
        SweepError::CriticalPathRejected { ref path } if path == &PathBuf::from("/etc")
    ));

    // zero file operations anywhere, offending folder or not
    assert!(safe_folder.path().join("a.tmp").exists());
    assert_eq!(fs::read_dir(quarantine.path()).unwrap().count(), 0);
}

#[test]
fn wildcard_over_safe_folders_proceeds() {
    let folder = tempdir();
    let quarantine = tempdir();
    fs::write(folder.path().join("noext"), b"wildcard catches this").unwrap();

    let mut config = config(
        vec![folder.path().to_path_buf()],
        quarantine.path().to_path_buf(),
    );
    config.retention.allowed_extensions = vec!["*".into()];

    let report = run(&config, Mode::Quarantine).unwrap();
    assert_eq!(report.transferred_files, 1);
}

#[test]
fn compression_archives_the_transferred_batch() {
    let folder = tempdir();
    let quarantine = tempdir();
    fs::write(folder.path().join("a.tmp"), vec![b'a'; 8192]).unwrap();
    fs::write(folder.path().join("b.tmp"), vec![b'b'; 8192]).unwrap();

    let mut config = config(
        vec![folder.path().to_path_buf()],
        quarantine.path().to_path_buf(),
    );
    config.quarantine.compress = true;
    config.quarantine.archive_prefix = "batch-".into();

    let report = run(&config, Mode::Quarantine).unwrap();

    let archive = report.archive.expect("archive result");
    assert_eq!(archive.file_count, 2);
    assert_eq!(archive.original_size, 16384);
    assert!(archive.output_path.exists());
    // quarantined files kept: delete_after_compress defaults to off
    assert!(quarantine.path().join("a.tmp").exists());
    assert!(quarantine.path().join("b.tmp").exists());
}

#[test]
fn compression_skipped_when_nothing_transferred() {
    let folder = tempdir();
    let quarantine = tempdir();
    fs::write(folder.path().join("skip.log"), b"wrong extension").unwrap();

    let mut config = config(
        vec![folder.path().to_path_buf()],
        quarantine.path().to_path_buf(),
    );
    config.quarantine.compress = true;

    let report = run(&config, Mode::Quarantine).unwrap();
    assert!(report.archive.is_none());
    assert_eq!(fs::read_dir(quarantine.path()).unwrap().count(), 0);
}

#[test]
fn compression_not_applied_in_delete_mode() {
    let folder = tempdir();
    let quarantine = tempdir();
    fs::write(folder.path().join("a.tmp"), b"gone").unwrap();

    let mut config = config(
        vec![folder.path().to_path_buf()],
        quarantine.path().to_path_buf(),
    );
    config.quarantine.compress = true;

    let report = run(&config, Mode::Delete).unwrap();
    assert_eq!(report.transferred_files, 1);
    assert!(report.archive.is_none());
}
