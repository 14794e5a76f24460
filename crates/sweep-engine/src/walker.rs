//! Directory walker: traverses one folder tree, applies the
//! classifier and liveness probe to every file, and dispatches
//! eligible files to safe transfer or direct delete.
//!
//! Partial failure of one file never aborts the batch: every per-file
//! error becomes a skip plus a log entry.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};
use walkdir::WalkDir;

use sweep_core::{FileRecord, Mode, RetentionPolicy, TransferRecord, WalkResult};

use crate::classify;
use crate::probe;
use crate::transfer;

/// Walk `folder` depth-first and act on every eligible file.
///
/// `folder` is also the base directory for relative-path preservation:
/// a file at `folder/sub/f.txt` lands at `quarantine_root/sub/f.txt`.
/// A missing folder yields a zero-valued result — a configured folder
/// that has since been removed is recoverable, not fatal.
pub fn walk(
    folder: &Path,
    policy: &RetentionPolicy,
    quarantine_root: &Path,
    mode: Mode,
) -> WalkResult {
    let mut result = WalkResult::default();

    // Resolve both against the current directory so the own-output
    // check below compares like with like: a run-relative quarantine
    // root would otherwise never prefix-match an absolute folder.
    let folder = absolutize(folder);
    let quarantine_root = absolutize(quarantine_root);
    let (folder, quarantine_root) = (folder.as_path(), quarantine_root.as_path());

    if !folder.exists() {
        warn!(folder = %folder.display(), "configured folder does not exist, skipping");
        return result;
    }

    let now = SystemTime::now();

    for entry in WalkDir::new(folder).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(folder = %folder.display(), %e, "unreadable entry, skipping");
                result.total_files += 1;
                result.skipped += 1;
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();

        // Never walk into our own output.
        if path.starts_with(quarantine_root) {
            debug!(path = %path.display(), "inside quarantine root, ignoring");
            continue;
        }

        result.total_files += 1;

        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(e) => {
                warn!(path = %path.display(), %e, "metadata unreadable, skipping");
                result.skipped += 1;
                continue;
            }
        };
        let record = FileRecord::from_metadata(path, &meta);

        if classify::is_protected(&record.file_name, policy) {
            debug!(path = %path.display(), "protected name, skipping");
            result.skipped += 1;
            continue;
        }
        if !classify::is_allowed_extension(&record.file_name, policy) {
            debug!(path = %path.display(), "extension not allowed, skipping");
            result.skipped += 1;
            continue;
        }
        if !classify::is_expired(&record, policy.retention_days, now) {
            debug!(
                path = %path.display(),
                retention_days = policy.retention_days,
                "not expired, skipping"
            );
            result.skipped += 1;
            continue;
        }
        if probe::is_file_in_use(path) {
            debug!(path = %path.display(), "file in use, skipping");
            result.skipped += 1;
            continue;
        }

        match dispatch(&record, quarantine_root, folder, mode) {
            Ok(record) => {
                result.transferred += 1;
                result.records.push(record);
            }
            Err(e) => {
                warn!(path = %path.display(), %e, "disposal failed, skipping");
                result.skipped += 1;
            }
        }
    }

    result
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

fn dispatch(
    record: &FileRecord,
    quarantine_root: &Path,
    base_dir: &Path,
    mode: Mode,
) -> Result<TransferRecord, sweep_core::TransferError> {
    match mode {
        Mode::Quarantine => transfer::transfer(&record.path, quarantine_root, Some(base_dir)),
        Mode::Delete => transfer::delete_file(&record.path),
        Mode::DryRun => {
            debug!(path = %record.path.display(), "dry run, would act");
            Ok(TransferRecord {
                source_path: record.path.clone(),
                target_path: None,
                file_name: record.file_name.clone(),
                formatted_size: sweep_core::format_size(record.size),
            })
        }
    }
}
