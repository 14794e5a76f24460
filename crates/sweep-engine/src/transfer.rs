//! Safe transfer: verified copy-then-delete into the quarantine root.
//!
//! The load-bearing invariant: the source is never removed unless the
//! copy at the destination has passed both the size check and the
//! checksum check. Any failure before that point cleans up the partial
//! destination and leaves the source exactly as it was.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use sweep_core::{format_size, TransferError, TransferRecord};

use crate::checksum::checksum_file;

/// Move `source` into `quarantine_root` with end-to-end verification.
///
/// The destination path preserves `source`'s position relative to
/// `base_dir` (just the file name when `base_dir` is absent or not a
/// prefix), with a numeric `_N` suffix appended on name collisions.
///
/// # Errors
/// Any I/O or integrity failure. On error the source still exists,
/// unmodified, and no partial destination file remains.
pub fn transfer(
    source: &Path,
    quarantine_root: &Path,
    base_dir: Option<&Path>,
) -> Result<TransferRecord, TransferError> {
    let meta = fs::metadata(source).map_err(|e| TransferError::io(source, e))?;
    let size = meta.len();

    let relative = relative_destination(source, base_dir);
    let target = next_free_path(&quarantine_root.join(relative));

    match copy_verified(source, &target, size) {
        Ok(()) => {}
        Err(e) => {
            discard_partial(&target);
            return Err(e);
        }
    }

    // Both checks passed; only now does the source go away.
    fs::remove_file(source).map_err(|e| TransferError::io(source, e))?;

    info!(
        source = %source.display(),
        target = %target.display(),
        size,
        "file quarantined"
    );

    Ok(TransferRecord {
        source_path: source.to_path_buf(),
        target_path: Some(target),
        file_name: file_name_of(source),
        formatted_size: format_size(size),
    })
}

/// Direct-delete mode: remove the file outright. Nothing to verify
/// against, no recovery path — the caller gates this behind an
/// explicit operator choice.
pub fn delete_file(path: &Path) -> Result<TransferRecord, TransferError> {
    let meta = fs::metadata(path).map_err(|e| TransferError::io(path, e))?;
    let size = meta.len();

    fs::remove_file(path).map_err(|e| TransferError::io(path, e))?;
    info!(path = %path.display(), size, "file deleted");

    Ok(TransferRecord {
        source_path: path.to_path_buf(),
        target_path: None,
        file_name: file_name_of(path),
        formatted_size: format_size(size),
    })
}

/// Copy `source` to `target` and verify the copy byte-for-byte via
/// size plus xxh3-128 comparison. Does not touch the source.
fn copy_verified(source: &Path, target: &Path, expected_size: u64) -> Result<(), TransferError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| TransferError::io(parent, e))?;
    }

    let source_sum = checksum_file(source).map_err(|e| TransferError::io(source, e))?;

    fs::copy(source, target).map_err(|e| TransferError::io(target, e))?;

    verify_destination(target, expected_size, source_sum)
}

/// Post-copy integrity checks: the destination must exist, match the
/// expected size, and hash to the same xxh3-128 digest as the source.
fn verify_destination(
    target: &Path,
    expected_size: u64,
    expected_sum: u128,
) -> Result<(), TransferError> {
    let target_meta = match fs::metadata(target) {
        Ok(m) => m,
        Err(_) => {
            return Err(TransferError::DestinationMissing {
                path: target.to_path_buf(),
            })
        }
    };
    if target_meta.len() != expected_size {
        return Err(TransferError::SizeMismatch {
            path: target.to_path_buf(),
            expected: expected_size,
            actual: target_meta.len(),
        });
    }

    let target_sum = checksum_file(target).map_err(|e| TransferError::io(target, e))?;
    if target_sum != expected_sum {
        return Err(TransferError::ChecksumMismatch {
            path: target.to_path_buf(),
        });
    }

    Ok(())
}

/// Best-effort removal of a partially written destination.
fn discard_partial(target: &Path) {
    if target.exists() {
        if let Err(e) = fs::remove_file(target) {
            warn!(
                target = %target.display(),
                %e,
                "could not remove partial destination"
            );
        } else {
            debug!(target = %target.display(), "partial destination removed");
        }
    }
}

/// Destination path relative to the quarantine root: `source` relative
/// to `base_dir` when possible, otherwise just the file name.
fn relative_destination(source: &Path, base_dir: Option<&Path>) -> PathBuf {
    if let Some(base) = base_dir {
        if let Ok(rel) = source.strip_prefix(base) {
            if !rel.as_os_str().is_empty() {
                return rel.to_path_buf();
            }
        }
    }
    PathBuf::from(file_name_of(source))
}

/// First collision-free variant of `candidate`: the path itself, then
/// `name_1.ext`, `name_2.ext`, and so on.
///
/// Check-then-use; safe under the single-invocation assumption only.
fn next_free_path(candidate: &Path) -> PathBuf {
    if !candidate.exists() {
        return candidate.to_path_buf();
    }

    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = candidate.extension().map(|e| e.to_string_lossy().into_owned());
    let parent = candidate.parent().unwrap_or_else(|| Path::new(""));

    for n in 1u32.. {
        let name = match &ext {
            Some(ext) => format!("{stem}_{n}.{ext}"),
            None => format!("{stem}_{n}"),
        };
        let next = parent.join(name);
        if !next.exists() {
            return next;
        }
    }
    unreachable!("suffix counter exhausted");
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_free_path_appends_numeric_suffix() {
        let dir = tempfile::TempDir::new().unwrap();
        let first = dir.path().join("report.txt");
        assert_eq!(next_free_path(&first), first);

        fs::write(&first, b"x").unwrap();
        assert_eq!(next_free_path(&first), dir.path().join("report_1.txt"));

        fs::write(dir.path().join("report_1.txt"), b"x").unwrap();
        assert_eq!(next_free_path(&first), dir.path().join("report_2.txt"));
    }

    #[test]
    fn next_free_path_without_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("LICENSE");
        fs::write(&path, b"x").unwrap();
        assert_eq!(next_free_path(&path), dir.path().join("LICENSE_1"));
    }

    #[test]
    fn relative_destination_prefers_base_dir() {
        let source = Path::new("/data/root/sub/file.txt");
        assert_eq!(
            relative_destination(source, Some(Path::new("/data/root"))),
            PathBuf::from("sub/file.txt")
        );
        // non-prefix base falls back to the file name
        assert_eq!(
            relative_destination(source, Some(Path::new("/elsewhere"))),
            PathBuf::from("file.txt")
        );
        assert_eq!(relative_destination(source, None), PathBuf::from("file.txt"));
    }

    #[test]
    fn truncated_copy_fails_verification() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = dir.path().join("src.bin");
        let target = dir.path().join("dst.bin");
        fs::write(&source, b"full content").unwrap();
        // claim more bytes than the file holds: simulates a short write
        let err = copy_verified(&source, &target, 1_000).unwrap_err();
        assert!(matches!(err, TransferError::SizeMismatch { .. }));
        // source untouched either way
        assert_eq!(fs::read(&source).unwrap(), b"full content");
    }

    #[test]
    fn corrupted_copy_is_detected_and_discarded() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = dir.path().join("src.bin");
        let target = dir.path().join("dst.bin");
        fs::write(&source, b"right contents").unwrap();
        let source_sum = checksum_file(&source).unwrap();

        // same length, different bytes: size passes, the checksum must not
        fs::write(&target, b"wrong contents").unwrap();
        let err = verify_destination(&target, 14, source_sum).unwrap_err();
        assert!(matches!(err, TransferError::ChecksumMismatch { .. }));

        // the failure arm drops the partial copy and keeps the source
        discard_partial(&target);
        assert!(!target.exists());
        assert_eq!(fs::read(&source).unwrap(), b"right contents");
    }
}
