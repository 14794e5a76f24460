//! Archive packaging: tar.gz of the batch transferred this run.
//!
//! The orchestrator hands over the manifest of transferred files; this
//! module packages exactly those files (by their paths inside the
//! quarantine root) and optionally removes the quarantined originals
//! once the archive is written.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::{debug, warn};

use sweep_core::{ArchiveError, ArchiveResult, TransferRecord};

/// Package the transferred files into
/// `{quarantine_root}/{prefix}{YYYYMMDD-HHMMSS}.tar.gz`.
///
/// Entries keep their paths relative to the quarantine root. When
/// `delete_sources` is set, the quarantined files are removed after
/// the archive is fully written; removal failures are logged, never
/// fatal.
pub fn pack_transferred(
    quarantine_root: &Path,
    records: &[TransferRecord],
    prefix: &str,
    delete_sources: bool,
) -> Result<ArchiveResult, ArchiveError> {
    let targets: Vec<&PathBuf> = records
        .iter()
        .filter_map(|r| r.target_path.as_ref())
        .collect();
    if targets.is_empty() {
        return Err(ArchiveError::NothingToArchive);
    }

    let output_path = archive_path(quarantine_root, prefix);
    let file =
        File::create(&output_path).map_err(|e| ArchiveError::io(&output_path, e))?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut file_count = 0u64;
    let mut original_size = 0u64;
    for target in &targets {
        let entry_name = target
            .strip_prefix(quarantine_root)
            .unwrap_or_else(|_| file_name_of(target));
        let size = fs::metadata(target)
            .map_err(|e| ArchiveError::io(target.as_path(), e))?
            .len();
        builder
            .append_path_with_name(target, entry_name)
            .map_err(|e| ArchiveError::io(target.as_path(), e))?;
        file_count += 1;
        original_size += size;
        debug!(entry = %entry_name.display(), size, "archived");
    }

    // Flush tar, then the gzip stream, then the buffered writer,
    // before trusting the output.
    let encoder = builder
        .into_inner()
        .map_err(|e| ArchiveError::io(&output_path, e))?;
    let mut writer = encoder
        .finish()
        .map_err(|e| ArchiveError::io(&output_path, e))?;
    writer
        .flush()
        .map_err(|e| ArchiveError::io(&output_path, e))?;

    let compressed_size = fs::metadata(&output_path)
        .map_err(|e| ArchiveError::io(&output_path, e))?
        .len();

    if delete_sources {
        for target in &targets {
            if let Err(e) = fs::remove_file(target) {
                warn!(
                    target = %target.display(),
                    %e,
                    "could not remove quarantined file after archiving"
                );
            }
        }
    }

    Ok(ArchiveResult {
        output_path,
        file_count,
        original_size,
        compressed_size,
    })
}

/// Timestamped, collision-free archive path under the quarantine root.
fn archive_path(quarantine_root: &Path, prefix: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let base = quarantine_root.join(format!("{prefix}{stamp}.tar.gz"));
    if !base.exists() {
        return base;
    }
    // Same-second rerun; suffix like the transfer naming does.
    for n in 1u32.. {
        let next = quarantine_root.join(format!("{prefix}{stamp}_{n}.tar.gz"));
        if !next.exists() {
            return next;
        }
    }
    unreachable!("suffix counter exhausted");
}

fn file_name_of(path: &Path) -> &Path {
    path.file_name().map(Path::new).unwrap_or(path)
}
