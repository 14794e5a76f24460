//! Shared data model: per-file records, walk accumulators, the final report.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

/// How eligible files are disposed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Relocate into the quarantine root with checksum verification.
    Quarantine,
    /// Delete outright. No verification, no recovery path.
    Delete,
    /// Classify only; nothing on disk is touched.
    DryRun,
}

/// Metadata snapshot of one visited file. Exists only during a walk pass.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    pub modified: SystemTime,
    /// Creation time where the file system provides one.
    pub created: Option<SystemTime>,
}

impl FileRecord {
    /// Build a record from a path and its already-fetched metadata.
    pub fn from_metadata(path: &Path, meta: &Metadata) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
            size: meta.len(),
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            created: meta.created().ok(),
        }
    }

    /// The newer of creation and modification time.
    ///
    /// Copy operations and some file systems produce creation
    /// timestamps newer than the modification time; taking the max
    /// keeps the age computation conservative.
    pub fn newest_timestamp(&self) -> SystemTime {
        match self.created {
            Some(created) if created > self.modified => created,
            _ => self.modified,
        }
    }
}

/// One transferred (or deleted) file, as reported to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRecord {
    pub source_path: PathBuf,
    /// Destination under the quarantine root. `None` in direct-delete
    /// and dry-run modes.
    pub target_path: Option<PathBuf>,
    pub file_name: String,
    pub formatted_size: String,
}

/// Accumulated outcome of walking one folder tree.
#[derive(Debug, Default, Serialize)]
pub struct WalkResult {
    /// Files inspected, including skipped ones.
    pub total_files: u64,
    /// Files transferred or deleted.
    pub transferred: u64,
    /// Files inspected but left in place.
    pub skipped: u64,
    pub records: Vec<TransferRecord>,
}

impl WalkResult {
    /// Fold a sub-walk's counts and records into this accumulator.
    pub fn merge(&mut self, other: WalkResult) {
        self.total_files += other.total_files;
        self.transferred += other.transferred;
        self.skipped += other.skipped;
        self.records.extend(other.records);
    }
}

/// Outcome of packaging one quarantined batch into an archive.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveResult {
    pub output_path: PathBuf,
    pub file_count: u64,
    pub original_size: u64,
    pub compressed_size: u64,
}

/// Final aggregate handed back to the CLI layer.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub total_files: u64,
    pub transferred_files: u64,
    pub skipped_files: u64,
    pub records: Vec<TransferRecord>,
    pub archive: Option<ArchiveResult>,
}

impl Report {
    pub fn from_walk(totals: WalkResult, archive: Option<ArchiveResult>) -> Self {
        Self {
            total_files: totals.total_files,
            transferred_files: totals.transferred,
            skipped_files: totals.skipped,
            records: totals.records,
            archive,
        }
    }
}

/// Format a byte count as a human-readable size (`1.50 MB`).
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.2} GB", b / GB)
    } else if b >= MB {
        format!("{:.2} MB", b / MB)
    } else if b >= KB {
        format!("{:.2} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}
