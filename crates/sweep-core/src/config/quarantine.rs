//! Quarantine target configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where eligible files are relocated, and what happens to the batch
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarantineTarget {
    /// Root directory files are relocated into.
    pub root: PathBuf,
    /// Package each run's transferred batch into a tar.gz archive.
    pub compress: bool,
    /// File-name prefix for the archive.
    pub archive_prefix: String,
    /// Remove the quarantined originals once the archive is verified
    /// written.
    pub delete_after_compress: bool,
}

impl Default for QuarantineTarget {
    fn default() -> Self {
        Self {
            root: PathBuf::from("recycle"),
            compress: false,
            archive_prefix: "sweep-".to_string(),
            delete_after_compress: false,
        }
    }
}
