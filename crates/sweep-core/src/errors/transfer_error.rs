//! Safe-transfer errors.

use std::path::PathBuf;

/// Errors raised while moving one file into quarantine (or deleting it).
///
/// Integrity variants mean the copy was discarded and the source left
/// untouched; the caller treats every variant as a per-file skip.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O failure at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination missing after copy: {}", .path.display())]
    DestinationMissing { path: PathBuf },

    #[error(
        "Size mismatch after copy to {}: expected {expected} bytes, found {actual}",
        .path.display()
    )]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Checksum mismatch after copy to {}", .path.display())]
    ChecksumMismatch { path: PathBuf },
}

impl TransferError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
