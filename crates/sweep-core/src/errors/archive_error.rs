//! Archive packaging errors.

use std::path::PathBuf;

/// Errors raised while packaging a quarantined batch into an archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Archive I/O failure at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No transferred files to archive")]
    NothingToArchive,
}

impl ArchiveError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
