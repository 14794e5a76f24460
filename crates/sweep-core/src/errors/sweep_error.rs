//! Run-level errors.
//! Only these propagate out of the orchestrator; everything per-file
//! or per-folder is converted into a skip plus a log entry below it.

use std::path::PathBuf;

use super::ConfigError;

/// Fatal errors for a whole cleanup run.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The wildcard allow-list is active and a configured folder sits
    /// on or directly under a system-critical path. Nothing has been
    /// touched when this is raised.
    #[error(
        "Refusing wildcard cleanup: {} is a system-critical path",
        .path.display()
    )]
    CriticalPathRejected { path: PathBuf },
}
