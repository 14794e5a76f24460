//! Cleanup orchestrator: runs the walker over every configured root,
//! enforces the wildcard safety guard, and aggregates the final report.

use tracing::{error, info, warn};

use sweep_core::{Mode, Report, SweepConfig, SweepError, WalkResult};

use crate::archive;
use crate::guard;
use crate::walker;

/// Run one full cleanup pass over all configured folders.
///
/// Folders are processed sequentially; the quarantine root is a
/// single-writer resource for the duration of the run. Only a tripped
/// safety guard aborts — before any file has been touched. Every other
/// failure is absorbed below this level as a skip.
pub fn run(config: &SweepConfig, mode: Mode) -> Result<Report, SweepError> {
    let policy = &config.retention;

    if policy.is_wildcard() {
        // Last-resort net against a misconfigured wildcard wiping a
        // system volume. Checked for every folder before touching any.
        for folder in &config.folders {
            if guard::is_critical_path(folder) {
                error!(
                    folder = %folder.display(),
                    "wildcard allow-list with a system-critical folder, aborting"
                );
                return Err(SweepError::CriticalPathRejected {
                    path: folder.clone(),
                });
            }
        }
        if policy.retention_days == 0 {
            warn!("wildcard allow-list with zero retention: every file in every configured folder is eligible");
        }
    }

    let mut totals = WalkResult::default();
    for folder in &config.folders {
        info!(folder = %folder.display(), ?mode, "cleaning folder");
        let result = walker::walk(folder, policy, &config.quarantine.root, mode);
        info!(
            folder = %folder.display(),
            inspected = result.total_files,
            transferred = result.transferred,
            skipped = result.skipped,
            "folder done"
        );
        totals.merge(result);
    }

    let archive_result = if config.quarantine.compress
        && totals.transferred > 0
        && mode == Mode::Quarantine
    {
        match archive::pack_transferred(
            &config.quarantine.root,
            &totals.records,
            &config.quarantine.archive_prefix,
            config.quarantine.delete_after_compress,
        ) {
            Ok(result) => {
                info!(
                    output = %result.output_path.display(),
                    files = result.file_count,
                    "batch archived"
                );
                Some(result)
            }
            Err(e) => {
                // Archive failure is recoverable: the files are safe
                // in quarantine either way.
                warn!(%e, "archive packaging failed");
                None
            }
        }
    } else {
        None
    };

    Ok(Report::from_walk(totals, archive_result))
}
