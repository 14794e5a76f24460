//! Liveness probe: is a file currently held open by another process?
//!
//! The probe only ever opens the file in non-destructive modes — a
//! plain read, then a read-write open that neither truncates nor
//! creates. Probing must never mutate a file that merely looked busy.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing::debug;

/// Closed classification of a platform I/O error, keeping OS-specific
/// error codes out of the probe logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contention {
    /// Another process holds the file (busy, locked, exhausted handles).
    Busy,
    /// Permission failure — orthogonal to concurrent access.
    AccessDenied,
    /// File vanished — handled naturally by later steps.
    NotFound,
    /// Anything unrecognized.
    Unknown,
}

/// Probe `path` with non-destructive opens and report whether another
/// process appears to hold it.
///
/// Access and not-found failures report "not in use": they are not
/// contention, and the orthogonal failure surfaces again (and is
/// skipped) in the transfer step. Unrecognized errors report "in use"
/// so an unclassifiable file is skipped rather than risked.
pub fn is_file_in_use(path: &Path) -> bool {
    if let Err(e) = OpenOptions::new().read(true).open(path) {
        return in_use_verdict(path, &e, "read");
    }
    // Read-write without truncate/create: fails while a writer holds
    // the file exclusively, touches nothing otherwise.
    if let Err(e) = OpenOptions::new().read(true).write(true).open(path) {
        return in_use_verdict(path, &e, "read-write");
    }
    false
}

fn in_use_verdict(path: &Path, error: &io::Error, mode: &str) -> bool {
    let contention = classify(error);
    debug!(
        path = %path.display(),
        mode,
        ?contention,
        %error,
        "probe open failed"
    );
    match contention {
        Contention::Busy | Contention::Unknown => true,
        Contention::AccessDenied | Contention::NotFound => false,
    }
}

/// Map a platform error onto the closed [`Contention`] set. The only
/// place OS error codes are consulted.
pub fn classify(error: &io::Error) -> Contention {
    match error.kind() {
        io::ErrorKind::PermissionDenied => return Contention::AccessDenied,
        io::ErrorKind::NotFound => return Contention::NotFound,
        io::ErrorKind::BrokenPipe => return Contention::Busy,
        _ => {}
    }
    match error.raw_os_error() {
        Some(code) if BUSY_CODES.contains(&code) => Contention::Busy,
        _ => Contention::Unknown,
    }
}

/// Raw OS codes that signify contention rather than a hard failure.
#[cfg(unix)]
const BUSY_CODES: &[i32] = &[
    16, // EBUSY: resource busy
    26, // ETXTBSY: text file busy
    24, // EMFILE: process out of file handles
    23, // ENFILE: system out of file handles
    32, // EPIPE: broken pipe
];

#[cfg(windows)]
const BUSY_CODES: &[i32] = &[
    32,  // ERROR_SHARING_VIOLATION
    33,  // ERROR_LOCK_VIOLATION
    4,   // ERROR_TOO_MANY_OPEN_FILES
    109, // ERROR_BROKEN_PIPE
];

#[cfg(not(any(unix, windows)))]
const BUSY_CODES: &[i32] = &[];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn quiet_file_is_not_in_use() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("idle.tmp");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"idle")
            .unwrap();
        assert!(!is_file_in_use(&path));
        // probing must not have altered the content
        assert_eq!(std::fs::read(&path).unwrap(), b"idle");
    }

    #[test]
    fn vanished_file_is_not_in_use() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(!is_file_in_use(&dir.path().join("gone.tmp")));
    }

    #[test]
    fn classify_by_error_kind() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(classify(&denied), Contention::AccessDenied);

        let missing = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(classify(&missing), Contention::NotFound);

        let pipe = io::Error::new(io::ErrorKind::BrokenPipe, "pipe");
        assert_eq!(classify(&pipe), Contention::Busy);

        let other = io::Error::new(io::ErrorKind::InvalidData, "odd");
        assert_eq!(classify(&other), Contention::Unknown);
    }

    #[cfg(unix)]
    #[test]
    fn classify_busy_os_codes() {
        assert_eq!(classify(&io::Error::from_raw_os_error(16)), Contention::Busy);
        assert_eq!(classify(&io::Error::from_raw_os_error(26)), Contention::Busy);
        // ENOSPC is not contention
        assert_eq!(
            classify(&io::Error::from_raw_os_error(28)),
            Contention::Unknown
        );
    }
}
