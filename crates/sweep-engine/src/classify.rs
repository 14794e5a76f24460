//! Eligibility classifier: three pure predicates over a file record
//! and the retention policy. No I/O happens here — metadata is read
//! by the walker and passed in.

use std::time::{Duration, SystemTime};

use sweep_core::config::policy::WILDCARD;
use sweep_core::{FileRecord, RetentionPolicy};

/// True iff `name` exactly equals a protected name, ignoring case.
/// No substring or glob matching: `desktop.ini.bak` is not protected
/// by a `desktop.ini` entry.
pub fn is_protected(name: &str, policy: &RetentionPolicy) -> bool {
    let lowered = name.to_lowercase();
    policy
        .protected_names
        .iter()
        .any(|p| p.to_lowercase() == lowered)
}

/// True iff the file's extension is on the allow-list.
///
/// The wildcard sentinel admits everything. Otherwise the extension is
/// the case-sensitive substring after the last `.` (dot excluded); a
/// name without a dot has no extension and is admitted only when the
/// empty string is explicitly listed.
pub fn is_allowed_extension(name: &str, policy: &RetentionPolicy) -> bool {
    if policy.allowed_extensions.iter().any(|e| e == WILDCARD) {
        return true;
    }
    let ext = extension_of(name);
    policy.allowed_extensions.iter().any(|e| e == ext)
}

/// True iff the file is older than the retention period.
///
/// Age is measured from the newer of creation and modification time;
/// unreliable creation timestamps (common after copies) therefore
/// never make a file look older than it is. A zero-day policy expires
/// everything. Exactly at the boundary is not expired — the age must
/// strictly exceed it.
pub fn is_expired(record: &FileRecord, retention_days: u32, now: SystemTime) -> bool {
    if retention_days == 0 {
        return true;
    }
    let age = match now.duration_since(record.newest_timestamp()) {
        Ok(age) => age,
        // Timestamp in the future; treat as brand new.
        Err(_) => return false,
    };
    age > Duration::from_millis(u64::from(retention_days) * 86_400_000)
}

/// The full eligibility predicate: allowed extension AND expired AND
/// not protected.
pub fn is_eligible(record: &FileRecord, policy: &RetentionPolicy, now: SystemTime) -> bool {
    is_allowed_extension(&record.file_name, policy)
        && is_expired(record, policy.retention_days, now)
        && !is_protected(&record.file_name, policy)
}

/// Substring after the last `.`, excluding the dot. Empty when there
/// is no dot.
fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}
