//! Wildcard safety guard: system-critical path denylist.
//!
//! Consulted only when the allow-list is the wildcard sentinel. A
//! configured folder trips the guard when it equals a denylisted path,
//! sits directly under one (platform root, drive root, user-profile
//! root), or lies anywhere inside an OS installation directory.

use std::path::{Path, PathBuf};

/// OS installation directories: denied at any depth.
#[cfg(unix)]
const OS_DIRS: &[&str] = &[
    "/bin", "/boot", "/dev", "/etc", "/lib", "/lib64", "/proc", "/run", "/sbin", "/sys",
    "/usr",
];

#[cfg(windows)]
const OS_DIRS: &[&str] = &[
    "C:\\Windows",
    "C:\\Program Files",
    "C:\\Program Files (x86)",
];

#[cfg(not(any(unix, windows)))]
const OS_DIRS: &[&str] = &[];

/// True iff `folder` must never be swept with a wildcard allow-list.
pub fn is_critical_path(folder: &Path) -> bool {
    let mut folder = normalize(folder);
    // Run-relative folders are judged from the working directory.
    if !folder.is_absolute() {
        if let Ok(cwd) = std::env::current_dir() {
            folder = normalize(&cwd.join(&folder));
        }
    }

    // Platform root itself, or anything directly under it.
    if folder.is_absolute() {
        match folder.parent() {
            None => return true,
            Some(parent) if parent.parent().is_none() => return true,
            _ => {}
        }
    }

    for os_dir in OS_DIRS {
        if folder.starts_with(os_dir) {
            return true;
        }
    }

    // User-profile root and its immediate children.
    if let Some(home) = home_dir() {
        let home = normalize(&home);
        if folder == home || folder.parent() == Some(home.as_path()) {
            return true;
        }
    }

    false
}

/// Strip trailing separators and redundant `.` components so path
/// equality behaves.
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
