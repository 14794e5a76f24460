//! Retention policy: which files are eligible for cleanup.

use serde::{Deserialize, Serialize};

/// The allow-list sentinel meaning "every extension is eligible".
pub const WILDCARD: &str = "*";

/// Age, extension, and protection criteria for one run.
///
/// Loaded once at process start and passed by reference into the
/// walker and classifier; never mutated during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicy {
    /// Minimum file age in days. `0` means no minimum age — every
    /// matching file is eligible immediately.
    pub retention_days: u32,
    /// Allowed extensions, case-sensitive, without the leading dot.
    /// The single entry `"*"` matches everything; the empty string
    /// matches files without an extension.
    pub allowed_extensions: Vec<String>,
    /// File names that are never touched. Case-insensitive exact
    /// match, no patterns.
    pub protected_names: Vec<String>,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            retention_days: 30,
            allowed_extensions: Vec::new(),
            protected_names: vec![
                "desktop.ini".to_string(),
                "thumbs.db".to_string(),
                ".ds_store".to_string(),
            ],
        }
    }
}

impl RetentionPolicy {
    /// True when the allow-list contains the wildcard sentinel.
    pub fn is_wildcard(&self) -> bool {
        self.allowed_extensions.iter().any(|e| e == WILDCARD)
    }

    /// Retention period expressed in milliseconds.
    pub fn retention_millis(&self) -> u64 {
        u64::from(self.retention_days) * 86_400_000
    }
}
