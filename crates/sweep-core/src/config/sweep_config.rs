//! Top-level sweep configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{QuarantineTarget, RetentionPolicy};
use crate::errors::ConfigError;

/// Top-level configuration aggregating policy, quarantine target, and
/// the watched folder list.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`SWEEP_*`)
/// 3. Config file (`sweep.toml`, or the `--config` path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SweepConfig {
    pub retention: RetentionPolicy,
    pub quarantine: QuarantineTarget,
    /// Ordered list of folder roots to clean.
    pub folders: Vec<PathBuf>,
}

/// CLI override arguments that can be applied on top of a loaded config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub retention_days: Option<u32>,
    pub quarantine_root: Option<PathBuf>,
}

impl SweepConfig {
    /// Load configuration with layered resolution. A missing file is
    /// not an error — defaults apply, and `folder add` creates the
    /// file on first write.
    pub fn load(path: &Path, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::read_toml_file(path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        if let Some(cli) = cli {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the resolved configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quarantine.root.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "quarantine.root".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.quarantine.archive_prefix.contains(['/', '\\']) {
            return Err(ConfigError::ValidationFailed {
                field: "quarantine.archive_prefix".to_string(),
                message: "must not contain path separators".to_string(),
            });
        }
        for folder in &self.folders {
            if folder.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "folders".to_string(),
                    message: "folder entries must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn read_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `SWEEP_RETENTION_DAYS`, `SWEEP_QUARANTINE_ROOT`.
    fn apply_env_overrides(config: &mut SweepConfig) {
        if let Ok(val) = std::env::var("SWEEP_RETENTION_DAYS") {
            match val.parse::<u32>() {
                Ok(v) => config.retention.retention_days = v,
                Err(_) => warn!(value = %val, "ignoring non-numeric SWEEP_RETENTION_DAYS"),
            }
        }
        if let Ok(val) = std::env::var("SWEEP_QUARANTINE_ROOT") {
            if !val.is_empty() {
                config.quarantine.root = PathBuf::from(val);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SweepConfig, cli: &CliOverrides) {
        if let Some(days) = cli.retention_days {
            config.retention.retention_days = days;
        }
        if let Some(ref root) = cli.quarantine_root {
            config.quarantine.root = root.clone();
        }
    }
}

/// Default config file location: `sweep.toml` in the working directory
/// if present, otherwise `~/.sweep/config.toml`.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from("sweep.toml");
    if local.exists() {
        return local;
    }
    match home_dir() {
        Some(home) => home.join(".sweep").join("config.toml"),
        None => local,
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
