//! Durable configuration store: read-modify-write of the TOML file.
//!
//! The store owns the file between invocations; a running cleanup never
//! mutates it. Each mutation loads the file, edits one section, and
//! writes the whole document back.

use std::path::{Path, PathBuf};

use tracing::info;

use super::SweepConfig;
use crate::errors::ConfigError;

/// Handle to the on-disk configuration file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current config, or defaults when the file is absent.
    pub fn load(&self) -> Result<SweepConfig, ConfigError> {
        SweepConfig::load(&self.path, None)
    }

    /// Persist a config, creating parent directories as needed.
    pub fn save(&self, config: &SweepConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let text = config.to_toml()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFailed {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
            }
        }
        std::fs::write(&self.path, text).map_err(|e| ConfigError::WriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Append a folder to the watched list. Duplicate paths are a no-op.
    pub fn add_folder(&self, folder: &Path) -> Result<SweepConfig, ConfigError> {
        let mut config = self.load()?;
        if config.folders.iter().any(|f| f == folder) {
            info!(folder = %folder.display(), "folder already configured");
            return Ok(config);
        }
        config.folders.push(folder.to_path_buf());
        self.save(&config)?;
        info!(folder = %folder.display(), "folder added");
        Ok(config)
    }

    /// Remove a folder from the watched list. Returns whether it was present.
    pub fn remove_folder(&self, folder: &Path) -> Result<bool, ConfigError> {
        let mut config = self.load()?;
        let before = config.folders.len();
        config.folders.retain(|f| f != folder);
        let removed = config.folders.len() != before;
        if removed {
            self.save(&config)?;
            info!(folder = %folder.display(), "folder removed");
        }
        Ok(removed)
    }

    /// The ordered watched folder list.
    pub fn list_folders(&self) -> Result<Vec<PathBuf>, ConfigError> {
        Ok(self.load()?.folders)
    }

    /// Set one scalar config field addressed by key.
    ///
    /// Recognized keys: `retention-days`, `quarantine-root`,
    /// `compress`, `archive-prefix`, `delete-after-compress`.
    pub fn set(&self, key: &str, value: &str) -> Result<SweepConfig, ConfigError> {
        let mut config = self.load()?;
        match key {
            "retention-days" => {
                config.retention.retention_days =
                    value.parse().map_err(|_| ConfigError::ValidationFailed {
                        field: key.to_string(),
                        message: format!("expected a non-negative integer, got {value:?}"),
                    })?;
            }
            "quarantine-root" => {
                config.quarantine.root = PathBuf::from(value);
            }
            "compress" => {
                config.quarantine.compress = parse_bool(key, value)?;
            }
            "archive-prefix" => {
                config.quarantine.archive_prefix = value.to_string();
            }
            "delete-after-compress" => {
                config.quarantine.delete_after_compress = parse_bool(key, value)?;
            }
            other => {
                return Err(ConfigError::ValidationFailed {
                    field: other.to_string(),
                    message: "unknown config key".to_string(),
                });
            }
        }
        self.save(&config)?;
        Ok(config)
    }

    /// Add an extension to the allow-list (pass `*` for the wildcard).
    pub fn add_extension(&self, ext: &str) -> Result<SweepConfig, ConfigError> {
        let mut config = self.load()?;
        let ext = ext.trim_start_matches('.').to_string();
        if !config.retention.allowed_extensions.contains(&ext) {
            config.retention.allowed_extensions.push(ext);
            self.save(&config)?;
        }
        Ok(config)
    }

    /// Remove an extension from the allow-list.
    pub fn remove_extension(&self, ext: &str) -> Result<bool, ConfigError> {
        let mut config = self.load()?;
        let ext = ext.trim_start_matches('.');
        let before = config.retention.allowed_extensions.len();
        config.retention.allowed_extensions.retain(|e| e != ext);
        let removed = config.retention.allowed_extensions.len() != before;
        if removed {
            self.save(&config)?;
        }
        Ok(removed)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::ValidationFailed {
            field: key.to_string(),
            message: format!("expected a boolean, got {value:?}"),
        }),
    }
}
