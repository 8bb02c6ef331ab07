//! Application Configuration
//!
//! Loaded from `<config_dir>/idea-planner/config.toml` when present.
//! Every field is optional in the file; missing ones take the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::transfer::EXPORT_FILE_NAME;

/// Directory name used under the platform data/config dirs
pub const APP_DIR: &str = "idea-planner";

/// Overrides `data_dir` when set
pub const DATA_DIR_ENV: &str = "IDEA_PLANNER_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Directory holding the persisted slot
    pub data_dir: PathBuf,
    /// Key of the slot; the file is `<data_dir>/<storage_key>.json`
    pub storage_key: String,
    /// File name suggested for exports
    pub export_file_name: String,
    /// Log directory; `<data_dir>/logs` when unset
    pub log_dir: Option<PathBuf>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Rotate the log file once it grows past this size
    pub log_max_bytes: u64,
    /// Rotated log files to keep
    pub log_max_files: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(".idea-planner")),
            storage_key: "ideas".to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            log_dir: None,
            log_level: "info".to_string(),
            log_max_bytes: 1024 * 1024,
            log_max_files: 3,
        }
    }
}

impl PlannerConfig {
    /// `<config_dir>/idea-planner/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`, or from the default location if it exists, then
    /// apply environment overrides. No file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
    }

    /// Effective log directory, following `data_dir` unless set explicitly
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("logs"))
    }

    /// Where the `FileStore` keeps the slot
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.storage_key))
    }
}
