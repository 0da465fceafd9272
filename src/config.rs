//! Runtime configuration loaded from `tasktracker.toml`.

use crate::error::{AppError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TASKTRACKER_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tasktracker.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Filter directive (trace, debug, info, warn, error or a full EnvFilter string)
    pub log_level: String,
    /// Log destination; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// Seed the board with the demo tasks on login
    pub sample_tasks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            sample_tasks: true,
        }
    }
}

impl Config {
    /// Loads from `$TASKTRACKER_CONFIG`, then `./tasktracker.toml`, falling
    /// back to defaults when neither exists.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
