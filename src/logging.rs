//! Structured logging setup.
//!
//! The terminal belongs to the UI while the app runs, so events are only
//! written when a log file is configured. `RUST_LOG` takes precedence over
//! the configured level.

use crate::config::Config;
use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Returns `Ok(false)` when no log file is
/// configured and nothing was installed.
pub fn init_logging(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = build_filter(&config.log_level)?;
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.log_level,
        "logging initialized"
    );
    Ok(true)
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|err| AppError::Logging(format!("invalid log level `{level}`: {err}"))),
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_means_no_subscriber() {
        let config = Config::default();
        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn log_file_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("tasktracker.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
