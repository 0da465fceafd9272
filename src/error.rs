use std::{io, path::PathBuf};
use thiserror::Error;

/// Reasons a draft is refused by [`TaskBoard::create_task`](crate::board::TaskBoard::create_task).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task title is required")]
    MissingTitle,
    #[error("assignee is required")]
    MissingAssignee,
}

/// Errors that stop the application before or after the UI runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid sample task data: {0}")]
    Seed(#[from] toml::de::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
