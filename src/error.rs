use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("No such file: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum RevealError {
    #[error("No file browser opener found on this system.")]
    NotFound,

    #[error("Failed to launch file browser: {0}")]
    Spawn(std::io::Error),

    #[error("File browser exited with {0}")]
    Status(std::process::ExitStatus),
}
