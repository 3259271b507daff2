use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected today, yesterday, or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid step count \"{input}\"")]
    InvalidSteps { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Display name must not be empty")]
    EmptyUser,

    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Failures reading from or writing to the step log.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to create step log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open step log at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("Step log query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Malformed log date \"{value}\" in step log")]
    MalformedDate { value: String },
}
