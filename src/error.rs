//! Application-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur within the application.
///
/// Everything except `Clipboard` is a startup failure and terminates the
/// process before a window is shown.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read resource {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed resource {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid stylesheet: {0}")]
    InvalidStylesheet(String),

    #[error("event loop error: {0}")]
    Eframe(#[from] eframe::Error),

    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
