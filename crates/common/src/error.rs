//! Error types shared across Thermeye crates.

use std::path::PathBuf;

use thermeye_frame_model::FrameError;

/// Top-level error type for Thermeye operations.
#[derive(Debug, thiserror::Error)]
pub enum ThermeyeError {
    #[error("Invalid frame: {0}")]
    Frame(#[from] FrameError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ThermeyeError.
pub type ThermeyeResult<T> = Result<T, ThermeyeError>;

impl ThermeyeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
