//! Errors from the outer shell: terminal, config file and log setup.
//! The timing core itself has no failure modes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CubetimeError {
    /// Terminal or file I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be encoded or decoded
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Log file or subscriber setup failed
    #[error("Logging error at {path}: {message}")]
    Logging { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, CubetimeError>;

impl CubetimeError {
    pub fn logging(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Logging {
            path: path.into(),
            message: message.into(),
        }
    }
}
