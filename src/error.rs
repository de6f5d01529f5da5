//! Error types for clawmerge.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while merging a config document
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write {path:?}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MergeError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        MergeError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        MergeError::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<config::ConfigError> for MergeError {
    fn from(err: config::ConfigError) -> Self {
        MergeError::Config(err.to_string())
    }
}
