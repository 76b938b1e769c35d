// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CloudError>;

// Allow `?` on std::io::Error by converting to CloudError::Io with unknown path.
impl From<std::io::Error> for CloudError {
    fn from(source: std::io::Error) -> Self {
        CloudError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl CloudError {
    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CloudError::Io {
            source,
            path: path.into(),
        }
    }
}
