//! Error types for data table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the data tables at startup.
///
/// All variants are fatal: a caller who points at a tables file expects that
/// file's content, so there is no silent fallback to the built-in dataset.
#[derive(Debug, Error)]
pub enum TablesError {
    /// The tables file does not exist.
    #[error("Tables file not found: {path}")]
    NotFound { path: PathBuf },

    /// The tables file exists but could not be read.
    #[error("Failed to read tables file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tables file is not valid JSON for the expected shape.
    #[error("Failed to parse tables file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TablesError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseFailed error.
    pub fn parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseFailed {
            path: path.into(),
            source,
        }
    }
}
