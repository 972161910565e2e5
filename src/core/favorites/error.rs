//! Error types for the favorites store.

use thiserror::Error;

/// Faults while reading or rewriting the favorites document.
///
/// A corrupt document is deliberately NOT represented here: the store reads
/// it as an empty collection to stay available.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// IO error touching the favorites file.
    #[error("Favorites IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize records for writing.
    #[error("Favorites serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
