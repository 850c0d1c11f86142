//! Rolodex error types

use thiserror::Error;

/// Rolodex error type
#[derive(Error, Debug)]
pub enum Error {
    /// A person with this name already exists in the store
    #[error("a person named '{0}' already exists")]
    DuplicateName(String),

    /// Remote directory error
    #[error("Upstream directory error: {0}")]
    Upstream(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Rolodex operations
pub type Result<T> = std::result::Result<T, Error>;
