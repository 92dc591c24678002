//! Error types for noip-update.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for noip-update.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// DDNS error types.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// Invalid input (missing hostname, unresolved IP).
    #[error("{0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The home directory of the current user could not be determined.
    #[error("Could not find home directory")]
    HomeDir,

    /// Authentication file could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider rejected the update.
    #[error("Provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        DdnsError::Network(e.to_string())
    }
}

impl From<toml::de::Error> for DdnsError {
    fn from(e: toml::de::Error) -> Self {
        DdnsError::Config(e.to_string())
    }
}
