//! Error types for catalog access and configuration.

use thiserror::Error;

/// Errors that can occur while talking to a catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request could not be completed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("failed to decode catalog response: {0}")]
    Decode(String),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The offline catalog document is malformed.
    #[error("invalid catalog file: {0}")]
    CatalogFile(String),

    /// Configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::CatalogFile(err.to_string())
    }
}
