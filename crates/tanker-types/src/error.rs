//! Error types for tanker-fleet

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Unknown user identity
    #[error("User not found: {0}")]
    NotFound(String),

    /// Unrecognized bucket key
    #[error("Invalid bucket: {0}")]
    InvalidBucket(String),

    /// The trip snapshot (or the ownership data feeding it) could not be read
    #[error("Classification input unavailable: {0}")]
    ClassificationInput(String),

    /// Enrichment lookups failed; defaults were applied instead
    #[error("Enrichment degraded: {0}")]
    EnrichmentDegraded(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;
