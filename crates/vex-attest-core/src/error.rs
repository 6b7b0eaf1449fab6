//! Error types for vex-attest core.

use thiserror::Error;

/// Core errors that can occur while building or encoding statements.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("subject {name} has no digests")]
    InvalidSubject { name: String },

    #[error("encoding error: {0}")]
    EncodingError(#[source] serde_json::Error),

    #[error("malformed statement: {0}")]
    MalformedStatement(String),

    #[error("unsupported digest algorithm: {0}")]
    UnsupportedDigestAlgorithm(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
