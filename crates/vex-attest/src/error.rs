//! Error types for attestations.

use std::io;

use thiserror::Error;
use vex_attest_core::CoreError;

/// Errors that can occur while building or emitting an attestation.
#[derive(Debug, Error)]
pub enum AttestationError {
    /// A subject without digests was offered. Nothing was added.
    #[error("subject {name} has no digests")]
    InvalidSubject { name: String },

    /// The statement could not be encoded.
    #[error("encoding attestation: {0}")]
    EncodingFailure(#[source] serde_json::Error),

    /// The output sink rejected the bytes.
    #[error("writing attestation: {0}")]
    WriteFailure(#[source] io::Error),

    /// Input could not be parsed as an attestation.
    #[error("malformed attestation: {0}")]
    Malformed(String),
}

impl From<CoreError> for AttestationError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidSubject { name } => AttestationError::InvalidSubject { name },
            CoreError::EncodingError(source) => AttestationError::EncodingFailure(source),
            CoreError::MalformedStatement(msg) => AttestationError::Malformed(msg),
            CoreError::UnsupportedDigestAlgorithm(alg) => {
                AttestationError::Malformed(format!("unsupported digest algorithm: {alg}"))
            }
        }
    }
}

/// Result type for attestation operations.
pub type Result<T> = std::result::Result<T, AttestationError>;
