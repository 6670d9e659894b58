//! Error types for seed derivation.

use thiserror::Error;

/// Errors that can occur when deriving post-quantum seed material.
#[derive(Debug, Error)]
pub enum PqcError {
    /// Algorithm name not recognised.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Security level outside 1..=5.
    #[error("invalid security level: {0}")]
    InvalidSecurityLevel(u8),

    /// The underlying generator could not be built.
    #[error("integrity error: {0}")]
    Integrity(#[from] gstream_core::IntegrityError),
}

/// Result type for seed derivation.
pub type Result<T> = std::result::Result<T, PqcError>;
