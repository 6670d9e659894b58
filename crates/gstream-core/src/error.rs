//! Error types for gstream core.

use thiserror::Error;

/// Errors raised by the seed checksum gate.
///
/// All of these are construction-time failures. A generator that exists has
/// already passed the gate and has no further error states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("seed checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("unknown seed: {0}")]
    UnknownSeed(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for IntegrityError {
    fn from(e: hex::FromHexError) -> Self {
        IntegrityError::InvalidHex(e.to_string())
    }
}

/// Errors that can occur while loading seed material from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The loaded seed did not pass the checksum gate.
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),
}
