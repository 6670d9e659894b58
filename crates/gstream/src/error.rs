//! Error types for the gstream facade.

use gstream_core::{IntegrityError, LoadError};
use gstream_pqc::PqcError;
use thiserror::Error;

/// Errors that can occur through the unified API.
#[derive(Debug, Error)]
pub enum GstreamError {
    /// Seed failed the checksum gate.
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Seed file could not be loaded.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Seed derivation error.
    #[error("pqc error: {0}")]
    Pqc(#[from] PqcError),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Two streams produced different blocks.
    #[error("streams diverged at block {index}")]
    Diverged { index: u64 },
}

/// Result type for gstream operations.
pub type Result<T> = std::result::Result<T, GstreamError>;
