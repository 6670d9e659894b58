//! Multi-party convergence checks.
//!
//! Parties that share a seed run independent generators. To confirm they are
//! at the same stream position without exchanging the stream, each side
//! computes a digest over its next blocks and compares digests.
//!
//! Algorithm:
//! 1. H = SHA256("gstream/stream-digest/v1")
//! 2. For each of the next `count` blocks: H.update(block)
//! 3. Return H

use sha2::{Digest, Sha256};

use gstream_core::{Sha256Hash, StreamGenerator};

use crate::error::{GstreamError, Result};

/// Domain tag prefixed to every stream digest.
pub const DIGEST_DOMAIN: &[u8] = b"gstream/stream-digest/v1";

/// Digest the next `count` blocks of `generator`, advancing it.
pub fn stream_digest(generator: &mut StreamGenerator, count: u64) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update(DIGEST_DOMAIN);
    for _ in 0..count {
        hasher.update(generator.next_block().as_bytes());
    }
    Sha256Hash::from_bytes(hasher.finalize().into())
}

/// Result of comparing two streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceResult {
    /// Every compared block matched.
    Converged,
    /// Block `index` (counted from each stream's position when the check
    /// started) differed.
    Diverged { index: u64 },
}

impl ConvergenceResult {
    pub fn is_converged(&self) -> bool {
        matches!(self, ConvergenceResult::Converged)
    }
}

/// Compare the next `count` blocks of two generators.
///
/// Both generators advance by the same number of blocks: up to and including
/// the first mismatch, or `count` if none.
pub fn check_convergence(
    a: &mut StreamGenerator,
    b: &mut StreamGenerator,
    count: u64,
) -> ConvergenceResult {
    for index in 0..count {
        if a.next_block() != b.next_block() {
            tracing::warn!(
                index,
                a = a.label().unwrap_or(""),
                b = b.label().unwrap_or(""),
                "streams diverged"
            );
            return ConvergenceResult::Diverged { index };
        }
    }
    ConvergenceResult::Converged
}

/// Like [`check_convergence`], but a divergence is an error.
pub fn verify_convergence(
    a: &mut StreamGenerator,
    b: &mut StreamGenerator,
    count: u64,
) -> Result<()> {
    match check_convergence(a, b, count) {
        ConvergenceResult::Converged => Ok(()),
        ConvergenceResult::Diverged { index } => Err(GstreamError::Diverged { index }),
    }
}

/// Check a remote party's digest against the local stream.
pub fn verify_digest(generator: &mut StreamGenerator, count: u64, remote: &Sha256Hash) -> bool {
    &stream_digest(generator, count) == remote
}

/// Check that every party produces the same next `count` blocks.
///
/// Returns the position in `parties` of the first generator that disagrees
/// with the first one, or `None` if all agree.
pub fn find_divergent_party(parties: &mut [StreamGenerator], count: u64) -> Option<usize> {
    let (first, rest) = parties.split_first_mut()?;
    let expected = stream_digest(first, count);
    rest.iter_mut()
        .position(|party| stream_digest(party, count) != expected)
        .map(|i| i + 1)
}
