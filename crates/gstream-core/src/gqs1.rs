//! The GQS-1 compliance stream.
//!
//! GQS-1 is the older published vector set built from the same seed, gate and
//! fold, with a simpler chain:
//!
//! - `State_0 = Seed` (the seed itself, not its hash)
//! - `State_n = SHA256(State_{n-1} || be32(n))` for `n = 1, 2, ...`
//! - `Vector_n = fold(State_n)`; every state is folded whole, no bit selection
//!
//! The counter is a 4-byte big-endian integer, so the sequence is finite: it
//! ends after the vector for `n = u32::MAX`.

use std::iter::FusedIterator;

use crate::crypto::Sha256Hash;
use crate::error::IntegrityError;
use crate::fold::fold_halves;
use crate::ratchet::ratchet_bytes;
use crate::seed::{SeedStore, GOLDEN_RATIO_CHECKSUM};
use crate::types::{Output, State};

/// Iterator over GQS-1 compliance vectors.
#[derive(Debug)]
pub struct Gqs1Stream {
    state: State,
    /// Counter for the next vector; `None` once the 32-bit range is used up.
    next_counter: Option<u32>,
}

impl Gqs1Stream {
    /// Start the stream from a seed checked against the reference checksum.
    pub fn new(seed: &[u8]) -> Result<Self, IntegrityError> {
        Self::with_checksum(seed, Sha256Hash::from_bytes(GOLDEN_RATIO_CHECKSUM))
    }

    /// Start the stream from a seed and the checksum it must hash to.
    pub fn with_checksum(seed: &[u8], checksum: Sha256Hash) -> Result<Self, IntegrityError> {
        Ok(Self::from_store(SeedStore::new(seed, checksum)?))
    }

    /// Start the stream from a validated seed.
    pub fn from_store(store: SeedStore) -> Self {
        Self {
            state: State::from_bytes(*store.seed().as_bytes()),
            next_counter: Some(1),
        }
    }

    /// Produce the next vector, or `None` after counter `u32::MAX`.
    pub fn next_vector(&mut self) -> Option<Output> {
        let counter = self.next_counter?;
        self.state = ratchet_bytes(&self.state, &counter.to_be_bytes());
        self.next_counter = counter.checked_add(1);
        Some(Output(fold_halves(self.state.as_bytes())))
    }

    /// Number of vectors still available.
    pub fn remaining(&self) -> u64 {
        match self.next_counter {
            Some(c) => u64::from(u32::MAX) - u64::from(c) + 1,
            None => 0,
        }
    }
}

impl Iterator for Gqs1Stream {
    type Item = Output;

    fn next(&mut self) -> Option<Output> {
        self.next_vector()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl FusedIterator for Gqs1Stream {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{GOLDEN_RATIO_SEED, PI_SEED};

    const PUBLISHED: [&str; 10] = [
        "a01611f01e8207a27c1529c3650c4838",
        "255a98839109b593c97580ce561471d7",
        "f9e3d43664f3192b84d90f58ee584d83",
        "96424e78558928d84ce6caff9c0db6b6",
        "b3cf328d72fabeefea0dd08e03ecf916",
        "f28408d2d0346064dcaba3e12af9be41",
        "2814128f48ec28a58ecb252c061a15f9",
        "12b4c98b607be0fc17d8466b2dc8fa8d",
        "f77e98348d239044998b668b312f70ed",
        "017e9869c72a529f25f8dcf1fa869b98",
    ];

    #[test]
    fn test_published_vectors() {
        let got: Vec<String> = Gqs1Stream::new(&GOLDEN_RATIO_SEED)
            .unwrap()
            .take(10)
            .map(|o| o.to_hex())
            .collect();
        assert_eq!(got, PUBLISHED);
    }

    #[test]
    fn test_gate_applies() {
        assert!(matches!(
            Gqs1Stream::new(&PI_SEED),
            Err(IntegrityError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_stream_ends_after_u32_max() {
        let mut stream = Gqs1Stream::new(&GOLDEN_RATIO_SEED).unwrap();
        assert_eq!(stream.remaining(), u64::from(u32::MAX));

        stream.next_counter = Some(u32::MAX);
        assert_eq!(stream.remaining(), 1);
        assert!(stream.next().is_some());
        assert_eq!(stream.remaining(), 0);
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_differs_from_selected_stream() {
        let mut gqs1 = Gqs1Stream::new(&GOLDEN_RATIO_SEED).unwrap();
        let mut stream = crate::StreamGenerator::new(&GOLDEN_RATIO_SEED).unwrap();
        assert_ne!(gqs1.next_vector(), Some(stream.next_block()));
    }
}
