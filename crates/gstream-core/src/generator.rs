//! The stream generator: the public entry point of the protocol.
//!
//! ```text
//! SeedStore ──► HashChain(SHA256(seed), 0)
//!                  │
//!                  ▼
//!        ┌─► ratchet ─► select ─┐   repeat until 256 bits
//!        └──────────────────────┘
//!                  │
//!                  ▼
//!                fold ──► 16-byte Output
//! ```
//!
//! Construction is the only fallible step. Once a generator exists it can
//! always produce another block; the stream has no end.

use std::fmt;

use crate::crypto::Sha256Hash;
use crate::error::IntegrityError;
use crate::fold::fold;
use crate::ratchet::{Counter, HashChain};
use crate::seed::{SeedRegistry, SeedStore, GOLDEN_RATIO_CHECKSUM};
use crate::select::collect_from_chain;
use crate::types::{Output, OUTPUT_LEN};

/// A deterministic, infinite stream of 128-bit blocks.
///
/// Two generators built from the same seed emit identical sequences, on any
/// platform. That determinism is how independent parties stay in sync: each
/// runs its own instance.
///
/// Not safe for concurrent mutation: `next_block` takes `&mut self`. Share
/// through a mutex or build one generator per consumer.
pub struct StreamGenerator {
    chain: HashChain,
    checksum: Sha256Hash,
    label: Option<String>,
    blocks: u64,
    /// Block currently being drained by the byte interface.
    pending: Output,
    /// Read position in `pending`; `OUTPUT_LEN` means drained.
    pending_pos: usize,
}

impl StreamGenerator {
    /// Create a generator from a seed checked against the reference checksum.
    ///
    /// Only the reference seed passes. Use [`StreamGenerator::with_checksum`]
    /// or [`StreamGenerator::from_registry`] for any other seed.
    pub fn new(seed: &[u8]) -> Result<Self, IntegrityError> {
        Self::with_checksum(seed, Sha256Hash::from_bytes(GOLDEN_RATIO_CHECKSUM))
    }

    /// Create a generator from a seed and the checksum it must hash to.
    pub fn with_checksum(seed: &[u8], checksum: Sha256Hash) -> Result<Self, IntegrityError> {
        Ok(Self::from_store(SeedStore::new(seed, checksum)?))
    }

    /// Create a generator from a named registry entry.
    pub fn from_registry(registry: &SeedRegistry, name: &str) -> Result<Self, IntegrityError> {
        let entry = registry.get(name)?;
        Ok(Self::from_store(SeedStore::from_entry(entry)?).with_label(entry.name.clone()))
    }

    /// Create a generator from a seed that has already passed the gate.
    pub fn from_store(store: SeedStore) -> Self {
        let chain = HashChain::from_seed(store.seed().as_bytes());
        tracing::debug!(checksum = %store.checksum(), "stream generator ready");
        Self {
            chain,
            checksum: *store.checksum(),
            label: None,
            blocks: 0,
            pending: Output::ZERO,
            pending_pos: OUTPUT_LEN,
        }
    }

    /// Attach a label. Labels name the instance in logs; they never change
    /// the generated bytes.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Produce the next 16-byte block.
    ///
    /// Block reads bypass the byte buffer used by [`StreamGenerator::fill_bytes`].
    pub fn next_block(&mut self) -> Output {
        let selection = collect_from_chain(&mut self.chain);
        self.blocks += 1;
        tracing::trace!(
            label = self.label.as_deref().unwrap_or(""),
            block = self.blocks,
            ratchet_steps = selection.blocks,
            "generated block"
        );
        fold(&selection.bits)
    }

    /// Discard the next `n` blocks.
    pub fn skip_blocks(&mut self, n: u64) {
        for _ in 0..n {
            self.next_block();
        }
    }

    /// Fill `dest` from the byte stream formed by concatenating blocks.
    ///
    /// Unused bytes of the last block are kept for the next call, so splitting
    /// a read across calls yields the same bytes as one large read.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut filled = 0;
        while filled < dest.len() {
            if self.pending_pos == OUTPUT_LEN {
                self.pending = self.next_block();
                self.pending_pos = 0;
            }
            let available = &self.pending.as_bytes()[self.pending_pos..];
            let n = available.len().min(dest.len() - filled);
            dest[filled..filled + n].copy_from_slice(&available[..n]);
            self.pending_pos += n;
            filled += n;
        }
    }

    /// Number of blocks produced so far.
    pub fn blocks_generated(&self) -> u64 {
        self.blocks
    }

    /// Counter value the next ratchet step will hash.
    pub fn counter(&self) -> &Counter {
        self.chain.counter()
    }

    /// Checksum the seed was validated against.
    pub fn checksum(&self) -> &Sha256Hash {
        &self.checksum
    }

    /// Label shown in logs and `Debug`, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Iterator for StreamGenerator {
    type Item = Output;

    fn next(&mut self) -> Option<Output> {
        Some(self.next_block())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// The stream is reproducible by design, so it is deliberately not `CryptoRng`.
impl rand::RngCore for StreamGenerator {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        StreamGenerator::fill_bytes(self, &mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        StreamGenerator::fill_bytes(self, &mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        StreamGenerator::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        StreamGenerator::fill_bytes(self, dest);
        Ok(())
    }
}

impl fmt::Debug for StreamGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamGenerator")
            .field("label", &self.label)
            .field("checksum", &self.checksum)
            .field("counter", self.chain.counter())
            .field("blocks", &self.blocks)
            .finish()
    }
}
