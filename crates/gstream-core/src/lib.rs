//! # gstream core
//!
//! A deterministic, seed-derived stream of 128-bit blocks.
//!
//! Given a fixed 32-byte seed, the generator produces an unbounded sequence
//! that any conforming implementation reproduces bit for bit. It is a
//! reproducibility primitive for procedural generation, test fixtures and
//! multi-party synchronization. It is **not** a cryptographically secure RNG:
//! anyone who knows the seed knows the stream.
//!
//! This crate contains no I/O beyond optional seed-file loading. It is pure
//! computation over SHA-256.
//!
//! ## Pipeline
//!
//! - [`SeedStore`] - checksum gate; a seed must hash to its registered digest
//! - [`HashChain`] - `State = SHA256(State || decimal(Counter))`, one-way
//! - [`select`] - keep bit 0 of each byte whose bits 1 and 2 agree, until 256
//! - [`fold`] - XOR the two 128-bit halves
//! - [`StreamGenerator`] - owns the chain and hands out [`Output`] blocks
//!
//! ## Usage
//!
//! ```rust
//! use gstream_core::{StreamGenerator, GOLDEN_RATIO_SEED};
//!
//! let mut gen = StreamGenerator::new(&GOLDEN_RATIO_SEED).unwrap();
//! assert_eq!(gen.next_block().to_hex(), "3c732e0d04dac163a5cc2b15c7caf42c");
//! ```

pub mod crypto;
pub mod error;
pub mod fold;
pub mod generator;
pub mod gqs1;
pub mod ratchet;
pub mod seed;
pub mod select;
pub mod types;

pub use crypto::Sha256Hash;
pub use error::{IntegrityError, LoadError};
pub use fold::{fold, fold_halves};
pub use generator::StreamGenerator;
pub use gqs1::Gqs1Stream;
pub use ratchet::{ratchet, Counter, HashChain};
pub use seed::{
    load_seed_file, Seed, SeedEntry, SeedRegistry, SeedStore, GOLDEN_RATIO, GOLDEN_RATIO_CHECKSUM,
    GOLDEN_RATIO_SEED, SEED_LEN,
};
pub use select::{accept, collect_256_bits, SelectedBits, Selection};
pub use types::{Output, State, OUTPUT_LEN, STATE_LEN};
