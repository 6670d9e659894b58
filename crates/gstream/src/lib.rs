//! # gstream
//!
//! The unified API for gstream: deterministic, seed-derived streams of
//! 128-bit blocks.
//!
//! ## Overview
//!
//! Given a fixed seed, a [`StreamGenerator`] produces an unbounded sequence
//! of 16-byte blocks that every conforming implementation reproduces exactly.
//! Parties that share a seed stay in lockstep by running their own instances.
//!
//! - **Integrity gate**: a seed is only accepted if it hashes to its
//!   registered SHA-256 checksum
//! - **Ratchet**: each step hashes the previous state with a decimal counter
//! - **Selection and folding**: 256 filtered bits fold to one 128-bit block
//!
//! The stream is reproducible, not secret. Do not use it where an adversary
//! must not predict outputs.
//!
//! ## Usage
//!
//! ```rust
//! use gstream::{GeneratorConfig, StreamGenerator, GOLDEN_RATIO_SEED};
//!
//! let mut gen = StreamGenerator::new(&GOLDEN_RATIO_SEED).unwrap();
//! assert_eq!(gen.next_block().to_hex(), "3c732e0d04dac163a5cc2b15c7caf42c");
//!
//! let config = GeneratorConfig::from_json(r#"{ "seed": { "kind": "named", "name": "pi" } }"#)
//!     .unwrap();
//! let mut pi = config.build().unwrap();
//! assert_eq!(pi.next_block().to_hex(), "21e7a8682c751e928f814ce032ef3660");
//! ```
//!
//! ## Re-exports
//!
//! - `gstream::core` - the protocol (seed gate, ratchet, selection, fold)
//! - `gstream::pqc` - post-quantum seed derivation from blocks

pub mod config;
pub mod convergence;
pub mod error;

// Re-export component crates
pub use gstream_core as core;
pub use gstream_pqc as pqc;

pub use config::{GeneratorConfig, SeedSource};
pub use convergence::{
    check_convergence, find_divergent_party, stream_digest, verify_convergence, verify_digest,
    ConvergenceResult, DIGEST_DOMAIN,
};
pub use error::{GstreamError, Result};

// Re-export commonly used core types
pub use gstream_core::{
    Counter, Gqs1Stream, IntegrityError, LoadError, Output, SeedRegistry, SeedStore,
    Sha256Hash, StreamGenerator, GOLDEN_RATIO_CHECKSUM, GOLDEN_RATIO_SEED,
};
pub use gstream_pqc::{derive_seed, HybridKey, HybridKeyStream, PqcAlgorithm};
