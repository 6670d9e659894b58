//! # gstream PQC
//!
//! Derives seed material sized for NIST post-quantum algorithms (Kyber,
//! Dilithium, SPHINCS+) from gstream output blocks.
//!
//! This crate does not generate keys and makes no secrecy claim: derived seeds
//! are exactly as public as the generator seed. Use them for reproducible
//! test keys and interoperability fixtures.
//!
//! ```rust
//! use gstream_pqc::{HybridKeyStream, PqcAlgorithm};
//!
//! let keys: Vec<_> = HybridKeyStream::reference(PqcAlgorithm::Dilithium3, "SIGN")
//!     .unwrap()
//!     .take(3)
//!     .collect();
//! assert!(keys.iter().all(|k| k.seed.len() == 32));
//! ```

pub mod algorithm;
pub mod derive;
pub mod error;

pub use algorithm::{AlgorithmKind, PqcAlgorithm, SecurityLevel};
pub use derive::{
    assess_seed, derive_seed, generate_hybrid_key, HybridKey, HybridKeyStream, SeedQuality,
};
pub use error::{PqcError, Result};
