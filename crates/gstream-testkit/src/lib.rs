//! # gstream Testkit
//!
//! Testing utilities for gstream.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known streams with expected outputs for cross-platform verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up single- and multi-party scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use gstream_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, _) in verify_all_vectors() {
//!     assert!(matches, "{}", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use gstream_testkit::generators::{generator_from_params, GeneratorParams};
//!
//! proptest! {
//!     #[test]
//!     fn streams_are_deterministic(params: GeneratorParams) {
//!         let mut a = generator_from_params(&params);
//!         let mut b = generator_from_params(&params);
//!         prop_assert_eq!(a.next_block(), b.next_block());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use gstream_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! let blocks = fixture.next_blocks(4);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{distinct_seed_fixtures, multi_party_fixtures, TestFixture};
pub use generators::{generator_from_params, GeneratorParams, SeedChoice};
pub use vectors::{
    all_vectors, generate_outputs, pqc_vectors, vectors_json, verify_all_vectors,
    verify_gqs1_vectors, verify_pqc_vectors, GoldenVector, PqcVector, GQS1_VECTORS,
};
