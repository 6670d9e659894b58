//! Seed derivation from generator blocks.
//!
//! A 16-byte block is stretched into algorithm-sized seed material:
//!
//! ```text
//! material = block || algorithm name || context
//! out      = SHA256(material)
//! while |out| < seed_len:
//!     out = out || SHA256(out || material)
//! seed     = out[..seed_len]
//! ```
//!
//! The result is as public as the block it came from. Anyone holding the
//! generator seed can recompute every derived seed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use gstream_core::{Output, StreamGenerator, GOLDEN_RATIO_SEED, OUTPUT_LEN};

use crate::algorithm::PqcAlgorithm;
use crate::error::Result;

/// Stretch `block` into seed material for `algorithm`.
pub fn derive_seed(block: &Output, algorithm: PqcAlgorithm, context: &[u8]) -> Vec<u8> {
    let name = algorithm.name().as_bytes();
    let mut material = Vec::with_capacity(OUTPUT_LEN + name.len() + context.len());
    material.extend_from_slice(block.as_bytes());
    material.extend_from_slice(name);
    material.extend_from_slice(context);

    let seed_len = algorithm.seed_len();
    let mut out = Sha256::digest(&material).to_vec();
    while out.len() < seed_len {
        let next = Sha256::new()
            .chain_update(&out)
            .chain_update(&material)
            .finalize();
        out.extend_from_slice(&next);
    }
    out.truncate(seed_len);
    out
}

/// A generator block paired with the seed derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridKey {
    pub block: Output,
    pub seed: Vec<u8>,
}

impl HybridKey {
    pub fn seed_hex(&self) -> String {
        hex::encode(&self.seed)
    }
}

/// Derive one key from the first block of the reference stream.
pub fn generate_hybrid_key(algorithm: PqcAlgorithm, context: &[u8]) -> Result<HybridKey> {
    let mut generator = StreamGenerator::new(&GOLDEN_RATIO_SEED)?;
    let block = generator.next_block();
    Ok(HybridKey {
        block,
        seed: derive_seed(&block, algorithm, context),
    })
}

/// Iterator of hybrid keys over a generator.
///
/// Item `i` uses context `context || decimal(i)`, so equal blocks could never
/// share a derived seed even under the same context.
#[derive(Debug)]
pub struct HybridKeyStream {
    generator: StreamGenerator,
    algorithm: PqcAlgorithm,
    context: Vec<u8>,
    index: u64,
}

impl HybridKeyStream {
    pub fn new(
        generator: StreamGenerator,
        algorithm: PqcAlgorithm,
        context: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            generator,
            algorithm,
            context: context.into(),
            index: 0,
        }
    }

    /// Stream over the reference seed.
    pub fn reference(algorithm: PqcAlgorithm, context: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::new(
            StreamGenerator::new(&GOLDEN_RATIO_SEED)?,
            algorithm,
            context,
        ))
    }

    pub fn algorithm(&self) -> PqcAlgorithm {
        self.algorithm
    }

    /// Index the next key will use.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn into_generator(self) -> StreamGenerator {
        self.generator
    }
}

impl Iterator for HybridKeyStream {
    type Item = HybridKey;

    fn next(&mut self) -> Option<HybridKey> {
        let block = self.generator.next_block();
        let mut context = self.context.clone();
        context.extend_from_slice(self.index.to_string().as_bytes());
        self.index += 1;
        Some(HybridKey {
            block,
            seed: derive_seed(&block, self.algorithm, &context),
        })
    }
}

/// Basic statistical profile of seed material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedQuality {
    /// Shannon entropy in bits per byte.
    pub shannon_entropy: f64,
    /// Distinct byte values over 256.
    pub byte_diversity: f64,
    pub passes_basic_checks: bool,
}

/// Profile `seed`. A sanity check against degenerate material, not a proof
/// of randomness.
pub fn assess_seed(seed: &[u8]) -> SeedQuality {
    if seed.is_empty() {
        return SeedQuality {
            shannon_entropy: 0.0,
            byte_diversity: 0.0,
            passes_basic_checks: false,
        };
    }

    let mut counts = [0usize; 256];
    for &b in seed {
        counts[b as usize] += 1;
    }

    let total = seed.len() as f64;
    let shannon_entropy = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>();
    let distinct = counts.iter().filter(|&&c| c > 0).count();
    let byte_diversity = distinct as f64 / 256.0;

    // Longer material can be held to a higher bar.
    let (min_entropy, min_diversity) = match seed.len() {
        0..=31 => (3.0, 0.1),
        32..=63 => (4.0, 0.1),
        _ => (5.0, 0.15),
    };

    SeedQuality {
        shannon_entropy,
        byte_diversity,
        passes_basic_checks: shannon_entropy >= min_entropy && byte_diversity >= min_diversity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn first_block() -> Output {
        Output::from_hex("3c732e0d04dac163a5cc2b15c7caf42c").unwrap()
    }

    #[test]
    fn test_kyber768_keygen_vector() {
        let seed = derive_seed(&first_block(), PqcAlgorithm::Kyber768, b"KEYGEN");
        assert_eq!(
            hex::encode(seed),
            "cfe5394b25c2d69cf0288fd2eb4d67c2de0a12cabfe7c08d958ea6a89233b2e0"
        );
    }

    #[test]
    fn test_sphincs_seeds_extend_past_one_digest() {
        let seed = derive_seed(&first_block(), PqcAlgorithm::SphincsPlus128f, b"");
        assert_eq!(
            hex::encode(&seed),
            "7232e4e6c939b74866ce38b41abee9b2db68831825ed2153c3211f1973a556e1\
             556d89e80295503ec55009766f23d593"
        );

        let seed = derive_seed(&first_block(), PqcAlgorithm::SphincsPlus256f, b"");
        assert_eq!(
            hex::encode(&seed),
            "7cabc7738ba633df380c136bb873d543cc094c34df066daca2b7546c9dbce835\
             3b75178be9f97f0e97a6550f091dc819f719bf14ce546524befe6920aa699209"
        );
    }

    #[test]
    fn test_generate_hybrid_key_uses_first_block() {
        let key = generate_hybrid_key(PqcAlgorithm::Kyber768, b"KEYGEN").unwrap();
        assert_eq!(key.block, first_block());
        assert_eq!(
            key.seed_hex(),
            "cfe5394b25c2d69cf0288fd2eb4d67c2de0a12cabfe7c08d958ea6a89233b2e0"
        );
    }

    #[test]
    fn test_stream_appends_index_to_context() {
        let mut stream =
            HybridKeyStream::reference(PqcAlgorithm::Dilithium3, b"".to_vec()).unwrap();
        let first = stream.next().unwrap();
        assert_eq!(
            first.seed_hex(),
            "cc81ea1198c86e561bff2681bf53adc10f9cddfc60a9e30b4328c29c72d7e479"
        );

        let second = stream.next().unwrap();
        assert_eq!(second.seed, derive_seed(&second.block, PqcAlgorithm::Dilithium3, b"1"));
        assert_eq!(stream.index(), 2);
    }

    #[test]
    fn test_stream_keys_are_distinct() {
        let keys: Vec<HybridKey> = HybridKeyStream::reference(PqcAlgorithm::Kyber512, "SIGN")
            .unwrap()
            .take(5)
            .collect();
        for (i, a) in keys.iter().enumerate() {
            assert_eq!(a.seed.len(), 32);
            for b in &keys[i + 1..] {
                assert_ne!(a.seed, b.seed);
            }
        }
    }

    #[test]
    fn test_assess_seed() {
        let empty = assess_seed(&[]);
        assert!(!empty.passes_basic_checks);

        let flat = assess_seed(&[0u8; 32]);
        assert_eq!(flat.shannon_entropy, 0.0);
        assert!(!flat.passes_basic_checks);

        let all: Vec<u8> = (0..=255).collect();
        let full = assess_seed(&all);
        assert!((full.shannon_entropy - 8.0).abs() < 1e-9);
        assert_eq!(full.byte_diversity, 1.0);
        assert!(full.passes_basic_checks);
    }

    #[test]
    fn test_derived_seeds_pass_quality_checks() {
        for key in HybridKeyStream::reference(PqcAlgorithm::SphincsPlus256f, "")
            .unwrap()
            .take(10)
        {
            assert!(assess_seed(&key.seed).passes_basic_checks);
        }
    }

    proptest! {
        #[test]
        fn test_derive_seed_length_and_prefix(
            block in any::<[u8; 16]>(),
            context in prop::collection::vec(any::<u8>(), 0..32),
        ) {
            let block = Output::from_bytes(block);
            for alg in PqcAlgorithm::ALL {
                let seed = derive_seed(&block, alg, &context);
                prop_assert_eq!(seed.len(), alg.seed_len());
            }
            // same length, different name
            let a = derive_seed(&block, PqcAlgorithm::SphincsPlus192f, &context);
            let b = derive_seed(&block, PqcAlgorithm::SphincsPlus256f, &context);
            prop_assert_ne!(a, b);
        }
    }
}
