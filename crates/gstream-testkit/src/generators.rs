//! Proptest generators for property-based testing.

use proptest::prelude::*;

use gstream_core::seed::{E, GOLDEN_RATIO, PI, SQRT2};
use gstream_core::{Counter, Output, Seed, SeedRegistry, Sha256Hash, State, StreamGenerator};
use gstream_pqc::PqcAlgorithm;

/// Generate random 32-byte seed material.
pub fn seed_bytes() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// Generate a random ratchet state.
pub fn state() -> impl Strategy<Value = State> {
    any::<[u8; 32]>().prop_map(State::from_bytes)
}

/// Generate a random output block.
pub fn output() -> impl Strategy<Value = Output> {
    any::<[u8; 16]>().prop_map(Output::from_bytes)
}

/// Generate a counter, including values far beyond `u64`.
pub fn counter() -> impl Strategy<Value = Counter> {
    prop_oneof![
        any::<u64>().prop_map(Counter::from_u64),
        "[1-9][0-9]{19,40}".prop_filter_map("decimal counter", |s| Counter::from_decimal(&s)),
    ]
}

/// Generate one of the builtin seed names.
pub fn seed_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(GOLDEN_RATIO), Just(PI), Just(E), Just(SQRT2)]
}

/// Generate a post-quantum algorithm.
pub fn pqc_algorithm() -> impl Strategy<Value = PqcAlgorithm> {
    prop::sample::select(PqcAlgorithm::ALL.to_vec())
}

/// Generate a derivation context.
pub fn context(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Where a generator's seed comes from.
#[derive(Debug, Clone)]
pub enum SeedChoice {
    /// A builtin registry entry.
    Builtin(&'static str),
    /// Arbitrary bytes, registered with their own checksum.
    Custom([u8; 32]),
}

/// Parameters for building a generator.
#[derive(Debug, Clone)]
pub struct GeneratorParams {
    pub seed: SeedChoice,
    /// Blocks to skip before use.
    pub skip: u64,
}

impl Arbitrary for GeneratorParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop_oneof![
                seed_name().prop_map(SeedChoice::Builtin),
                seed_bytes().prop_map(SeedChoice::Custom),
            ],
            0u64..=32u64, // skip
        )
            .prop_map(|(seed, skip)| GeneratorParams { seed, skip })
            .boxed()
    }
}

/// Build a generator from parameters.
///
/// Custom seeds are checked against their own checksum, so construction
/// always succeeds.
pub fn generator_from_params(params: &GeneratorParams) -> StreamGenerator {
    let registry = SeedRegistry::builtin();
    let mut generator = match params.seed {
        SeedChoice::Builtin(name) => StreamGenerator::from_registry(&registry, name)
            .expect("builtin seeds pass their own checksum"),
        SeedChoice::Custom(bytes) => {
            let checksum = Sha256Hash::hash(&bytes);
            StreamGenerator::with_checksum(&bytes, checksum)
                .expect("seed matches its own checksum")
        }
    };
    generator.skip_blocks(params.skip);
    generator
}

/// The seed a set of parameters resolves to.
pub fn seed_from_params(params: &GeneratorParams) -> Seed {
    match params.seed {
        SeedChoice::Builtin(name) => SeedRegistry::builtin()
            .get(name)
            .map(|entry| entry.seed.clone())
            .expect("builtin name"),
        SeedChoice::Custom(bytes) => Seed::from(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gstream_core::{collect_256_bits, ratchet, IntegrityError};
    use gstream::verify_convergence;

    proptest! {
        #[test]
        fn test_generator_deterministic(params: GeneratorParams) {
            let mut a = generator_from_params(&params);
            let mut b = generator_from_params(&params);
            prop_assert!(verify_convergence(&mut a, &mut b, 8).is_ok());
        }

        #[test]
        fn test_skip_matches_take(params: GeneratorParams) {
            let mut fresh = params.clone();
            fresh.skip = 0;
            let all: Vec<Output> = generator_from_params(&fresh)
                .take(params.skip as usize + 1)
                .collect();
            let mut skipped = generator_from_params(&params);
            prop_assert_eq!(skipped.next_block(), all[params.skip as usize]);
        }

        #[test]
        fn test_tampered_seed_rejected(params in any::<GeneratorParams>(), flip in 0usize..256) {
            let seed = seed_from_params(&params);
            let checksum = seed.checksum();
            let mut bytes = *seed.as_bytes();
            bytes[flip / 8] ^= 0x80 >> (flip % 8);

            let is_mismatch = matches!(
                StreamGenerator::with_checksum(&bytes, checksum),
                Err(IntegrityError::ChecksumMismatch { .. })
            );
            prop_assert!(is_mismatch);
        }

        #[test]
        fn test_ratchet_never_fixed_point(state in state(), counter in counter()) {
            prop_assert_ne!(ratchet(&state, &counter), state);
        }

        #[test]
        fn test_selection_always_advances(state in state(), counter in counter()) {
            let (_, next_state, next_counter) = collect_256_bits(state, counter.clone());
            prop_assert_ne!(next_state, state);
            prop_assert!(next_counter > counter);
        }

        #[test]
        fn test_derived_seed_sized_for_algorithm(
            alg in pqc_algorithm(),
            block in output(),
            ctx in context(32),
        ) {
            let seed = gstream_pqc::derive_seed(&block, alg, &ctx);
            prop_assert_eq!(seed.len(), alg.seed_len());
            prop_assert_eq!(seed, gstream_pqc::derive_seed(&block, alg, &ctx));
        }
    }
}
