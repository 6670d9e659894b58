//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use gstream::{GeneratorConfig, SeedSource};
use gstream_core::{
    Output, Seed, SeedEntry, SeedRegistry, Sha256Hash, StreamGenerator, GOLDEN_RATIO,
};

/// A test fixture with a seed registry and a generator over one of its seeds.
pub struct TestFixture {
    pub registry: SeedRegistry,
    pub generator: StreamGenerator,
}

impl TestFixture {
    /// Create a fixture over the reference seed.
    pub fn new() -> Self {
        Self::named(GOLDEN_RATIO)
    }

    /// Create a fixture over a builtin seed.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a builtin seed.
    pub fn named(name: &str) -> Self {
        let registry = SeedRegistry::builtin();
        let generator = StreamGenerator::from_registry(&registry, name)
            .unwrap_or_else(|e| panic!("builtin seed {}: {}", name, e));
        Self {
            registry,
            generator,
        }
    }

    /// Create a fixture over arbitrary seed bytes, registered as `"custom"`
    /// with their own checksum.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        let mut registry = SeedRegistry::builtin();
        let seed = Seed::from(seed);
        let checksum = seed.checksum();
        registry.insert(SeedEntry::new("custom", seed, checksum));
        let generator = StreamGenerator::from_registry(&registry, "custom")
            .expect("seed matches its own checksum");
        Self {
            registry,
            generator,
        }
    }

    /// Checksum of the fixture's seed.
    pub fn checksum(&self) -> &Sha256Hash {
        self.generator.checksum()
    }

    /// Take the next `n` blocks.
    pub fn next_blocks(&mut self, n: usize) -> Vec<Output> {
        (&mut self.generator).take(n).collect()
    }

    /// A config that rebuilds this fixture's stream from the start.
    pub fn config(&self) -> GeneratorConfig {
        let name = self.generator.label().unwrap_or(GOLDEN_RATIO);
        let entry = self.registry.get(name).expect("fixture seed is registered");
        GeneratorConfig {
            seed: SeedSource::Hex {
                seed: entry.seed.to_hex(),
                checksum: entry.checksum.to_hex(),
            },
            label: None,
            skip: 0,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple generators over the reference seed, one per party.
///
/// Each party is labelled `party-<i>` and runs its own instance.
pub fn multi_party_fixtures(count: usize) -> Vec<StreamGenerator> {
    (0..count)
        .map(|i| TestFixture::new().generator.with_label(format!("party-{}", i)))
        .collect()
}

/// Create one fixture per distinct custom seed.
pub fn distinct_seed_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gstream::find_divergent_party;

    #[test]
    fn test_fixture_reference_stream() {
        let mut fixture = TestFixture::new();
        let blocks = fixture.next_blocks(2);
        assert_eq!(blocks[0].to_hex(), "3c732e0d04dac163a5cc2b15c7caf42c");
        assert_eq!(blocks[1].to_hex(), "edfe2173c2dcfec9a8897a79aabb5eea");
        assert_eq!(fixture.generator.blocks_generated(), 2);
    }

    #[test]
    fn test_config_rebuilds_stream() {
        let mut fixture = TestFixture::with_seed([0x42; 32]);
        let rebuilt = fixture.config().build().unwrap();
        let expected: Vec<Output> = rebuilt.take(5).collect();
        assert_eq!(fixture.next_blocks(5), expected);
    }

    #[test]
    fn test_multi_party() {
        let mut parties = multi_party_fixtures(3);
        assert_eq!(parties[1].label(), Some("party-1"));
        assert_eq!(find_divergent_party(&mut parties, 20), None);
    }

    #[test]
    fn test_distinct_seeds_diverge() {
        let mut fixtures = distinct_seed_fixtures(3);
        let firsts: Vec<Output> = fixtures
            .iter_mut()
            .map(|f| f.generator.next_block())
            .collect();
        assert_ne!(firsts[0], firsts[1]);
        assert_ne!(firsts[1], firsts[2]);
        assert_ne!(firsts[0], firsts[2]);
        assert_ne!(fixtures[0].checksum(), fixtures[1].checksum());
    }
}
