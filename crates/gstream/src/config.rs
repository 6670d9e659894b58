//! Generator configuration.
//!
//! A config names a seed, an optional label and a start position. It is plain
//! data: building a generator from it still goes through the checksum gate.
//!
//! ```json
//! { "seed": { "kind": "named", "name": "pi" }, "label": "node-a", "skip": 100 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gstream_core::{
    load_seed_file, Sha256Hash, SeedRegistry, SeedStore, StreamGenerator, GOLDEN_RATIO,
};

use crate::error::Result;

/// Where the seed comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedSource {
    /// A registry entry by name.
    Named { name: String },
    /// Explicit seed and checksum, both hex.
    Hex { seed: String, checksum: String },
    /// A seed file (raw or hex) and the checksum it must hash to.
    File { path: PathBuf, checksum: String },
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Named {
            name: GOLDEN_RATIO.to_string(),
        }
    }
}

/// Configuration for building a [`StreamGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: SeedSource,
    /// Instance name for logs. Does not affect output.
    pub label: Option<String>,
    /// Blocks to discard after construction.
    pub skip: u64,
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a generator, resolving named seeds in the builtin registry.
    pub fn build(&self) -> Result<StreamGenerator> {
        self.build_with_registry(&SeedRegistry::builtin())
    }

    /// Build a generator, resolving named seeds in `registry`.
    pub fn build_with_registry(&self, registry: &SeedRegistry) -> Result<StreamGenerator> {
        let mut generator = match &self.seed {
            SeedSource::Named { name } => StreamGenerator::from_registry(registry, name)?,
            SeedSource::Hex { seed, checksum } => {
                StreamGenerator::from_store(SeedStore::from_hex(seed, checksum)?)
            }
            SeedSource::File { path, checksum } => {
                let expected = Sha256Hash::from_hex(checksum)?;
                StreamGenerator::from_store(load_seed_file(path, expected)?)
            }
        };

        if let Some(label) = &self.label {
            generator = generator.with_label(label.clone());
        }
        if self.skip > 0 {
            tracing::debug!(skip = self.skip, "fast-forwarding generator");
            generator.skip_blocks(self.skip);
        }
        Ok(generator)
    }
}
