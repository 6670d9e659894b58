//! Seeds, the checksum gate, and the registry of known seeds.
//!
//! A seed is an immutable 32-byte buffer bound to the SHA-256 digest it is
//! expected to hash to. The gate is an integrity self-check, not a secret
//! comparison, so the digest comparison is not constant-time.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::crypto::Sha256Hash;
use crate::error::{IntegrityError, LoadError};

/// Fixed seed length in bytes.
pub const SEED_LEN: usize = 32;

/// Registry name of the reference seed.
pub const GOLDEN_RATIO: &str = "golden-ratio";

/// Registry name of the pi seed.
pub const PI: &str = "pi";

/// Registry name of Euler's number seed.
pub const E: &str = "e";

/// Registry name of the square-root-of-two seed.
pub const SQRT2: &str = "sqrt2";

/// Lays out a constant the way the reference seed does: eight zero bytes,
/// then the little-endian IEEE-754 double three times.
const fn constant_seed(bits: u64) -> [u8; SEED_LEN] {
    let le = bits.to_le_bytes();
    let mut seed = [0u8; SEED_LEN];
    let mut i = 0;
    while i < 24 {
        seed[8 + i] = le[i % 8];
        i += 1;
    }
    seed
}

/// The reference seed, built from the golden ratio.
pub const GOLDEN_RATIO_SEED: [u8; SEED_LEN] = constant_seed(0x3FF9_E377_9B97_F4A8);

/// SHA-256 of [`GOLDEN_RATIO_SEED`].
pub const GOLDEN_RATIO_CHECKSUM: [u8; 32] = [
    0x09, 0x64, 0x12, 0xca, 0x04, 0x82, 0xab, 0x0f, 0x51, 0x9b, 0xc0, 0xe4, 0xde, 0xd6, 0x67,
    0x47, 0x5c, 0x45, 0x49, 0x50, 0x47, 0x65, 0x3a, 0x21, 0xaa, 0x11, 0xe2, 0xc7, 0xc5, 0x78,
    0xfa, 0x6f,
];

/// The pi seed, in the reference layout.
pub const PI_SEED: [u8; SEED_LEN] = constant_seed(0x4009_21FB_5444_2D18);

/// SHA-256 of [`PI_SEED`].
pub const PI_CHECKSUM: [u8; 32] = [
    0x3d, 0xac, 0x41, 0x8c, 0x56, 0x27, 0x9e, 0x7f, 0x6e, 0xdf, 0xa3, 0x34, 0xa6, 0x09, 0x1d,
    0x4a, 0x2d, 0x12, 0x69, 0xb7, 0xfb, 0x56, 0x40, 0x33, 0xde, 0x12, 0xaf, 0x73, 0x2d, 0xe6,
    0x28, 0x69,
];

/// Euler's number seed, in the reference layout.
pub const E_SEED: [u8; SEED_LEN] = constant_seed(0x4005_BF0A_8B14_5769);

/// SHA-256 of [`E_SEED`].
pub const E_CHECKSUM: [u8; 32] = [
    0x5f, 0x82, 0x9e, 0x81, 0xbe, 0x2a, 0xca, 0x03, 0xad, 0x88, 0x18, 0xeb, 0x95, 0x74, 0xf6,
    0x99, 0xd1, 0xe6, 0xf0, 0x44, 0xca, 0x1d, 0x95, 0xb5, 0x28, 0x2f, 0xf4, 0x37, 0x78, 0xce,
    0x5d, 0xd1,
];

/// The square-root-of-two seed, in the reference layout.
pub const SQRT2_SEED: [u8; SEED_LEN] = constant_seed(0x3FF6_A09E_667F_3BCD);

/// SHA-256 of [`SQRT2_SEED`].
pub const SQRT2_CHECKSUM: [u8; 32] = [
    0x9e, 0x58, 0x6d, 0xcc, 0xe4, 0xad, 0xf4, 0x5d, 0x89, 0x9b, 0xec, 0x82, 0xe9, 0x99, 0xa0,
    0xb9, 0xb0, 0x48, 0xb7, 0x7f, 0xaf, 0x6a, 0x03, 0x21, 0x6f, 0x33, 0x52, 0x4f, 0x83, 0xb1,
    0x30, 0xc7,
];

/// An immutable 32-byte seed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Create from a byte slice, rejecting anything that is not [`SEED_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, IntegrityError> {
        let arr: [u8; SEED_LEN] =
            bytes
                .try_into()
                .map_err(|_| IntegrityError::InvalidSeedLength {
                    expected: SEED_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, IntegrityError> {
        let bytes = hex::decode(s.trim())?;
        Self::from_slice(&bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// SHA-256 of the seed bytes.
    pub fn checksum(&self) -> Sha256Hash {
        Sha256Hash::hash(&self.0)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}...)", &self.to_hex()[..16])
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

/// A seed that has passed the checksum gate.
///
/// The only way to obtain one is through [`SeedStore::new`] or one of the
/// constructors built on it, so holding a `SeedStore` is proof of validation.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedStore {
    seed: Seed,
    checksum: Sha256Hash,
}

impl SeedStore {
    /// Check a seed against its expected checksum without keeping it.
    pub fn validate(seed: &[u8], expected: &Sha256Hash) -> Result<(), IntegrityError> {
        if seed.len() != SEED_LEN {
            return Err(IntegrityError::InvalidSeedLength {
                expected: SEED_LEN,
                actual: seed.len(),
            });
        }

        let actual = Sha256Hash::hash(seed);
        if actual != *expected {
            tracing::warn!(%expected, %actual, "seed failed checksum gate");
            return Err(IntegrityError::ChecksumMismatch {
                expected: expected.to_hex(),
                actual: actual.to_hex(),
            });
        }

        Ok(())
    }

    /// Validate and take ownership of a seed.
    pub fn new(seed: &[u8], expected: Sha256Hash) -> Result<Self, IntegrityError> {
        Self::validate(seed, &expected)?;
        Ok(Self {
            seed: Seed::from_slice(seed)?,
            checksum: expected,
        })
    }

    /// Validate a hex-encoded seed against a hex-encoded checksum.
    pub fn from_hex(seed_hex: &str, checksum_hex: &str) -> Result<Self, IntegrityError> {
        let seed = hex::decode(seed_hex.trim())?;
        let checksum = Sha256Hash::from_hex(checksum_hex)?;
        Self::new(&seed, checksum)
    }

    /// Validate a registry entry.
    pub fn from_entry(entry: &SeedEntry) -> Result<Self, IntegrityError> {
        Self::new(entry.seed.as_bytes(), entry.checksum)
    }

    /// The validated seed.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The checksum the seed was validated against.
    pub fn checksum(&self) -> &Sha256Hash {
        &self.checksum
    }
}

impl fmt::Debug for SeedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedStore")
            .field("seed", &self.seed)
            .field("checksum", &self.checksum)
            .finish()
    }
}

/// A named seed together with its expected checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub name: String,
    pub seed: Seed,
    pub checksum: Sha256Hash,
}

impl SeedEntry {
    /// Create a new entry. The pair is not checked until it is used.
    pub fn new(name: impl Into<String>, seed: Seed, checksum: Sha256Hash) -> Self {
        Self {
            name: name.into(),
            seed,
            checksum,
        }
    }
}

/// A name-keyed table of seeds and the checksums they are bound to.
///
/// Registries are plain values handed to constructors; there is no global
/// mutable table.
#[derive(Debug, Clone, Default)]
pub struct SeedRegistry {
    entries: BTreeMap<String, SeedEntry>,
}

impl SeedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four mathematical-constant seeds shipped with the protocol.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, seed, checksum) in [
            (GOLDEN_RATIO, GOLDEN_RATIO_SEED, GOLDEN_RATIO_CHECKSUM),
            (PI, PI_SEED, PI_CHECKSUM),
            (E, E_SEED, E_CHECKSUM),
            (SQRT2, SQRT2_SEED, SQRT2_CHECKSUM),
        ] {
            registry.insert(SeedEntry::new(
                name,
                Seed::from(seed),
                Sha256Hash::from_bytes(checksum),
            ));
        }
        registry
    }

    /// Add or replace an entry, returning the previous one under that name.
    pub fn insert(&mut self, entry: SeedEntry) -> Option<SeedEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Result<&SeedEntry, IntegrityError> {
        self.entries
            .get(name)
            .ok_or_else(|| IntegrityError::UnknownSeed(name.to_string()))
    }

    /// Find the entry holding exactly these seed bytes.
    pub fn find_by_seed(&self, seed: &[u8]) -> Option<&SeedEntry> {
        self.entries
            .values()
            .find(|entry| entry.seed.as_bytes().as_slice() == seed)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &SeedEntry> {
        self.entries.values()
    }

    /// Number of registered seeds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no seeds.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a seed from a file and run it through the checksum gate.
///
/// The file holds either the raw seed bytes or the seed as hex text;
/// surrounding whitespace in the text form is ignored. Content made only of
/// hex digits and whitespace is read as text, anything else as raw bytes.
pub fn load_seed_file(
    path: impl AsRef<Path>,
    expected: Sha256Hash,
) -> Result<SeedStore, LoadError> {
    let raw = std::fs::read(path.as_ref())?;

    let seed = if is_hex_text(&raw) {
        Seed::from_hex(&String::from_utf8_lossy(&raw))?
    } else {
        Seed::from_slice(&raw)?
    };

    Ok(SeedStore::new(seed.as_bytes(), expected)?)
}

fn is_hex_text(raw: &[u8]) -> bool {
    raw.iter()
        .all(|b| b.is_ascii_hexdigit() || b.is_ascii_whitespace())
}
