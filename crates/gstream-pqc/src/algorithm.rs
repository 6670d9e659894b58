//! NIST post-quantum algorithm catalogue.
//!
//! Only the parameters needed to size and domain-separate seed material are
//! recorded here. No key generation happens in this crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PqcError;

/// NIST security category (1 to 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SecurityLevel(u8);

impl SecurityLevel {
    /// At least as hard as AES-128 key search.
    pub const LEVEL_1: Self = Self(1);
    /// At least as hard as SHA-256 collision search.
    pub const LEVEL_2: Self = Self(2);
    /// At least as hard as AES-192 key search.
    pub const LEVEL_3: Self = Self(3);
    /// At least as hard as SHA-384 collision search.
    pub const LEVEL_4: Self = Self(4);
    /// At least as hard as AES-256 key search.
    pub const LEVEL_5: Self = Self(5);

    /// Create a level, rejecting values outside 1..=5.
    pub fn new(level: u8) -> Result<Self, PqcError> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(PqcError::InvalidSecurityLevel(level))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SecurityLevel {
    type Error = PqcError;

    fn try_from(level: u8) -> Result<Self, PqcError> {
        Self::new(level)
    }
}

impl From<SecurityLevel> for u8 {
    fn from(level: SecurityLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}

/// What an algorithm is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Key encapsulation mechanism.
    Kem,
    /// Digital signature scheme.
    Signature,
}

/// Supported post-quantum algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PqcAlgorithm {
    Kyber512,
    Kyber768,
    Kyber1024,
    Dilithium2,
    Dilithium3,
    Dilithium5,
    SphincsPlus128f,
    SphincsPlus192f,
    SphincsPlus256f,
}

impl PqcAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [PqcAlgorithm; 9] = [
        PqcAlgorithm::Kyber512,
        PqcAlgorithm::Kyber768,
        PqcAlgorithm::Kyber1024,
        PqcAlgorithm::Dilithium2,
        PqcAlgorithm::Dilithium3,
        PqcAlgorithm::Dilithium5,
        PqcAlgorithm::SphincsPlus128f,
        PqcAlgorithm::SphincsPlus192f,
        PqcAlgorithm::SphincsPlus256f,
    ];

    /// Canonical name. These bytes are mixed into every derived seed.
    pub const fn name(self) -> &'static str {
        match self {
            PqcAlgorithm::Kyber512 => "Kyber-512",
            PqcAlgorithm::Kyber768 => "Kyber-768",
            PqcAlgorithm::Kyber1024 => "Kyber-1024",
            PqcAlgorithm::Dilithium2 => "Dilithium2",
            PqcAlgorithm::Dilithium3 => "Dilithium3",
            PqcAlgorithm::Dilithium5 => "Dilithium5",
            PqcAlgorithm::SphincsPlus128f => "SPHINCS+-128f",
            PqcAlgorithm::SphincsPlus192f => "SPHINCS+-192f",
            PqcAlgorithm::SphincsPlus256f => "SPHINCS+-256f",
        }
    }

    pub const fn security_level(self) -> SecurityLevel {
        match self {
            PqcAlgorithm::Kyber512 | PqcAlgorithm::SphincsPlus128f => SecurityLevel::LEVEL_1,
            PqcAlgorithm::Dilithium2 => SecurityLevel::LEVEL_2,
            PqcAlgorithm::Kyber768 | PqcAlgorithm::Dilithium3 | PqcAlgorithm::SphincsPlus192f => {
                SecurityLevel::LEVEL_3
            }
            PqcAlgorithm::Kyber1024 | PqcAlgorithm::Dilithium5 | PqcAlgorithm::SphincsPlus256f => {
                SecurityLevel::LEVEL_5
            }
        }
    }

    /// Seed length in bytes the algorithm's key generation expects.
    pub const fn seed_len(self) -> usize {
        match self {
            PqcAlgorithm::SphincsPlus128f => 48,
            PqcAlgorithm::SphincsPlus192f | PqcAlgorithm::SphincsPlus256f => 64,
            _ => 32,
        }
    }

    pub const fn kind(self) -> AlgorithmKind {
        match self {
            PqcAlgorithm::Kyber512 | PqcAlgorithm::Kyber768 | PqcAlgorithm::Kyber1024 => {
                AlgorithmKind::Kem
            }
            _ => AlgorithmKind::Signature,
        }
    }
}

impl fmt::Display for PqcAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PqcAlgorithm {
    type Err = PqcError;

    fn from_str(s: &str) -> Result<Self, PqcError> {
        PqcAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PqcError::UnknownAlgorithm(s.to_string()))
    }
}
