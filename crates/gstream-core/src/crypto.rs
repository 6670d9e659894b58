//! SHA-256 hashing with strong types.
//!
//! SHA-256 is part of the protocol's observable contract: both the seed
//! checksum and every ratchet step use it, so it is not pluggable.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::IntegrityError;

/// A 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha256Hash(pub [u8; 32]);

impl Sha256Hash {
    /// Compute the SHA-256 hash of data.
    pub fn hash(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Compute the SHA-256 hash of two concatenated parts.
    pub fn hash_concat(a: &[u8], b: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(a);
        hasher.update(b);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, IntegrityError> {
        let bytes = hex::decode(s.trim())?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| IntegrityError::InvalidHex(format!("digest must be 32 bytes, got {}", bytes.len())))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA256({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Sha256Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            Sha256Hash::hash(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            Sha256Hash::hash(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_concat_matches_single_buffer() {
        let joined = Sha256Hash::hash(b"hello world");
        let split = Sha256Hash::hash_concat(b"hello ", b"world");
        assert_eq!(joined, split);
    }

    #[test]
    fn test_from_hex_rejects_short_digest() {
        assert!(matches!(
            Sha256Hash::from_hex("abcd"),
            Err(IntegrityError::InvalidHex(_))
        ));
        assert!(matches!(
            Sha256Hash::from_hex("zz"),
            Err(IntegrityError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_debug_is_truncated() {
        let h = Sha256Hash::from_bytes([0xab; 32]);
        assert_eq!(format!("{:?}", h), "SHA256(abababab...)");
    }
}
