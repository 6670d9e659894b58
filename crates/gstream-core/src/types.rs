//! Strong type definitions for gstream.
//!
//! Fixed-size buffers are newtypes so a state can never be passed where an
//! output block is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of a generator output block in bytes.
pub const OUTPUT_LEN: usize = 16;

/// Size of the ratchet state in bytes.
pub const STATE_LEN: usize = 32;

/// A 16-byte (128-bit) output block.
///
/// Immutable once produced; ownership transfers to the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Output(pub [u8; OUTPUT_LEN]);

impl Output {
    /// Create a new Output from raw bytes.
    pub const fn from_bytes(bytes: [u8; OUTPUT_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; OUTPUT_LEN] {
        &self.0
    }

    /// Convert to a 32-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != OUTPUT_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; OUTPUT_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The all-zero block.
    pub const ZERO: Self = Self([0u8; OUTPUT_LEN]);
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output({})", self.to_hex())
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; OUTPUT_LEN]> for Output {
    fn from(bytes: [u8; OUTPUT_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Output> for [u8; OUTPUT_LEN] {
    fn from(output: Output) -> Self {
        output.0
    }
}

impl TryFrom<&[u8]> for Output {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; OUTPUT_LEN] = slice.try_into()?;
        Ok(Self(arr))
    }
}

/// The 32-byte position of a generator in its hash chain.
///
/// Replaced, never merged, on every ratchet step.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct State(pub [u8; STATE_LEN]);

impl State {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; STATE_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; STATE_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for State {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; STATE_LEN]> for State {
    fn from(bytes: [u8; STATE_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_hex_is_32_chars() {
        let out = Output::from_bytes([0x0f; OUTPUT_LEN]);
        let hex = out.to_hex();
        assert_eq!(hex.len(), 32);
        assert_eq!(hex, "0f".repeat(16));
        assert_eq!(Output::from_hex(&hex).unwrap(), out);
    }

    #[test]
    fn test_output_from_hex_rejects_wrong_length() {
        assert!(Output::from_hex("00ff").is_err());
        assert!(Output::from_hex(&"00".repeat(32)).is_err());
    }

    #[test]
    fn test_output_display() {
        let out = Output::from_hex("3c732e0d04dac163a5cc2b15c7caf42c").unwrap();
        assert_eq!(format!("{}", out), "3c732e0d04dac163a5cc2b15c7caf42c");
        assert_eq!(format!("{:?}", out), "Output(3c732e0d04dac163a5cc2b15c7caf42c)");
    }

    #[test]
    fn test_output_try_from_slice() {
        let bytes = [7u8; 20];
        assert!(Output::try_from(&bytes[..16]).is_ok());
        assert!(Output::try_from(&bytes[..]).is_err());
    }

    #[test]
    fn test_output_serializes_as_byte_array() {
        let out = Output::from_bytes([1; OUTPUT_LEN]);
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, format!("[{}]", vec!["1"; 16].join(",")));
        assert_eq!(serde_json::from_str::<Output>(&json).unwrap(), out);
    }

    #[test]
    fn test_state_debug() {
        let state = State::from_bytes([0xcd; STATE_LEN]);
        assert!(format!("{:?}", state).starts_with("State(cdcdcdcd"));
    }
}
