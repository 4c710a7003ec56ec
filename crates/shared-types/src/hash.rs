//! # 256-bit Hash
//!
//! Block hashes, transaction ids and Merkle roots are stored in the byte
//! order the hash function produced them (little-endian when read as an
//! integer) and displayed reversed, most significant byte first.

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::HexError;

/// A 32-byte hash in internal byte order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// The all-zero hash (previous-block hash of every genesis block).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap raw bytes already in internal order.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes in internal order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the raw bytes in internal order.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a display-order hex literal.
    ///
    /// Accepts an optional `0x` prefix and fewer than 64 digits, in which
    /// case the value is left-padded with zeros: `"0x001"` is the integer 1.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(HexError::Empty);
        }
        if digits.len() > 64 {
            return Err(HexError::TooLong { len: digits.len() });
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }

    /// Display-order hex without prefix.
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Interpret the hash as a 256-bit little-endian integer.
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_MERKLE: &str =
        "59478efc3b9e769017a94de77b28d390f43d29f46b6f9e946f7f1ec74967cf6c";

    #[test]
    fn test_hex_display_is_reversed_internal_order() {
        let hash = Hash256::from_hex(GENESIS_MERKLE).unwrap();
        assert_eq!(hash.as_bytes()[31], 0x59);
        assert_eq!(hash.as_bytes()[0], 0x6c);
        assert_eq!(hash.to_string(), GENESIS_MERKLE);
    }

    #[test]
    fn test_short_literal_is_left_padded() {
        let hash = Hash256::from_hex("0x001").unwrap();
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(hash.to_bytes(), expected);
        assert_eq!(hash.to_u256(), U256::from(1u64));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(Hash256::from_hex("0x"), Err(HexError::Empty));
        assert_eq!(
            Hash256::from_hex(&"f".repeat(65)),
            Err(HexError::TooLong { len: 65 })
        );
        assert!(matches!(
            Hash256::from_hex("0xzz"),
            Err(HexError::Invalid(_))
        ));
    }

    #[test]
    fn test_zero() {
        assert!(Hash256::ZERO.is_zero());
        assert!(Hash256::default().is_zero());
        assert!(!Hash256::from_hex("0x1").unwrap().is_zero());
    }

    #[test]
    fn test_serde_uses_display_hex() {
        let hash = Hash256::from_hex(GENESIS_MERKLE).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{GENESIS_MERKLE}\""));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
