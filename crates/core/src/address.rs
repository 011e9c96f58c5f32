//! Wallet addresses.

use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// A 20-byte address.
pub type AddressBytes = [u8; 20];

/// Errors from parsing an address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address: expected 40 hex characters")]
    InvalidAddress,
}

/// A wallet address, displayed as `0x` followed by 40 hex characters.
///
/// Addresses are random placeholders; they are not derived from any key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub AddressBytes);

impl Address {
    /// The zero address (all zeros).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Create an address from raw bytes.
    pub fn from_bytes(bytes: AddressBytes) -> Self {
        Self(bytes)
    }

    /// Generate a fresh random address.
    pub fn random() -> Self {
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &AddressBytes {
        &self.0
    }

    /// Convert to a hex string (with 0x prefix).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from a hex string (with or without 0x prefix).
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| AddressError::InvalidAddress)?;
        if bytes.len() != 20 {
            return Err(AddressError::InvalidAddress);
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Address::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            Ok(Address(AddressBytes::deserialize(deserializer)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_address_format() {
        let hex = Address::random().to_hex();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 42);
        assert!(hex[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_addresses_differ() {
        assert_ne!(Address::random(), Address::random());
    }

    #[test]
    fn test_from_hex() {
        let addr = Address([0xAA; 20]);
        assert_eq!(Address::from_hex(&addr.to_hex()).unwrap(), addr);
        assert_eq!(Address::from_hex(&"aa".repeat(20)).unwrap(), addr);
        assert_eq!(Address::from_hex("0x1234"), Err(AddressError::InvalidAddress));
        assert_eq!(Address::from_hex("not hex"), Err(AddressError::InvalidAddress));
    }

    #[test]
    fn test_bincode_roundtrip() {
        let addr = Address::random();
        let bytes = bincode::serialize(&addr).unwrap();
        assert_eq!(bytes.len(), 20);
        let back: Address = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, addr);
    }
}
