//! Ethereum address type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ETH_ADDRESS_SIZE;

/// A 20-byte Ethereum address.
///
/// The canonical string form is `0x` followed by 40 lowercase hex digits.
/// The all-zero value is the null address, which the registry uses to mean
/// "no owner"; see [`Address::is_zero`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    bytes: [u8; ETH_ADDRESS_SIZE],
}

/// Why a string is not an address literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressParseError {
    /// Missing the `0x` prefix.
    MissingPrefix,
    /// Wrong number of hex digits after the prefix.
    InvalidLength(usize),
    /// Non-hex character.
    InvalidHex,
}

impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "address must start with 0x"),
            Self::InvalidLength(n) => write!(
                f,
                "expected {} hex digits, got {}",
                ETH_ADDRESS_SIZE * 2,
                n
            ),
            Self::InvalidHex => write!(f, "address contains non-hex characters"),
        }
    }
}

impl std::error::Error for AddressParseError {}

impl Address {
    /// The null address.
    pub const ZERO: Address = Address {
        bytes: [0u8; ETH_ADDRESS_SIZE],
    };

    /// Creates from a fixed-size array.
    pub const fn from_array(bytes: [u8; ETH_ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }

    /// Creates from a slice, returning `None` unless it is exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ETH_ADDRESS_SIZE] = bytes.try_into().ok()?;
        Some(Self { bytes })
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ETH_ADDRESS_SIZE] {
        &self.bytes
    }

    /// Parses an address literal: `0x` followed by exactly 40 hex digits.
    ///
    /// Mixed case is accepted; EIP-55 checksums are not enforced.
    pub fn parse_literal(s: &str) -> std::result::Result<Self, AddressParseError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressParseError::MissingPrefix)?;

        if digits.len() != ETH_ADDRESS_SIZE * 2 {
            return Err(AddressParseError::InvalidLength(digits.len()));
        }

        let mut bytes = [0u8; ETH_ADDRESS_SIZE];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressParseError::InvalidHex)?;
        Ok(Self { bytes })
    }

    /// Returns true if `s` is an address literal.
    pub fn is_literal(s: &str) -> bool {
        Self::parse_literal(s).is_ok()
    }

    /// Returns the canonical lowercase `0x` hex string.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    /// Returns true if this is the null address.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressParseError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::parse_literal(&s)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.to_hex_string()
    }
}

impl From<[u8; ETH_ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ETH_ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e" ; "mixed case")]
    #[test_case("0xd8da6bf26964af9d7eed9e03e53415d37aa96045" ; "lowercase")]
    #[test_case("0XD8DA6BF26964AF9D7EED9E03E53415D37AA96045" ; "uppercase prefix")]
    fn test_parse_valid_literal(input: &str) {
        assert!(Address::is_literal(input));
    }

    #[test_case("alice.eth", AddressParseError::MissingPrefix ; "ens name")]
    #[test_case("d8da6bf26964af9d7eed9e03e53415d37aa96045", AddressParseError::MissingPrefix ; "no prefix")]
    #[test_case("0xd8da6bf26964af9d7eed9e03e53415d37aa9604", AddressParseError::InvalidLength(39) ; "too short")]
    #[test_case("0x", AddressParseError::InvalidLength(0) ; "prefix only")]
    #[test_case("0xzz8a6bf26964af9d7eed9e03e53415d37aa96045", AddressParseError::InvalidHex ; "bad hex")]
    fn test_parse_invalid_literal(input: &str, expected: AddressParseError) {
        assert_eq!(Address::parse_literal(input), Err(expected));
    }

    #[test]
    fn test_canonical_string_is_lowercase() {
        let addr: Address = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e".parse().unwrap();
        assert_eq!(addr.to_string(), "0x00000000000c2e074ec69a0dfb2997ba6c7d2e1e");
        assert_eq!(addr.to_string().len(), 42);
    }

    #[test]
    fn test_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_array([1; 20]).is_zero());
        assert_eq!(
            Address::ZERO.to_string(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Address::from_slice(&[0xAB; 20]), Some(Address::from_array([0xAB; 20])));
        assert_eq!(Address::from_slice(&[0xAB; 19]), None);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let addr = Address::from_array([0x12; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x1212121212121212121212121212121212121212\"");

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"alice.eth\"").is_err());
    }
}
