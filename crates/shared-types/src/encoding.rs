//! # Hex Encoding
//!
//! `0x`-prefixed hex helpers plus `serde(with = ...)` adapters for fixed-width
//! and variable-width byte fields.

use crate::errors::EncodingError;

/// Encode bytes as a lowercase `0x`-prefixed hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a hex string, with or without the `0x` prefix.
pub fn parse_bytes(input: &str) -> Result<Vec<u8>, EncodingError> {
    let trimmed = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    hex::decode(trimmed).map_err(|e| EncodingError::InvalidHex(e.to_string()))
}

/// Decode a hex string into a fixed-width array.
pub fn parse_fixed<const N: usize>(input: &str) -> Result<[u8; N], EncodingError> {
    let bytes = parse_bytes(input)?;
    if bytes.len() != N {
        return Err(EncodingError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Serde adapter for `[u8; N]` fields.
pub mod hex_fixed {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        value: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_fixed::<N>(&s).map_err(de::Error::custom)
    }
}

/// Serde adapter for `Vec<u8>` fields.
pub mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_bytes(&s).map_err(de::Error::custom)
    }
}
