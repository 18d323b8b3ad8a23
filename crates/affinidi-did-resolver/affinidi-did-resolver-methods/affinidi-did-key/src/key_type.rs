//! Supported did:key public key types
//!
//! Each key type is bound to a multicodec value and a fixed raw key length.
//! Both are fixed at compile time.

use std::{fmt, str::FromStr};

use affinidi_encoding::{
    BLS12381_G1_PUB, BLS12381_G2_PUB, ED25519_PUB, P256_PUB, P384_PUB, SECP256K1_PUB,
    X25519_PUB,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Public key types that can be carried in a did:key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyType {
    Ed25519,
    X25519,
    #[cfg_attr(feature = "serde", serde(rename = "secp256k1"))]
    Secp256k1,
    #[cfg_attr(feature = "serde", serde(rename = "BLS12381G1"))]
    Bls12381G1,
    #[cfg_attr(feature = "serde", serde(rename = "BLS12381G2"))]
    Bls12381G2,
    #[cfg_attr(feature = "serde", serde(rename = "P-256"))]
    P256,
    #[cfg_attr(feature = "serde", serde(rename = "P-384"))]
    P384,
}

impl KeyType {
    /// Every supported key type
    pub const ALL: [KeyType; 7] = [
        KeyType::Ed25519,
        KeyType::X25519,
        KeyType::Secp256k1,
        KeyType::Bls12381G1,
        KeyType::Bls12381G2,
        KeyType::P256,
        KeyType::P384,
    ];

    /// Multicodec value written in front of the key bytes
    pub const fn codec(self) -> u64 {
        match self {
            KeyType::Ed25519 => ED25519_PUB,
            KeyType::X25519 => X25519_PUB,
            KeyType::Secp256k1 => SECP256K1_PUB,
            KeyType::Bls12381G1 => BLS12381_G1_PUB,
            KeyType::Bls12381G2 => BLS12381_G2_PUB,
            KeyType::P256 => P256_PUB,
            KeyType::P384 => P384_PUB,
        }
    }

    /// Key type for a multicodec value
    pub fn from_codec(codec: u64) -> Result<Self> {
        match codec {
            ED25519_PUB => Ok(KeyType::Ed25519),
            X25519_PUB => Ok(KeyType::X25519),
            SECP256K1_PUB => Ok(KeyType::Secp256k1),
            BLS12381_G1_PUB => Ok(KeyType::Bls12381G1),
            BLS12381_G2_PUB => Ok(KeyType::Bls12381G2),
            P256_PUB => Ok(KeyType::P256),
            P384_PUB => Ok(KeyType::P384),
            other => Err(Error::UnsupportedKeyType(other)),
        }
    }

    /// Raw public key length in bytes
    pub const fn expected_key_length(self) -> usize {
        match self {
            KeyType::Ed25519 | KeyType::X25519 => 32,
            KeyType::Secp256k1 => 33, // compressed
            KeyType::Bls12381G1 => 48,
            KeyType::Bls12381G2 => 96,
            KeyType::P256 => 33, // compressed
            KeyType::P384 => 49, // compressed
        }
    }

    /// Checks `key_bytes` has exactly the length this key type requires
    pub fn validate_size(self, key_bytes: &[u8]) -> Result<()> {
        let expected = self.expected_key_length();
        if key_bytes.len() != expected {
            return Err(Error::InvalidKeySize {
                key_type: self,
                expected,
                actual: key_bytes.len(),
            });
        }
        Ok(())
    }

    /// Canonical name, as used by `Display` and `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            KeyType::Ed25519 => "Ed25519",
            KeyType::X25519 => "X25519",
            KeyType::Secp256k1 => "secp256k1",
            KeyType::Bls12381G1 => "BLS12381G1",
            KeyType::Bls12381G2 => "BLS12381G2",
            KeyType::P256 => "P-256",
            KeyType::P384 => "P-384",
        }
    }
}

impl TryFrom<u64> for KeyType {
    type Error = Error;

    fn try_from(codec: u64) -> Result<Self> {
        KeyType::from_codec(codec)
    }
}

impl TryFrom<&str> for KeyType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        KeyType::ALL
            .into_iter()
            .find(|key_type| key_type.name() == value)
            .ok_or_else(|| Error::UnknownKeyTypeName(value.to_string()))
    }
}

impl FromStr for KeyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        KeyType::try_from(s)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
