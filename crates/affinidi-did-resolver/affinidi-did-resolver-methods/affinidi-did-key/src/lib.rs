//! Implementation of the did:key method
//! [https://w3c-ccg.github.io/did-key-spec/]
//!
//! Converts between raw public key bytes and `did:key` identifiers:
//!
//! ```text
//! did:key:MULTIBASE(base58-btc, MULTICODEC(public-key-type, raw-public-key-bytes))
//! ```
//!
//! ```
//! use affinidi_did_key::{DIDKey, KeyType};
//!
//! let did = "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";
//! let key = DIDKey::parse(did).unwrap();
//! assert_eq!(key.key_type(), KeyType::Ed25519);
//! assert_eq!(key.to_string(), did);
//! ```
//!
//! did:key is purely generative: the identifier is the key, so there is no
//! rotation or deactivation.

use std::{fmt, str::FromStr};

use affinidi_encoding::encode_multikey;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod codec;
pub mod errors;
pub mod key_type;

pub use codec::{DID_KEY_PREFIX, decode, encode, is_valid, key_type_of};
pub use errors::{Error, ErrorCategory, Result, Stage};
pub use key_type::KeyType;

/// A validated did:key: key type plus raw public key bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DIDKey {
    key_type: KeyType,
    key: Vec<u8>,
}

impl DIDKey {
    /// Creates a DIDKey from raw public key bytes, copying them
    pub fn from_bytes(key_type: KeyType, key_bytes: &[u8]) -> Result<Self> {
        if key_bytes.is_empty() {
            return Err(Error::EmptyKeyBytes);
        }
        key_type.validate_size(key_bytes)?;

        Ok(DIDKey {
            key_type,
            key: key_bytes.to_vec(),
        })
    }

    /// Parses a did:key identifier
    pub fn parse(did: &str) -> Result<Self> {
        let (key_type, key) = decode(did)?;
        Ok(DIDKey { key_type, key })
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Raw public key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Copy of the raw public key bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.key.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.key
    }

    /// The `publicKeyMultibase` form, i.e. the DID without `did:key:`
    pub fn multikey(&self) -> String {
        encode_multikey(self.key_type.codec(), &self.key)
    }
}

impl fmt::Display for DIDKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{DID_KEY_PREFIX}{}", self.multikey())
    }
}

impl FromStr for DIDKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DIDKey::parse(s)
    }
}

impl TryFrom<&str> for DIDKey {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        DIDKey::parse(value)
    }
}

impl TryFrom<String> for DIDKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        DIDKey::parse(&value)
    }
}

impl From<DIDKey> for String {
    fn from(key: DIDKey) -> Self {
        key.to_string()
    }
}
