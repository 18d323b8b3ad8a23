use affinidi_encoding::EncodingError;
use thiserror::Error;

use crate::KeyType;

/// Error states for did:key encoding and decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No key material supplied to encode
    #[error("Key bytes cannot be empty")]
    EmptyKeyBytes,

    /// Empty string supplied as a DID
    #[error("Empty DID")]
    EmptyIdentifier,

    /// DID doesn't start with `did:key:`
    #[error("Invalid DID key prefix, expected 'did:key:'")]
    InvalidPrefix,

    /// Nothing follows the `did:key:` prefix
    #[error("Empty multibase string")]
    EmptyMultibaseString,

    /// Multibase decoded to zero bytes
    #[error("Empty data after multibase decoding")]
    EmptyData,

    /// The multicodec varint consumed the whole payload
    #[error("No key data after multicodec varint")]
    NoKeyDataAfterVarint,

    /// Multicodec value isn't a supported public key type
    #[error("Unsupported key type: multicodec 0x{0:x}")]
    UnsupportedKeyType(u64),

    /// Key type name isn't recognised
    #[error("Unknown key type name: {0}")]
    UnknownKeyTypeName(String),

    /// Public key length doesn't match what the key type requires
    #[error("Invalid key size for {key_type}: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        key_type: KeyType,
        expected: usize,
        actual: usize,
    },

    /// Multibase, base58 or varint layer rejected the input
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

/// Broad class of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied empty or mis-prefixed input
    Input,
    /// Text or byte layout is malformed
    Format,
    /// Well-formed input naming an unsupported type or wrong key size
    Validation,
}

/// Pipeline stage at which a failure was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    KeyBytes,
    Prefix,
    Multibase,
    Multicodec,
    KeyType,
    KeySize,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::EmptyKeyBytes
            | Error::EmptyIdentifier
            | Error::InvalidPrefix
            | Error::EmptyMultibaseString => ErrorCategory::Input,
            Error::EmptyData | Error::NoKeyDataAfterVarint | Error::Encoding(_) => {
                ErrorCategory::Format
            }
            Error::UnsupportedKeyType(_)
            | Error::UnknownKeyTypeName(_)
            | Error::InvalidKeySize { .. } => ErrorCategory::Validation,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Error::EmptyKeyBytes => Stage::KeyBytes,
            Error::EmptyIdentifier | Error::InvalidPrefix => Stage::Prefix,
            Error::EmptyMultibaseString => Stage::Multibase,
            Error::Encoding(e) => match e {
                EncodingError::UnsupportedMultibaseScheme(_)
                | EncodingError::InvalidBase58Character { .. } => Stage::Multibase,
                EncodingError::MalformedVarint | EncodingError::VarintOverflow => {
                    Stage::Multicodec
                }
            },
            Error::EmptyData | Error::NoKeyDataAfterVarint => Stage::Multicodec,
            Error::UnsupportedKeyType(_) | Error::UnknownKeyTypeName(_) => Stage::KeyType,
            Error::InvalidKeySize { .. } => Stage::KeySize,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
