//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Unsupported multibase scheme: expected 'z' (base58btc), got '{0}'")]
    UnsupportedMultibaseScheme(char),

    #[error("Invalid base58 character '{character}' at index {index}")]
    InvalidBase58Character { character: char, index: usize },

    #[error("Malformed varint: input ended before the terminating byte")]
    MalformedVarint,

    #[error("Varint overflow: value does not fit in 64 bits")]
    VarintOverflow,
}
