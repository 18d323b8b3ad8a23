//! Multicodec encoding/decoding
//!
//! Multicodec is a self-describing format that prefixes data with a varint
//! indicating the type of data that follows.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::EncodingError;
use crate::varint::{decode_varint, encode_varint};

// ****************************************************************************
// Codec Magic Numbers (public keys)
// See: https://github.com/multiformats/multicodec/blob/master/table.csv
// ****************************************************************************
pub const ED25519_PUB: u64 = 0xed;
pub const X25519_PUB: u64 = 0xec;
pub const SECP256K1_PUB: u64 = 0xe7;
pub const BLS12381_G1_PUB: u64 = 0xea;
pub const BLS12381_G2_PUB: u64 = 0xeb;
pub const P256_PUB: u64 = 0x1200;
pub const P384_PUB: u64 = 0x1201;

/// A multicodec-encoded byte slice (borrowed), split into codec and data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiEncoded<'a> {
    codec: u64,
    prefix_len: usize,
    bytes: &'a [u8],
}

impl<'a> MultiEncoded<'a> {
    /// Parse the leading codec varint of `bytes`
    pub fn new(bytes: &'a [u8]) -> Result<Self, EncodingError> {
        let (codec, prefix_len) = decode_varint(bytes)?;
        Ok(Self {
            codec,
            prefix_len,
            bytes,
        })
    }

    /// Size of the byte array (including codec prefix)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Separates the codec and the data
    pub fn parts(&self) -> (u64, &'a [u8]) {
        (self.codec, self.data())
    }

    /// Raw codec value (u64)
    pub fn codec(&self) -> u64 {
        self.codec
    }

    /// Data bytes (without codec prefix)
    pub fn data(&self) -> &'a [u8] {
        &self.bytes[self.prefix_len..]
    }
}

/// A multicodec-encoded byte buffer (owned)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiEncodedBuf {
    codec: u64,
    prefix_len: usize,
    bytes: Vec<u8>,
}

impl MultiEncodedBuf {
    /// Parse an existing multicodec-encoded buffer
    pub fn new(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        let (codec, prefix_len) = decode_varint(&bytes)?;
        Ok(Self {
            codec,
            prefix_len,
            bytes,
        })
    }

    /// Encode bytes with a raw codec value
    pub fn encode(codec: u64, bytes: &[u8]) -> Self {
        let encoded_codec = encode_varint(codec);
        let mut result = Vec::with_capacity(encoded_codec.len() + bytes.len());
        result.extend_from_slice(&encoded_codec);
        result.extend_from_slice(bytes);
        Self {
            codec,
            prefix_len: encoded_codec.len(),
            bytes: result,
        }
    }

    /// Returns a reference to the raw bytes, including the codec prefix
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrow as a parsed MultiEncoded slice
    pub fn as_multi_encoded(&self) -> MultiEncoded<'_> {
        MultiEncoded {
            codec: self.codec,
            prefix_len: self.prefix_len,
            bytes: &self.bytes,
        }
    }
}
