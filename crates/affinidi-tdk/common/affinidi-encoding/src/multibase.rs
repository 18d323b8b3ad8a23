//! Multibase encoding/decoding utilities
//!
//! Multibase is a protocol for self-describing base encodings.
//! The first character indicates the encoding used. Only base58btc (`z`) is
//! recognised here; every other scheme is rejected.
//!
//! See: <https://github.com/multiformats/multibase>

use crate::EncodingError;
use crate::base58::{decode_base58, encode_base58};
use crate::multicodec::{MultiEncoded, MultiEncodedBuf};

/// Multibase prefix for base58btc (Bitcoin alphabet)
pub const BASE58BTC_PREFIX: char = 'z';

/// Decode a base58btc multibase string (must start with 'z')
///
/// Returns the decoded bytes without the prefix.
pub fn decode_base58btc(s: &str) -> Result<Vec<u8>, EncodingError> {
    let Some(encoded) = s.strip_prefix(BASE58BTC_PREFIX) else {
        let prefix = s.chars().next().unwrap_or('\0');
        return Err(EncodingError::UnsupportedMultibaseScheme(prefix));
    };

    decode_base58(encoded)
}

/// Encode bytes as base58btc with multibase prefix 'z'
pub fn encode_base58btc(bytes: &[u8]) -> String {
    let encoded = encode_base58(bytes);
    let mut result = String::with_capacity(encoded.len() + 1);
    result.push(BASE58BTC_PREFIX);
    result.push_str(&encoded);
    result
}

/// Validate that a string is valid base58btc multibase (starts with 'z' and decodes correctly)
pub fn validate_base58btc(s: &str) -> Result<(), EncodingError> {
    decode_base58btc(s)?;
    Ok(())
}

/// Decode a multikey string and return both codec and key bytes
///
/// A multikey is the `publicKeyMultibase` form: multibase(varint(codec) || key).
pub fn decode_multikey_with_codec(key: &str) -> Result<(u64, Vec<u8>), EncodingError> {
    let bytes = decode_base58btc(key)?;
    let multi_encoded = MultiEncoded::new(&bytes)?;
    Ok((multi_encoded.codec(), multi_encoded.data().to_vec()))
}

/// Decode a multikey string, returning just the key bytes
pub fn decode_multikey(key: &str) -> Result<Vec<u8>, EncodingError> {
    decode_multikey_with_codec(key).map(|(_, data)| data)
}

/// Encode key bytes with a multicodec prefix as a multibase (base58btc) string
///
/// This is the inverse of `decode_multikey_with_codec`.
pub fn encode_multikey(codec: u64, key_bytes: &[u8]) -> String {
    let encoded = MultiEncodedBuf::encode(codec, key_bytes);
    encode_base58btc(encoded.as_bytes())
}
