//! Unsigned varint encoding/decoding
//!
//! Little-endian base-128 groups: each byte carries 7 value bits and the high
//! bit flags that another byte follows.
//!
//! See: <https://github.com/multiformats/unsigned-varint>

use crate::EncodingError;

/// Longest varint accepted for a `u64` value
pub const MAX_VARINT_LEN: usize = 10;

/// Encode `value` as an unsigned varint
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut buffer = unsigned_varint::encode::u64_buffer();
    unsigned_varint::encode::u64(value, &mut buffer).to_vec()
}

/// Decode a leading unsigned varint from `bytes`
///
/// Returns the value and how many bytes it occupied. Bytes after the
/// terminating byte are never inspected. Non-minimal encodings (trailing
/// zero groups) are accepted.
pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize), EncodingError> {
    match unsigned_varint::decode::u64(bytes) {
        Ok((value, remainder)) => Ok((value, bytes.len() - remainder.len())),
        Err(unsigned_varint::decode::Error::Insufficient) => Err(EncodingError::MalformedVarint),
        Err(unsigned_varint::decode::Error::Overflow) => Err(EncodingError::VarintOverflow),
        Err(unsigned_varint::decode::Error::NotMinimal) => decode_padded(bytes),
        Err(_) => Err(EncodingError::MalformedVarint),
    }
}

// unsigned_varint rejects padded groups, e.g. `80 00` for 0
fn decode_padded(bytes: &[u8]) -> Result<(u64, usize), EncodingError> {
    let mut value = 0u64;
    for (i, b) in bytes.iter().take(MAX_VARINT_LEN).enumerate() {
        value |= u64::from(b & 0x7f) << (i * 7);
        if b & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(EncodingError::VarintOverflow)
}
