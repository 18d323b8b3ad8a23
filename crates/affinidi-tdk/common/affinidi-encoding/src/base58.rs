//! Base58 (Bitcoin alphabet) encoding/decoding
//!
//! Leading zero bytes are significant: each one maps to a leading `'1'` and
//! back again.

use crate::EncodingError;

/// The base58btc alphabet. Excludes `0`, `O`, `I` and `l`.
pub const BASE58BTC_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes as base58btc (no multibase prefix)
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode base58btc text (no multibase prefix)
pub fn decode_base58(s: &str) -> Result<Vec<u8>, EncodingError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                EncodingError::InvalidBase58Character { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => {
                EncodingError::InvalidBase58Character {
                    character: s
                        .get(index..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER),
                    index,
                }
            }
            // into_vec() sizes its own buffer, anything else is a bad character
            _ => EncodingError::InvalidBase58Character {
                character: char::REPLACEMENT_CHARACTER,
                index: 0,
            },
        })
}
