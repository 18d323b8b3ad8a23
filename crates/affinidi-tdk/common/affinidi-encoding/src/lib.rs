//! Varint, base58btc and multibase encoding utilities
//!
//! This crate provides the encoding primitives behind did:key identifiers:
//! - Unsigned varint encoding/decoding
//! - Base58 (Bitcoin alphabet) encoding/decoding
//! - Multibase wrapping (base58btc only)
//! - Multicodec framing and public key codec constants

pub mod base58;
pub mod multibase;
pub mod multicodec;
pub mod varint;

pub use base58::{BASE58BTC_ALPHABET, decode_base58, encode_base58};
pub use multibase::{
    BASE58BTC_PREFIX, decode_base58btc, decode_multikey, decode_multikey_with_codec,
    encode_base58btc, encode_multikey, validate_base58btc,
};
pub use multicodec::{
    BLS12381_G1_PUB, BLS12381_G2_PUB, ED25519_PUB, MultiEncoded, MultiEncodedBuf, P256_PUB,
    P384_PUB, SECP256K1_PUB, X25519_PUB,
};
pub use varint::{MAX_VARINT_LEN, decode_varint, encode_varint};

mod error;
pub use error::EncodingError;
