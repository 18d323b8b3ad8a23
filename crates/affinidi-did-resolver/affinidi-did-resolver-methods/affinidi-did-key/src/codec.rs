//! did:key encode/decode pipeline
//!
//! `did:key:` + multibase(base58btc, varint(multicodec) || raw public key)
//!
//! Every stage is checked before the next one runs and the first failure is
//! returned. No partial results are produced.

use affinidi_encoding::{MultiEncoded, decode_base58btc, encode_multikey};
use tracing::{debug, trace};

use crate::{
    KeyType,
    errors::{Error, Result},
};

/// Literal prefix of every did:key identifier
pub const DID_KEY_PREFIX: &str = "did:key:";

/// Encodes a raw public key as a did:key identifier
pub fn encode(key_type: KeyType, key_bytes: &[u8]) -> Result<String> {
    if key_bytes.is_empty() {
        return Err(Error::EmptyKeyBytes);
    }
    key_type.validate_size(key_bytes)?;

    let did = [DID_KEY_PREFIX, &encode_multikey(key_type.codec(), key_bytes)].concat();
    trace!("Encoded {key_type} key as {did}");
    Ok(did)
}

/// Decodes a did:key identifier into its key type and raw public key bytes
///
/// The returned bytes are a fresh buffer, independent of `did`.
pub fn decode(did: &str) -> Result<(KeyType, Vec<u8>)> {
    match decode_stages(did) {
        Ok((key_type, key_bytes)) => {
            trace!("Decoded {did} as {key_type} key");
            Ok((key_type, key_bytes))
        }
        Err(e) => {
            debug!("Rejected did:key ({did}): {e}");
            Err(e)
        }
    }
}

fn decode_stages(did: &str) -> Result<(KeyType, Vec<u8>)> {
    if did.is_empty() {
        return Err(Error::EmptyIdentifier);
    }

    let Some(multibase) = did.strip_prefix(DID_KEY_PREFIX) else {
        return Err(Error::InvalidPrefix);
    };
    if multibase.is_empty() {
        return Err(Error::EmptyMultibaseString);
    }

    let decoded = decode_base58btc(multibase)?;
    if decoded.is_empty() {
        return Err(Error::EmptyData);
    }

    let multicodec = MultiEncoded::new(&decoded)?;
    if multicodec.data().is_empty() {
        return Err(Error::NoKeyDataAfterVarint);
    }

    let key_type = KeyType::from_codec(multicodec.codec())?;
    key_type.validate_size(multicodec.data())?;

    Ok((key_type, multicodec.data().to_vec()))
}

/// Returns true if `did` decodes as a supported did:key
pub fn is_valid(did: &str) -> bool {
    decode(did).is_ok()
}

/// Returns the key type carried by `did`
///
/// Runs the full decode, so an identifier with a valid prefix but a bad key
/// length is still an error.
pub fn key_type_of(did: &str) -> Result<KeyType> {
    decode(did).map(|(key_type, _)| key_type)
}
