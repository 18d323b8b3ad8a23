use affinidi_did_key::{
    DIDKey, Error, ErrorCategory, KeyType, decode, encode, is_valid, key_type_of,
};

/// (key type, raw public key hex, did:key)
const VECTORS: &[(KeyType, &str, &str)] = &[
    (
        KeyType::Ed25519,
        "2e6fcce36701dc791488e0d0b1745cc1e33a4c1c9fcc41c63bd343dbbe0970e6",
        "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
    ),
    (
        KeyType::Ed25519,
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        "did:key:z6MktwupdmLXVVqTzCw4i46r4uGyosGXRnR3XjN4Zq7oMMsw",
    ),
    (
        KeyType::Ed25519,
        "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
        "did:key:z6MkfgKfvJf5pnfqLkJt7K2nhoK9k35dd3V8q7AFhJFm4PCa",
    ),
    (
        KeyType::X25519,
        "2fe57da347cd62431528daac5fbb290730fff684afc4cfc2ed90995f58cb3b74",
        "did:key:z6LSeu9HkTHSfLLeUs2nnzUSNedgDUevfNQgQjQC23ZCit6F",
    ),
    (
        KeyType::Secp256k1,
        "03fdd57adec3d438ea237fe46b33ee1e016eda6b585c3e27ea66686c2ea5358479",
        "did:key:zQ3shwiy5TJU1fJ7XH6eJLRXJYvh6tuU4YKZmfU46JtJtHTAx",
    ),
    (
        KeyType::Secp256k1,
        "03874c15c7fda20e539c6e5ba573c139884c351188799f5458b4b41f7924f235cd",
        "did:key:zQ3shokFTS3brHcDQrn82RUDfCZESWL1ZdCEJwekUDPQiYBme",
    ),
    (
        KeyType::Bls12381G1,
        "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f30",
        "did:key:z3tE9wVuJwDuJe4JdNGiSJgHjzxcN81hYjpub3YRabQca8HuDNYafHADL2iwhJZkW6wgcf",
    ),
    (
        KeyType::Bls12381G2,
        "6465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9fa0a1a2a3a4a5a6a7a8a9aaabacadaeafb0b1b2b3b4b5b6b7b8b9babbbcbdbebfc0c1c2c3",
        "did:key:zUC6qRRE2VyJSVrvrtmDoFHW1ynNadMsW8Scu6AThx6DTrosmzxmhGb6KjoxoVASoGh1kxrPTHLqSXcCc172sHMm2qGLFuHbLfMYXxRGBMrwxU8Y1KC3vpvjTKeVnet6HoAJvHx",
    ),
    (
        KeyType::P256,
        "02d0ef6c6209e4e3d0de5e555b9b3f7e3c5a4c7b1e9e2d8c3f4a5b6c7d8e9f01a0",
        "did:key:zDnaeeVZbSMKojCG3A1k46yRNVhLV7XXxr2mniUF13p3FSyXm",
    ),
    (
        KeyType::P256,
        "037f235830dd3defa722ef1aa249d6a0ddbba4f990b0817538933f573640653542",
        "did:key:zDnaerDaTF5BXEavCrfRZEk316dpbLsfPDZ3WJ5hRTPFU2169",
    ),
    (
        KeyType::P384,
        "039489d3c65f1f8cb2a9fd40abc48d160e495a862fbbfbfe896ed8878e246f32f85e76129574705f8b61c263cb7f409c9c",
        "did:key:z82Lm1MpAkeJcix9K8TMiLd5NMAhnwkjjCBeWHXyu3U4oT2MVJJKXkcVBgjGhnLBn2Kaau9",
    ),
];

#[test]
fn encode_known_vectors() {
    for (key_type, key_hex, did) in VECTORS {
        let key_bytes = hex::decode(key_hex).unwrap();
        assert_eq!(&encode(*key_type, &key_bytes).unwrap(), did, "{key_type}");
    }
}

#[test]
fn decode_known_vectors() {
    for (key_type, key_hex, did) in VECTORS {
        let (decoded_type, decoded_bytes) = decode(did).unwrap();
        assert_eq!(decoded_type, *key_type);
        assert_eq!(hex::encode(&decoded_bytes), *key_hex);
        assert_eq!(&encode(decoded_type, &decoded_bytes).unwrap(), did);
    }
}

#[test]
fn round_trip_every_key_type() {
    for key_type in KeyType::ALL {
        let len = key_type.expected_key_length();
        let patterns: [Vec<u8>; 4] = [
            vec![0u8; len],
            vec![0xffu8; len],
            (0..len).map(|i| i as u8).collect(),
            (0..len).map(|i| if i < len / 2 { 0 } else { 0xa5 }).collect(),
        ];
        for key_bytes in patterns {
            let did = encode(key_type, &key_bytes).unwrap();
            assert!(did.starts_with("did:key:z"));
            assert_eq!(decode(&did).unwrap(), (key_type, key_bytes));
            assert_eq!(key_type_of(&did).unwrap(), key_type);
            assert!(is_valid(&did));
        }
    }
}

#[test]
fn rejects_wrong_sizes() {
    for key_type in KeyType::ALL {
        let expected = key_type.expected_key_length();
        for len in 1..=expected + 16 {
            if len == expected {
                continue;
            }
            assert_eq!(
                encode(key_type, &vec![1u8; len]),
                Err(Error::InvalidKeySize {
                    key_type,
                    expected,
                    actual: len
                }),
                "{key_type} with {len} bytes"
            );
        }
        assert_eq!(encode(key_type, &[]), Err(Error::EmptyKeyBytes));
    }
}

#[test]
fn secp256k1_sizes() {
    assert!(encode(KeyType::Secp256k1, &[2; 32]).is_err());
    assert!(encode(KeyType::Secp256k1, &[2; 33]).is_ok());
    assert!(encode(KeyType::Secp256k1, &[2; 34]).is_err());
}

#[test]
fn rejects_other_did_methods() {
    for (_, _, did) in VECTORS {
        let web = did.replacen("did:key:", "did:web:", 1);
        let err = decode(&web).unwrap_err();
        assert_eq!(err, Error::InvalidPrefix);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(!is_valid(&web));
    }
}

#[test]
fn rejects_empty_identifier() {
    assert_eq!(decode(""), Err(Error::EmptyIdentifier));
    assert_eq!(key_type_of(""), Err(Error::EmptyIdentifier));
}

#[test]
fn rejects_ambiguous_base58_characters() {
    for bad in ['0', 'O', 'I', 'l'] {
        let did = format!("did:key:z6Mkha{bad}XgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK");
        let err = decode(&did).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format, "{did}");
    }
}

#[test]
fn did_key_value_round_trip() {
    for (key_type, key_hex, did) in VECTORS {
        let key_bytes = hex::decode(key_hex).unwrap();
        let key = DIDKey::from_bytes(*key_type, &key_bytes).unwrap();
        assert_eq!(&key.to_string(), did);
        assert_eq!(DIDKey::parse(did).unwrap(), key);
    }
}

#[test]
fn decodes_padded_multicodec_prefix() {
    // Payload is ed 81 00 || [0x07; 32]: the ed25519 codec with a padded varint
    let did = "did:key:zQhVUSscCr9RGUcRz7C9dPXtk4NhhDZkmE7T8Lj6rDZMVGuvW";
    let (key_type, key_bytes) = decode(did).unwrap();
    assert_eq!(key_type, KeyType::Ed25519);
    assert_eq!(key_bytes, vec![0x07; 32]);

    // Re-encoding always writes the minimal two byte prefix
    let canonical = encode(key_type, &key_bytes).unwrap();
    assert_ne!(canonical, did);
    assert!(canonical.starts_with("did:key:z6Mk"));
}
