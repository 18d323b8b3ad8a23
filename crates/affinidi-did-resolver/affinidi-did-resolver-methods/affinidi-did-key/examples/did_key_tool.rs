/*!
*   Utility that converts between raw public key bytes (hex) and did:key identifiers.
*
*   Set RUST_LOG=affinidi_did_key=debug to see why an identifier is rejected.
*/

use affinidi_did_key::{DIDKey, KeyType};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::filter;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help(true))]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode raw public key bytes as a did:key
    Encode {
        /// Public key type
        #[arg(value_enum, short, long)]
        key_type: KeyAlgos,

        /// Raw public key bytes as hex
        key_hex: String,
    },
    /// Decode one or more did:key identifiers
    Decode {
        #[arg(required = true)]
        dids: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeyAlgos {
    /// 25519 Edwards Curve
    Ed25519,
    /// 25519 Montgomery Curve
    X25519,
    /// Secp256k1 Curve (compressed)
    Secp256k1,
    /// BLS12-381 G1
    Bls12381G1,
    /// BLS12-381 G2
    Bls12381G2,
    /// P256 NIST Curve (compressed)
    P256,
    /// P384 NIST Curve (compressed)
    P384,
}

impl From<KeyAlgos> for KeyType {
    fn from(algo: KeyAlgos) -> Self {
        match algo {
            KeyAlgos::Ed25519 => KeyType::Ed25519,
            KeyAlgos::X25519 => KeyType::X25519,
            KeyAlgos::Secp256k1 => KeyType::Secp256k1,
            KeyAlgos::Bls12381G1 => KeyType::Bls12381G1,
            KeyAlgos::Bls12381G2 => KeyType::Bls12381G2,
            KeyAlgos::P256 => KeyType::P256,
            KeyAlgos::P384 => KeyType::P384,
        }
    }
}

fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    match args.command {
        Commands::Encode { key_type, key_hex } => {
            let key_bytes = hex::decode(key_hex.trim()).expect("Key must be hex encoded");
            match DIDKey::from_bytes(key_type.into(), &key_bytes) {
                Ok(key) => println!("{key}"),
                Err(e) => {
                    eprintln!("ERROR: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Decode { dids } => {
            let mut failed = false;
            for did in dids {
                match DIDKey::parse(&did) {
                    Ok(key) => println!(
                        "{did}\n  type: {}\n  key:  {}",
                        key.key_type(),
                        hex::encode(key.as_bytes())
                    ),
                    Err(e) => {
                        eprintln!("{did}\n  ERROR ({:?}/{:?}): {e}", e.category(), e.stage());
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
    }
}
