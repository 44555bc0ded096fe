use anyhow::{Context, Result};
use ethers::signers::{LocalWallet, Signer};
use ethers::utils::to_checksum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A freshly generated account identity: EIP-55 checksummed address plus the
/// hex-encoded private key. Serializes to the on-disk `{address, private_key}`
/// shape.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Keypair {
    pub address: String,
    pub private_key: String,
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address)
            .field("private_key", &"***REDACTED***")
            .finish()
    }
}

/// Generates a random secp256k1 keypair and derives its checksummed address.
pub fn generate_keypair() -> Keypair {
    let signer = LocalWallet::new(&mut rand::thread_rng());
    Keypair {
        address: to_checksum(&signer.address(), None),
        private_key: hex::encode(signer.signer().to_bytes()),
    }
}

/// Writes persisted keypairs under one directory, one file per account.
pub struct WalletStore {
    dir: PathBuf,
}

impl WalletStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persists a keypair as pretty-printed JSON. The index+address filename
    /// keeps writes append-only: no file is ever overwritten across runs.
    pub fn persist(&self, keypair: &Keypair, index: usize) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self
            .dir
            .join(format!("wallet_{}_{}.json", index, keypair.address));
        let body = serde_json::to_string_pretty(keypair)?;
        fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}
