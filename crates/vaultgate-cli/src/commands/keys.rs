//! Signing key files: 32-byte ed25519 seeds stored as hex.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ed25519_dalek::{SigningKey, SECRET_KEY_LENGTH};
use rand::Rng;

pub fn generate() -> SigningKey {
    let seed: [u8; SECRET_KEY_LENGTH] = rand::rng().random();
    SigningKey::from_bytes(&seed)
}

/// Write `key` to a new file. Refuses to overwrite.
pub fn write_key(path: &Path, key: &SigningKey) -> Result<()> {
    if path.exists() {
        bail!("Key file {} already exists", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", hex::encode(key.to_bytes())))
        .with_context(|| format!("Failed to write key file {}", path.display()))
}

pub fn read_key(path: &Path) -> Result<SigningKey> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read key file {}", path.display()))?;
    let bytes = hex::decode(contents.trim()).context("Key file is not valid hex")?;
    let seed: [u8; SECRET_KEY_LENGTH] = bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("Key must be {} bytes, got {}", SECRET_KEY_LENGTH, b.len()))?;
    Ok(SigningKey::from_bytes(&seed))
}
