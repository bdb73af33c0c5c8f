//! AES-256 key material

use std::fmt;

use algorithms::types::SecretBytes;
use log::warn;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};
use params::utils::symmetric::AES256_KEY_SIZE;

/// A 256-bit AES key, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key {
    key: SecretBytes<AES256_KEY_SIZE>,
}

impl Aes256Key {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; AES256_KEY_SIZE]) -> Self {
        Self {
            key: SecretBytes::new(bytes),
        }
    }

    /// Creates a key from a slice, which must be exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            key: SecretBytes::from_slice(bytes)?,
        })
    }

    /// Generates a random key from the operating system RNG
    pub fn generate() -> Result<Self> {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Generates a random key from `rng`
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; AES256_KEY_SIZE]);
        rng.try_fill_bytes(&mut bytes[..]).map_err(|e| {
            warn!("random source failed during key generation");
            Error::RandomSourceFailure {
                context: "key generation",
                message: e.to_string(),
            }
        })?;
        Ok(Self::new(*bytes))
    }

    /// Derives a key from a secret of any length as `SHA-256(secret)`
    ///
    /// This is not a password KDF: there is no salt and no work factor.
    pub fn derive_from_secret(secret: &[u8]) -> Self {
        let digest = Sha256::digest(secret);
        let mut bytes = Zeroizing::new([0u8; AES256_KEY_SIZE]);
        bytes.copy_from_slice(&digest);
        Self::new(*bytes)
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.key.as_ref()
    }

    pub(crate) fn secret(&self) -> &SecretBytes<AES256_KEY_SIZE> {
        &self.key
    }
}

impl fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes256Key([REDACTED])")
    }
}
