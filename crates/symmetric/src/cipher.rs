//! Symmetric cipher traits for aesgard-symmetric
//!
//! This module defines the traits implemented by the high-level cipher.

use crate::error::Result;

/// Common trait for keyed symmetric ciphers
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance from an already validated key
    fn from_key(key: &Self::Key) -> Self
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Trait for Authenticated Encryption with Associated Data
///
/// The nonce is passed explicitly. Output is `ciphertext ‖ tag` with no
/// nonce prefix.
pub trait Aead: SymmetricCipher {
    /// The nonce type used by this cipher
    type Nonce;

    /// Encrypts plaintext with associated data
    fn encrypt(&self, nonce: &Self::Nonce, plaintext: &[u8], aad: Option<&[u8]>)
        -> Result<Vec<u8>>;

    /// Decrypts ciphertext with associated data
    /// Returns an error if authentication fails
    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    /// Generates a fresh nonce from the operating system RNG
    fn generate_nonce() -> Result<Self::Nonce>;
}
