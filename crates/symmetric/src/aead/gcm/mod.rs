//! AES-256-GCM on the high-level cipher
//!
//! [`Aes256Cipher::encrypt_gcm`] produces `nonce ‖ ciphertext ‖ tag` under a
//! fresh 96-bit nonce. The [`Aead`] implementation takes the nonce
//! explicitly and produces `ciphertext ‖ tag`.
//!
//! ```
//! use aesgard_symmetric::{Aead, Aes256Cipher, Result, SymmetricCipher};
//!
//! fn example() -> Result<()> {
//!     let cipher = Aes256Cipher::new(&[0x42; 32])?;
//!     let nonce = Aes256Cipher::generate_nonce()?;
//!
//!     let ciphertext = cipher.encrypt(&nonce, b"Secret message", None)?;
//!     let decrypted = cipher.decrypt(&nonce, &ciphertext, None)?;
//!     assert_eq!(decrypted, b"Secret message");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use log::{trace, warn};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use algorithms::aead::gcm::Gcm;
use algorithms::types::Nonce;

use crate::aes::cipher::{fresh_nonce, split_prefix, with_prefix};
use crate::aes::Aes256Cipher;
use crate::cipher::Aead;
use crate::error::{validate, Error, Result};
use params::utils::symmetric::{AES_NONCE_SIZE, GCM_TAG_SIZE};

/// Shortest valid `nonce ‖ ciphertext ‖ tag`
pub const GCM_MIN_INPUT_SIZE: usize = AES_NONCE_SIZE + GCM_TAG_SIZE;

impl Aes256Cipher {
    /// Encrypts and authenticates `plaintext` under a fresh nonce
    pub fn encrypt_gcm(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_gcm_with_rng(plaintext, aad, &mut OsRng)
    }

    /// GCM encryption drawing the nonce from `rng`
    pub fn encrypt_gcm_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        aad: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        trace!("GCM encrypt, {} bytes, {} bytes AAD", plaintext.len(), aad.len());
        let nonce = fresh_nonce::<AES_NONCE_SIZE, _>(rng)?;
        let sealed = Gcm::new(&self.cipher, &nonce)?.encrypt(plaintext, aad)?;
        Ok(with_prefix(&nonce, sealed))
    }

    /// Verifies and decrypts `nonce ‖ ciphertext ‖ tag`
    ///
    /// # Errors
    /// `CiphertextTooShort` for input under 28 bytes and
    /// `AuthenticationFailure` when the tag does not verify.
    pub fn decrypt_gcm(&self, input: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        trace!("GCM decrypt, {} bytes, {} bytes AAD", input.len(), aad.len());
        validate::min_length("AES-GCM input", input.len(), GCM_MIN_INPUT_SIZE)?;
        let (nonce, sealed) = split_prefix::<AES_NONCE_SIZE>("AES-GCM input", input)?;
        open(&Gcm::new(&self.cipher, &nonce)?, sealed, aad)
    }

    /// The GCM tag over `ciphertext` and `aad` under `nonce`
    pub fn gmac(
        &self,
        ciphertext: &[u8],
        aad: &[u8],
        nonce: &Nonce<AES_NONCE_SIZE>,
    ) -> Result<[u8; GCM_TAG_SIZE]> {
        Gcm::new(&self.cipher, nonce)?.tag(aad, ciphertext)
    }
}

impl Aead for Aes256Cipher {
    type Nonce = Nonce<AES_NONCE_SIZE>;

    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Gcm::new(&self.cipher, nonce)?.encrypt(plaintext, aad.unwrap_or_default())
    }

    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        open(&Gcm::new(&self.cipher, nonce)?, ciphertext, aad.unwrap_or_default())
    }

    fn generate_nonce() -> Result<Self::Nonce> {
        fresh_nonce::<AES_NONCE_SIZE, _>(&mut OsRng)
    }
}

fn open(gcm: &Gcm<'_, algorithms::Aes256>, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    gcm.decrypt(sealed, aad).map_err(|e| {
        if let Error::AuthenticationFailure { .. } = e {
            warn!("AES-GCM tag verification failed");
        }
        e
    })
}
