//! Galois/Counter Mode (GCM) authenticated encryption
//!
//! Implements GCM as specified in NIST SP 800-38D with a 96-bit nonce and a
//! full 128-bit tag:
//!
//! * the hash subkey is `H = E(0^128)`
//! * the pre-counter block is `J0 = nonce ‖ 0x00000001`
//! * data is encrypted with the counter-mode engine starting at `inc32(J0)`
//! * the tag is `GHASH(H, A, C) ^ E(J0)`
//!
//! Decryption recomputes the tag and compares it in constant time before any
//! plaintext is produced.

mod ghash;

pub use ghash::{process_ghash, GHash};

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::block::modes::ctr::{apply_keystream, Counter, CounterBlock};
use crate::block::{Block, BlockCipher};
use crate::error::{validate, Result};
use crate::types::nonce::AesGcmCompatible;
use crate::types::Nonce;
use params::utils::symmetric::{AES_BLOCK_SIZE, AES_NONCE_SIZE, GCM_TAG_SIZE};

/// Counter value reserved for the tag mask
const TAG_COUNTER: u32 = 1;

/// GCM mode over a borrowed 128-bit block cipher
pub struct Gcm<'a, B: BlockCipher> {
    cipher: &'a B,
    h: Zeroizing<Block>,
    nonce: Nonce<AES_NONCE_SIZE>,
}

impl<'a, B: BlockCipher> Gcm<'a, B> {
    /// Creates a GCM instance for one nonce
    ///
    /// Derives the hash subkey by encrypting the all-zero block.
    pub fn new(cipher: &'a B, nonce: &Nonce<AES_NONCE_SIZE>) -> Result<Self>
    where
        Nonce<AES_NONCE_SIZE>: AesGcmCompatible,
    {
        let mut h = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        cipher.encrypt_block(&mut h[..])?;

        Ok(Self {
            cipher,
            h,
            nonce: *nonce,
        })
    }

    /// The nonce this instance was built for
    pub fn nonce(&self) -> &Nonce<AES_NONCE_SIZE> {
        &self.nonce
    }

    /// The pre-counter block J0
    fn j0(&self) -> CounterBlock {
        CounterBlock::new(&self.nonce, Counter::new(TAG_COUNTER))
    }

    /// Authentication tag over `aad` and `ciphertext`
    ///
    /// This is GMAC when `ciphertext` is empty.
    pub fn tag(&self, aad: &[u8], ciphertext: &[u8]) -> Result<[u8; GCM_TAG_SIZE]> {
        let s = Zeroizing::new(process_ghash(&self.h, aad, ciphertext)?);
        let masked = apply_keystream(self.cipher, &self.j0(), &s[..])?;

        let mut tag = [0u8; GCM_TAG_SIZE];
        tag.copy_from_slice(&masked[..GCM_TAG_SIZE]);
        Ok(tag)
    }

    fn data_counter(&self) -> CounterBlock {
        let mut counter = self.j0();
        counter.increment();
        counter
    }

    /// Encrypts `plaintext` and returns `ciphertext ‖ tag`
    pub fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let mut output = apply_keystream(self.cipher, &self.data_counter(), plaintext)?;
        let tag = self.tag(aad, &output)?;
        output.extend_from_slice(&tag);
        Ok(output)
    }

    /// Verifies and decrypts `ciphertext ‖ tag`
    ///
    /// # Errors
    /// `CiphertextTooShort` when the input cannot hold a tag, and
    /// `AuthenticationFailure` when the tag does not match. No plaintext is
    /// produced on failure.
    pub fn decrypt(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("AES-GCM ciphertext", ciphertext.len(), GCM_TAG_SIZE)?;

        let (encrypted, tag) = ciphertext.split_at(ciphertext.len() - GCM_TAG_SIZE);
        let expected = Zeroizing::new(self.tag(aad, encrypted)?);

        let tag_ok: bool = expected[..].ct_eq(tag).into();
        validate::authentication(tag_ok, "AES-GCM")?;

        apply_keystream(self.cipher, &self.data_counter(), encrypted)
    }
}
