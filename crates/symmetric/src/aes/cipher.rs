//! The high-level AES-256 cipher
//!
//! [`Aes256Cipher`] expands the key once and borrows the schedule for every
//! call. Each IV-based encryption draws a fresh IV and prepends it; the
//! matching decryption splits it off again.

use log::{debug, trace, warn};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use algorithms::block::{Aes256, Block, BlockCipher};
use algorithms::padding::Padding;
use algorithms::types::Nonce;
use algorithms::{Cbc, Cfb, Ctr, Ecb, Ofb};

use super::keys::Aes256Key;
use crate::cipher::SymmetricCipher;
use crate::error::{validate, Result};
use params::utils::symmetric::{
    AES_BLOCK_SIZE, AES_IV_SIZE, AES_NONCE_SIZE, CFB_MAX_SEGMENT_SIZE, CFB_MIN_SEGMENT_SIZE,
};

/// AES-256 with every supported mode of operation
pub struct Aes256Cipher {
    pub(crate) cipher: Aes256,
}

impl Aes256Cipher {
    /// Creates a cipher from raw key bytes, which must be exactly 32 bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = Aes256::from_slice(key)?;
        debug!("initialized {} cipher", Self::name());
        Ok(Self { cipher })
    }

    /// Encrypts exactly one 16-byte block
    pub fn encrypt_block(&self, block: &[u8]) -> Result<Block> {
        let mut state = Self::to_block("AES-256 block", block)?;
        self.cipher.encrypt_block(&mut state)?;
        Ok(state)
    }

    /// Decrypts exactly one 16-byte block
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Block> {
        let mut state = Self::to_block("AES-256 block", block)?;
        self.cipher.decrypt_block(&mut state)?;
        Ok(state)
    }

    /* --------------------------------------------------------------------- */
    /*                                 ECB                                   */
    /* --------------------------------------------------------------------- */

    /// Pads and encrypts `plaintext` in ECB mode
    ///
    /// ECB leaks equal plaintext blocks; it exists for interoperability.
    pub fn encrypt_ecb(&self, plaintext: &[u8], padding: Padding) -> Result<Vec<u8>> {
        trace!("ECB encrypt, {} bytes", plaintext.len());
        let padded = Zeroizing::new(padding.pad(plaintext));
        Ecb::new(&self.cipher).encrypt(&padded)
    }

    /// Decrypts and unpads an ECB ciphertext
    pub fn decrypt_ecb(&self, ciphertext: &[u8], padding: Padding) -> Result<Vec<u8>> {
        trace!("ECB decrypt, {} bytes", ciphertext.len());
        let padded = Zeroizing::new(Ecb::new(&self.cipher).decrypt(ciphertext)?);
        padding.unpad(&padded)
    }

    /* --------------------------------------------------------------------- */
    /*                                 CBC                                   */
    /* --------------------------------------------------------------------- */

    /// Pads and encrypts `plaintext` in CBC mode under a fresh IV
    pub fn encrypt_cbc(&self, plaintext: &[u8], padding: Padding) -> Result<Vec<u8>> {
        self.encrypt_cbc_with_rng(plaintext, padding, &mut OsRng)
    }

    /// CBC encryption drawing the IV from `rng`
    pub fn encrypt_cbc_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        padding: Padding,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        trace!("CBC encrypt, {} bytes", plaintext.len());
        let iv = fresh_nonce::<AES_IV_SIZE, _>(rng)?;
        let padded = Zeroizing::new(padding.pad(plaintext));
        let ciphertext = Cbc::new(&self.cipher, &iv).encrypt(&padded)?;
        Ok(with_prefix(&iv, ciphertext))
    }

    /// Decrypts `iv ‖ ciphertext` produced by [`Self::encrypt_cbc`]
    pub fn decrypt_cbc(&self, input: &[u8], padding: Padding) -> Result<Vec<u8>> {
        trace!("CBC decrypt, {} bytes", input.len());
        let (iv, ciphertext) = split_prefix::<AES_IV_SIZE>("CBC input", input)?;
        let padded = Zeroizing::new(Cbc::new(&self.cipher, &iv).decrypt(ciphertext)?);
        padding.unpad(&padded)
    }

    /* --------------------------------------------------------------------- */
    /*                                 CFB                                   */
    /* --------------------------------------------------------------------- */

    /// Encrypts `plaintext` in CFB mode with `segment_size` bytes of feedback
    pub fn encrypt_cfb(&self, plaintext: &[u8], segment_size: usize) -> Result<Vec<u8>> {
        self.encrypt_cfb_with_rng(plaintext, segment_size, &mut OsRng)
    }

    /// CFB encryption drawing the IV from `rng`
    pub fn encrypt_cfb_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        segment_size: usize,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        trace!("CFB-{} encrypt, {} bytes", segment_size * 8, plaintext.len());
        // Reject the segment size before consuming randomness
        validate::segment_size(segment_size, CFB_MIN_SEGMENT_SIZE, CFB_MAX_SEGMENT_SIZE)?;
        let iv = fresh_nonce::<AES_IV_SIZE, _>(rng)?;
        let ciphertext = Cfb::new(&self.cipher, &iv, segment_size)?.encrypt(plaintext)?;
        Ok(with_prefix(&iv, ciphertext))
    }

    /// Decrypts `iv ‖ ciphertext` produced by [`Self::encrypt_cfb`]
    pub fn decrypt_cfb(&self, input: &[u8], segment_size: usize) -> Result<Vec<u8>> {
        trace!("CFB-{} decrypt, {} bytes", segment_size * 8, input.len());
        validate::segment_size(segment_size, CFB_MIN_SEGMENT_SIZE, CFB_MAX_SEGMENT_SIZE)?;
        let (iv, ciphertext) = split_prefix::<AES_IV_SIZE>("CFB input", input)?;
        Cfb::new(&self.cipher, &iv, segment_size)?.decrypt(ciphertext)
    }

    /* --------------------------------------------------------------------- */
    /*                                 OFB                                   */
    /* --------------------------------------------------------------------- */

    /// Encrypts `plaintext` in OFB mode under a fresh IV
    pub fn encrypt_ofb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_ofb_with_rng(plaintext, &mut OsRng)
    }

    /// OFB encryption drawing the IV from `rng`
    pub fn encrypt_ofb_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        trace!("OFB encrypt, {} bytes", plaintext.len());
        let iv = fresh_nonce::<AES_IV_SIZE, _>(rng)?;
        let ciphertext = Ofb::new(&self.cipher, &iv).encrypt(plaintext)?;
        Ok(with_prefix(&iv, ciphertext))
    }

    /// Decrypts `iv ‖ ciphertext` produced by [`Self::encrypt_ofb`]
    pub fn decrypt_ofb(&self, input: &[u8]) -> Result<Vec<u8>> {
        trace!("OFB decrypt, {} bytes", input.len());
        let (iv, ciphertext) = split_prefix::<AES_IV_SIZE>("OFB input", input)?;
        Ofb::new(&self.cipher, &iv).decrypt(ciphertext)
    }

    /* --------------------------------------------------------------------- */
    /*                                 CTR                                   */
    /* --------------------------------------------------------------------- */

    /// Encrypts `plaintext` in CTR mode under a fresh nonce, counter from zero
    pub fn encrypt_ctr(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_ctr_with_rng(plaintext, &mut OsRng)
    }

    /// CTR encryption drawing the nonce from `rng`
    pub fn encrypt_ctr_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        trace!("CTR encrypt, {} bytes", plaintext.len());
        let nonce = fresh_nonce::<AES_NONCE_SIZE, _>(rng)?;
        let ciphertext = Ctr::new(&self.cipher, &nonce).encrypt(plaintext)?;
        Ok(with_prefix(&nonce, ciphertext))
    }

    /// Decrypts `nonce ‖ ciphertext` produced by [`Self::encrypt_ctr`]
    pub fn decrypt_ctr(&self, input: &[u8]) -> Result<Vec<u8>> {
        trace!("CTR decrypt, {} bytes", input.len());
        let (nonce, ciphertext) = split_prefix::<AES_NONCE_SIZE>("CTR input", input)?;
        Ctr::new(&self.cipher, &nonce).decrypt(ciphertext)
    }

    fn to_block(context: &'static str, data: &[u8]) -> Result<Block> {
        validate::block_length(context, data.len(), AES_BLOCK_SIZE)?;
        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(data);
        Ok(block)
    }
}

impl SymmetricCipher for Aes256Cipher {
    type Key = Aes256Key;

    fn from_key(key: &Self::Key) -> Self {
        debug!("initialized {} cipher", Self::name());
        Self {
            cipher: Aes256::new(key.secret()),
        }
    }

    fn name() -> &'static str {
        "AES-256"
    }
}

/// Draw an IV or nonce, logging a randomness failure
pub(crate) fn fresh_nonce<const N: usize, R: RngCore + CryptoRng>(rng: &mut R) -> Result<Nonce<N>> {
    Nonce::<N>::random(rng).map_err(|e| {
        warn!("random source failed while generating a {}-byte IV", N);
        e
    })
}

/// `prefix ‖ body`
pub(crate) fn with_prefix<const N: usize>(prefix: &Nonce<N>, body: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(N + body.len());
    out.extend_from_slice(prefix.as_ref());
    out.extend_from_slice(&body);
    out
}

/// Split a leading IV or nonce off `input`
///
/// Input too short to hold the prefix is reported as a nonce size error.
pub(crate) fn split_prefix<'a, const N: usize>(
    context: &'static str,
    input: &'a [u8],
) -> Result<(Nonce<N>, &'a [u8])> {
    if input.len() < N {
        validate::nonce_length(context, input.len(), N)?;
    }
    let (prefix, rest) = input.split_at(N);
    Ok((Nonce::<N>::from_slice(prefix)?, rest))
}
