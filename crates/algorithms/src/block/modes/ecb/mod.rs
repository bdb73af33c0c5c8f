//! Electronic Codebook (ECB) mode
//!
//! Each block is encrypted independently under the same key. Identical
//! plaintext blocks produce identical ciphertext blocks, so ECB leaks
//! structure and is provided for compatibility and testing only.

use super::super::BlockCipher;
use crate::block::Block;
use crate::error::{validate, Result};
use params::utils::symmetric::AES_BLOCK_SIZE;

/// ECB mode implementation
#[derive(Clone)]
pub struct Ecb<'a, B: BlockCipher> {
    cipher: &'a B,
}

impl<'a, B: BlockCipher> Ecb<'a, B> {
    /// Creates a new ECB mode instance over `cipher`
    pub fn new(cipher: &'a B) -> Self {
        Self { cipher }
    }

    /// Encrypts block-aligned plaintext
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB plaintext", plaintext.len(), AES_BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block: Block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.cipher.encrypt_block(&mut block)?;
            ciphertext.extend_from_slice(&block);
        }
        Ok(ciphertext)
    }

    /// Decrypts block-aligned ciphertext
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block: Block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.cipher.decrypt_block(&mut block)?;
            plaintext.extend_from_slice(&block);
        }
        Ok(plaintext)
    }
}
