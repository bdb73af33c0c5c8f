//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A.

use zeroize::Zeroize;

use super::super::BlockCipher;
use crate::block::Block;
use crate::error::{validate, Result};
use crate::gf256::xor_into_block;
use crate::types::nonce::IvCompatible;
use crate::types::Nonce;
use params::utils::symmetric::{AES_BLOCK_SIZE, AES_IV_SIZE};

/// CBC mode implementation
#[derive(Clone)]
pub struct Cbc<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Cbc<'a, B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new(cipher: &'a B, iv: &Nonce<AES_IV_SIZE>) -> Self
    where
        Nonce<AES_IV_SIZE>: IvCompatible,
    {
        Self { cipher, iv: **iv }
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size.
    /// Padding must be applied before calling this function.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC plaintext", plaintext.len(), AES_BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = self.iv;

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block: Block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            // XOR with previous ciphertext block (or IV for the first block)
            xor_into_block(&mut block, &prev_block);
            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            prev_block = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block = self.iv;

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block: Block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let current_block = block;

            self.cipher.decrypt_block(&mut block)?;
            xor_into_block(&mut block, &prev_block);

            plaintext.extend_from_slice(&block);
            block.zeroize();
            prev_block = current_block;
        }

        Ok(plaintext)
    }
}
