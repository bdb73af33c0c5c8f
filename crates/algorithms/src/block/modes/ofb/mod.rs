//! Output Feedback (OFB) mode
//!
//! OFB repeatedly encrypts the IV and uses each output block both as
//! keystream and as the next cipher input. Encryption and decryption are
//! the same operation. The final partial block uses a truncated keystream
//! block.

use zeroize::Zeroizing;

use super::super::BlockCipher;
use crate::block::Block;
use crate::error::Result;
use crate::types::nonce::IvCompatible;
use crate::types::Nonce;
use params::utils::symmetric::{AES_BLOCK_SIZE, AES_IV_SIZE};

/// OFB mode implementation
#[derive(Clone)]
pub struct Ofb<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Ofb<'a, B> {
    /// Creates a new OFB mode instance
    pub fn new(cipher: &'a B, iv: &Nonce<AES_IV_SIZE>) -> Self
    where
        Nonce<AES_IV_SIZE>: IvCompatible,
    {
        Self { cipher, iv: **iv }
    }

    /// XOR `data` with the OFB keystream
    pub fn process(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(data.len());
        let mut keystream = Zeroizing::new(self.iv);

        for chunk in data.chunks(AES_BLOCK_SIZE) {
            self.cipher.encrypt_block(&mut keystream[..])?;
            output.extend(chunk.iter().zip(keystream.iter()).map(|(x, k)| x ^ k));
        }

        Ok(output)
    }

    /// Encrypts a message of any length
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext)
    }

    /// Decrypts a message of any length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext)
    }
}
