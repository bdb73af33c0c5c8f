//! Cipher Feedback (CFB) mode
//!
//! CFB encrypts a 16-byte shift register and XORs the first `s` bytes of the
//! result with `s` bytes of input. The ciphertext segment is then shifted
//! into the register. Segment sizes from 1 to 16 bytes are supported, which
//! covers CFB8 and CFB128 from SP 800-38A. There is no padding; the final
//! segment may be short.

use zeroize::Zeroizing;

use super::super::BlockCipher;
use crate::block::Block;
use crate::error::{validate, Result};
use crate::types::nonce::IvCompatible;
use crate::types::Nonce;
use params::utils::symmetric::{
    AES_BLOCK_SIZE, AES_IV_SIZE, CFB_MAX_SEGMENT_SIZE, CFB_MIN_SEGMENT_SIZE,
};

/// Which side of the XOR feeds the shift register
#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// CFB mode implementation
#[derive(Clone)]
pub struct Cfb<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
    segment_size: usize,
}

impl<'a, B: BlockCipher> Cfb<'a, B> {
    /// Creates a CFB instance with a segment size in bytes
    ///
    /// Fails with [`Error::InvalidSegmentSize`](crate::Error::InvalidSegmentSize)
    /// unless `1 <= segment_size <= 16`.
    pub fn new(cipher: &'a B, iv: &Nonce<AES_IV_SIZE>, segment_size: usize) -> Result<Self>
    where
        Nonce<AES_IV_SIZE>: IvCompatible,
    {
        validate::segment_size(segment_size, CFB_MIN_SEGMENT_SIZE, CFB_MAX_SEGMENT_SIZE)?;
        Ok(Self {
            cipher,
            iv: **iv,
            segment_size,
        })
    }

    /// Creates a full-block (CFB128) instance
    pub fn full_block(cipher: &'a B, iv: &Nonce<AES_IV_SIZE>) -> Self
    where
        Nonce<AES_IV_SIZE>: IvCompatible,
    {
        Self {
            cipher,
            iv: **iv,
            segment_size: CFB_MAX_SEGMENT_SIZE,
        }
    }

    /// Segment size in bytes
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    /// Encrypts a message of any length
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, Direction::Encrypt)
    }

    /// Decrypts a message of any length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, Direction::Decrypt)
    }

    fn process(&self, input: &[u8], direction: Direction) -> Result<Vec<u8>> {
        let s = self.segment_size;
        let mut output = Vec::with_capacity(input.len());
        let mut register = Zeroizing::new(self.iv);
        let mut keystream = Zeroizing::new([0u8; AES_BLOCK_SIZE]);

        for segment in input.chunks(s) {
            keystream.copy_from_slice(&register[..]);
            self.cipher.encrypt_block(&mut keystream[..])?;

            let start = output.len();
            output.extend(segment.iter().zip(keystream.iter()).map(|(x, k)| x ^ k));

            // A short final segment ends the message; no feedback needed
            if segment.len() == s {
                let feedback = match direction {
                    Direction::Encrypt => &output[start..],
                    Direction::Decrypt => segment,
                };
                register.copy_within(s.., 0);
                register[AES_BLOCK_SIZE - s..].copy_from_slice(feedback);
            }
        }

        Ok(output)
    }
}
