//! Counter (CTR) mode and the shared counter-mode engine
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive counter blocks and XORing the result with the data. A counter
//! block is a 12-byte nonce followed by a 4-byte big-endian counter. The
//! counter wraps silently after 2^32 blocks (64 GiB per nonce); splitting
//! longer messages is the caller's responsibility.
//!
//! [`apply_keystream`] is the one keystream routine in the crate. CTR starts
//! it at counter 0 and GCM starts it right after the tag counter.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, Zeroizing};

use super::super::BlockCipher;
use crate::block::Block;
use crate::error::Result;
use crate::types::nonce::AesCtrCompatible;
use crate::types::Nonce;
use common::security::barrier;
use params::utils::symmetric::{AES_BLOCK_SIZE, AES_NONCE_SIZE};

/// The 32-bit block counter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct Counter(u32);

impl Counter {
    /// Counter starting at `value`
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Current value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Advance by one block, wrapping to zero after `u32::MAX`
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Big-endian encoding
    pub fn to_be_bytes(&self) -> [u8; 4] {
        let mut bytes = [0u8; 4];
        BigEndian::write_u32(&mut bytes, self.0);
        bytes
    }
}

/// A nonce and counter that together form one cipher input block
#[derive(Clone, Zeroize)]
pub struct CounterBlock {
    nonce: [u8; AES_NONCE_SIZE],
    counter: Counter,
}

impl CounterBlock {
    /// Counter block for `nonce` starting at `counter`
    pub fn new(nonce: &Nonce<AES_NONCE_SIZE>, counter: Counter) -> Self {
        Self {
            nonce: **nonce,
            counter,
        }
    }

    /// Split a full 16-byte initial counter block
    pub fn from_block(block: &Block) -> Self {
        let mut nonce = [0u8; AES_NONCE_SIZE];
        nonce.copy_from_slice(&block[..AES_NONCE_SIZE]);
        Self {
            nonce,
            counter: Counter::new(BigEndian::read_u32(&block[AES_NONCE_SIZE..])),
        }
    }

    /// Current counter
    pub fn counter(&self) -> Counter {
        self.counter
    }

    /// Step the counter by one
    pub fn increment(&mut self) {
        self.counter.increment();
    }

    /// The counter block as cipher input: `nonce ‖ counter`
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; AES_BLOCK_SIZE];
        block[..AES_NONCE_SIZE].copy_from_slice(&self.nonce);
        BigEndian::write_u32(&mut block[AES_NONCE_SIZE..], self.counter.value());
        block
    }
}

/// XOR `data` with the keystream generated from `start`
///
/// Each 16-byte chunk consumes one counter value; a final partial chunk
/// uses a truncated keystream block.
pub fn apply_keystream<B: BlockCipher>(
    cipher: &B,
    start: &CounterBlock,
    data: &[u8],
) -> Result<Vec<u8>> {
    let mut counter = start.clone();
    let mut keystream = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
    let mut output = Vec::with_capacity(data.len());

    // Use memory barrier before sensitive operations
    barrier::compiler_fence_seq_cst();

    for chunk in data.chunks(AES_BLOCK_SIZE) {
        *keystream = counter.to_block();
        cipher.encrypt_block(&mut keystream[..])?;
        output.extend(chunk.iter().zip(keystream.iter()).map(|(x, k)| x ^ k));
        counter.increment();
    }

    // Use memory barrier after sensitive operations
    barrier::compiler_fence_seq_cst();

    Ok(output)
}

/// Counter mode implementation
#[derive(Clone)]
pub struct Ctr<'a, B: BlockCipher> {
    cipher: &'a B,
    start: CounterBlock,
}

impl<'a, B: BlockCipher> Ctr<'a, B> {
    /// Creates a CTR instance with the counter starting at zero
    pub fn new(cipher: &'a B, nonce: &Nonce<AES_NONCE_SIZE>) -> Self
    where
        Nonce<AES_NONCE_SIZE>: AesCtrCompatible,
    {
        Self::with_counter(cipher, nonce, 0)
    }

    /// Creates a CTR instance with an explicit initial counter
    pub fn with_counter(cipher: &'a B, nonce: &Nonce<AES_NONCE_SIZE>, counter: u32) -> Self
    where
        Nonce<AES_NONCE_SIZE>: AesCtrCompatible,
    {
        Self {
            cipher,
            start: CounterBlock::new(nonce, Counter::new(counter)),
        }
    }

    /// Creates a CTR instance from a full initial counter block
    pub fn from_counter_block(cipher: &'a B, block: &Block) -> Self {
        Self {
            cipher,
            start: CounterBlock::from_block(block),
        }
    }

    /// Encrypts a message using CTR mode
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        apply_keystream(self.cipher, &self.start, plaintext)
    }

    /// Decrypts a message using CTR mode
    /// In CTR mode, encryption and decryption are the same operation
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }

    /// Generate keystream directly into an output buffer
    pub fn keystream(&self, output: &mut [u8]) -> Result<()> {
        let zeros = Zeroizing::new(vec![0u8; output.len()]);
        let stream = Zeroizing::new(apply_keystream(self.cipher, &self.start, &zeros)?);
        output.copy_from_slice(&stream);
        Ok(())
    }

    /// A copy of this instance positioned `block_offset` blocks further on
    pub fn seek(&self, block_offset: u32) -> Self {
        let mut start = self.start.clone();
        start.counter = Counter::new(start.counter.value().wrapping_add(block_offset));
        Self {
            cipher: self.cipher,
            start,
        }
    }
}
