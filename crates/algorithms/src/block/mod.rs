//! Block cipher implementations with type-level guarantees
//!
//! This module contains the AES-256 block cipher and the modes of operation
//! built on it.
//!
//! ## Example usage
//!
//! ```
//! use aesgard_algorithms::block::{Aes256, BlockCipher, Cbc};
//! use aesgard_algorithms::types::{Nonce, SecretBytes};
//!
//! let key = SecretBytes::new([0x42u8; 32]);
//! let iv = Nonce::<16>::new([0x24u8; 16]);
//!
//! let cipher = Aes256::new(&key);
//! let mode = Cbc::new(&cipher, &iv);
//!
//! let plaintext = b"secret message with padding...!!"; // Exactly 32 bytes (multiple of 16)
//! let ciphertext = mode.encrypt(plaintext).unwrap();
//! let decrypted = mode.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(plaintext, &decrypted[..]);
//! ```

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::Aes256;
pub use modes::{Cbc, Cfb, Counter, CounterBlock, Ctr, Ecb, Ofb};

/// A single 16-byte cipher block
pub type Block = [u8; params::utils::symmetric::AES_BLOCK_SIZE];

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Number of rounds
    const ROUNDS: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    ///
    /// Returns [`Error::InvalidBlockSize`](crate::Error::InvalidBlockSize)
    /// unless `block` is exactly one block long.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key>;
}
