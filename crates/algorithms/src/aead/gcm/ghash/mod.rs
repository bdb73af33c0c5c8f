//! GHASH implementation for Galois/Counter Mode (GCM)
//!
//! GHASH folds 16-byte blocks into an accumulator with `Y = (Y ^ X) * H` in
//! GF(2^128), using the bit order and reduction polynomial of NIST
//! SP 800-38D. Partial blocks are zero-padded, and the final length block
//! carries both lengths in bits.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::{validate, Result};
use common::security::barrier;
use internal::constant_time::ct_mask;

const GCM_BLOCK_SIZE: usize = 16;

/// Reduction constant for x^128 + x^7 + x^2 + x + 1 in GCM bit order
const R: u8 = 0xE1;

/// `GHash` struct for computing the GHASH function in GCM mode.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GHash {
    /// The hash key H, a 16-byte array.
    h: Block,
    /// The current hash value Y, a 16-byte array.
    y: Block,
}

impl GHash {
    /// Creates a new `GHash` instance with the given hash key `h`.
    ///
    /// The accumulator starts at zero.
    pub fn new(h: &Block) -> Self {
        Self {
            h: *h,
            y: [0u8; GCM_BLOCK_SIZE],
        }
    }

    /// Resets the current hash value `y` to zero.
    pub fn reset(&mut self) {
        self.y = [0u8; GCM_BLOCK_SIZE];
    }

    /// Updates the hash with input data, processing it in 16-byte blocks.
    ///
    /// A trailing partial block is zero-padded, so each call starts a new
    /// block boundary.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        for chunk in data.chunks(GCM_BLOCK_SIZE) {
            self.update_block(chunk)?;
        }
        Ok(())
    }

    /// Updates the hash with a single block of at most 16 bytes, padding with zeros.
    pub fn update_block(&mut self, block: &[u8]) -> Result<()> {
        if block.len() > GCM_BLOCK_SIZE {
            validate::block_length("GHASH block", block.len(), GCM_BLOCK_SIZE)?;
        }

        for (y, x) in self.y.iter_mut().zip(block) {
            *y ^= x;
        }
        self.y = Self::gf_multiply(&self.y, &self.h);

        Ok(())
    }

    /// Updates the hash with the lengths of AAD and ciphertext.
    ///
    /// # Arguments
    /// * `aad_len` - Length of the Additional Authenticated Data in bytes.
    /// * `cipher_len` - Length of the ciphertext in bytes.
    pub fn update_lengths(&mut self, aad_len: u64, cipher_len: u64) -> Result<()> {
        let mut length_block = [0u8; GCM_BLOCK_SIZE];
        // AAD length in bits (big-endian)
        BigEndian::write_u64(&mut length_block[0..8], aad_len.wrapping_mul(8));
        // Ciphertext length in bits (big-endian)
        BigEndian::write_u64(&mut length_block[8..16], cipher_len.wrapping_mul(8));
        self.update_block(&length_block)
    }

    /// Returns the final hash value.
    pub fn finalize(&self) -> Block {
        self.y
    }

    /// Performs multiplication in GF(2^128) according to NIST SP 800-38D.
    ///
    /// This implements GHASH's specific bit ordering convention where:
    /// - The least significant bit of each byte represents the highest-degree coefficient
    /// - The most significant bit represents the lowest-degree coefficient
    pub fn gf_multiply(x: &Block, y: &Block) -> Block {
        let mut z = [0u8; GCM_BLOCK_SIZE];
        let mut v = *y;

        for i in 0..GCM_BLOCK_SIZE {
            // MSB first within each byte
            for j in 0..8 {
                let mask = ct_mask((x[i] >> (7 - j)) & 1 == 1);
                for k in 0..GCM_BLOCK_SIZE {
                    z[k] ^= v[k] & mask;
                }

                let lsb_mask = ct_mask(v[15] & 1 == 1);

                // Right shift V by 1 bit (in big-endian representation)
                let mut carry = 0;
                for byte in v.iter_mut() {
                    let next_carry = *byte & 1;
                    *byte = (*byte >> 1) | (carry << 7);
                    carry = next_carry;
                }

                v[0] ^= R & lsb_mask;
            }
        }

        barrier::compiler_fence_seq_cst();
        v.zeroize();
        z
    }
}

/// Process a message with GHASH
///
/// Hashes `pad(aad) ‖ pad(ciphertext) ‖ bitlen(aad) ‖ bitlen(ciphertext)`
/// under `h` and returns the accumulator.
pub fn process_ghash(h: &Block, aad: &[u8], ciphertext: &[u8]) -> Result<Block> {
    let mut ghash = GHash::new(h);
    ghash.update(aad)?;
    ghash.update(ciphertext)?;
    ghash.update_lengths(aad.len() as u64, ciphertext.len() as u64)?;
    Ok(ghash.finalize())
}
