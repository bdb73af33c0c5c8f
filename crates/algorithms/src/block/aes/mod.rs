//! AES-256 block cipher
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! with a 256-bit key as specified in FIPS 197.
//!
//! The state is a 16-byte array in column-major order: row `r`, column `c`
//! lives at offset `r + 4*c`. All round transforms take `&mut Block`, so the
//! size invariant holds by construction; only the slice-based
//! [`BlockCipher`] entry points need a runtime length check.
//!
//! ## Side channels
//!
//! SubBytes is a table lookup. This implementation gives no protection
//! against cache-timing attacks and should not be used where an attacker
//! can observe memory access patterns.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Block, BlockCipher, CipherAlgorithm};
use crate::error::{validate, Error, Result};
use crate::gf256;
use crate::types::SecretBytes;
use common::security::barrier;
use params::utils::symmetric::{AES256_KEY_SIZE, AES256_ROUNDS, AES_BLOCK_SIZE};

pub mod key_schedule;
pub mod sbox;

pub use key_schedule::{expand_key, rcon, RoundKeys};
pub use sbox::{generate_inv_sbox, generate_sbox, INV_SBOX, SBOX};

/// Rows of the MixColumns matrix
const MDS: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Rows of the InvMixColumns matrix
const INV_MDS: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;
    const ROUNDS: usize = AES256_ROUNDS;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// SubBytes step
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox::sub_byte(*byte);
    }
}

/// Inverse SubBytes
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox::inv_sub_byte(*byte);
    }
}

/// ShiftRows step: row `r` rotates left by `r`
pub fn shift_rows(state: &mut Block) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[r + 4 * c] = temp[r + 4 * ((c + r) % 4)];
        }
    }
}

/// Inverse ShiftRows: row `r` rotates right by `r`
pub fn inv_shift_rows(state: &mut Block) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[r + 4 * c] = temp[r + 4 * ((c + 4 - r) % 4)];
        }
    }
}

/// Multiply every column by `matrix`
#[inline(always)]
fn mix_with(state: &mut Block, matrix: &[[u8; 4]; 4]) {
    for c in 0..4 {
        let i = c * 4;
        let col = [state[i], state[i + 1], state[i + 2], state[i + 3]];
        for (r, row) in matrix.iter().enumerate() {
            state[i + r] = gf256::mul(row[0], col[0])
                ^ gf256::mul(row[1], col[1])
                ^ gf256::mul(row[2], col[2])
                ^ gf256::mul(row[3], col[3]);
        }
    }
}

/// MixColumns step
pub fn mix_columns(state: &mut Block) {
    mix_with(state, &MDS);
}

/// Inverse MixColumns
pub fn inv_mix_columns(state: &mut Block) {
    mix_with(state, &INV_MDS);
}

/// AddRoundKey step
///
/// Fails with [`Error::RoundIndexOutOfRange`] for `round > 14`.
pub fn add_round_key(state: &mut Block, round_keys: &RoundKeys, round: usize) -> Result<()> {
    let key = round_keys.round_key(round)?;
    gf256::xor_into_block(state, key);
    Ok(())
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: RoundKeys,
}

impl core::fmt::Debug for Aes256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes256([REDACTED])")
    }
}

impl Aes256 {
    /// Build a cipher from a key of unchecked length
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self {
            round_keys: expand_key(key)?,
        })
    }

    /// The expanded key schedule
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypt one block held in a fixed-size array
    pub fn encrypt_state(&self, state: &mut Block) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        add_round_key(state, &self.round_keys, 0)?;

        for round in 1..AES256_ROUNDS {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, &self.round_keys, round)?;
        }

        // Final round has no MixColumns
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, &self.round_keys, AES256_ROUNDS)?;

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Decrypt one block held in a fixed-size array
    pub fn decrypt_state(&self, state: &mut Block) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        add_round_key(state, &self.round_keys, AES256_ROUNDS)?;

        for round in (1..AES256_ROUNDS).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, &self.round_keys, round)?;
            inv_mix_columns(state);
        }

        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, &self.round_keys, 0)?;

        barrier::compiler_fence_seq_cst();
        Ok(())
    }
}

/// Copy a slice into a block after checking its length
fn to_state(context: &'static str, block: &[u8]) -> Result<Block> {
    validate::block_length(context, block.len(), AES_BLOCK_SIZE)?;
    let mut state = [0u8; AES_BLOCK_SIZE];
    state.copy_from_slice(block);
    Ok(state)
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;
    type Key = SecretBytes<AES256_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Self {
            round_keys: key_schedule::expand(key),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let mut state = to_state("AES-256 encrypt block", block)?;
        self.encrypt_state(&mut state)?;
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let mut state = to_state("AES-256 decrypt block", block)?;
        self.decrypt_state(&mut state)?;
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Key> {
        let mut key = SecretBytes::<AES256_KEY_SIZE>::zeroed();
        rng.try_fill_bytes(&mut key[..])
            .map_err(|e| Error::RandomSourceFailure {
                context: "AES-256 key generation",
                message: e.to_string(),
            })?;
        Ok(key)
    }
}
