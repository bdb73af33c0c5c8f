//! AES-256 key expansion
//!
//! Expands a 32-byte key into fifteen 16-byte round keys. Words are handled
//! as 4-byte arrays so the schedule reads directly in FIPS-197 byte order.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::sbox::sub_byte;
use crate::block::Block;
use crate::error::{validate, Error, Result};
use crate::gf256;
use common::security::SecretBuffer;
use params::utils::symmetric::{
    AES256_EXPANDED_KEY_SIZE, AES256_KEY_SIZE, AES256_ROUNDS, AES_BLOCK_SIZE, AES_WORD_SIZE,
};

/// Round constant for schedule step `idx`
///
/// `rcon(0)` is 0; otherwise `rcon(idx)` is `x^(idx-1)` in GF(2^8).
pub fn rcon(idx: usize) -> u8 {
    if idx == 0 {
        return 0;
    }
    let mut c = 1u8;
    for _ in 1..idx {
        c = gf256::mul(c, 0x02);
    }
    c
}

/// Rotates a word left by one byte
#[inline(always)]
fn rot_word(word: [u8; AES_WORD_SIZE]) -> [u8; AES_WORD_SIZE] {
    [word[1], word[2], word[3], word[0]]
}

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: [u8; AES_WORD_SIZE]) -> [u8; AES_WORD_SIZE] {
    [
        sub_byte(word[0]),
        sub_byte(word[1]),
        sub_byte(word[2]),
        sub_byte(word[3]),
    ]
}

/// The expanded key schedule
///
/// Read-only once built and wiped on drop. Round keys are only reachable
/// through [`RoundKeys::round_key`], which bounds-checks the round index.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    bytes: SecretBuffer<AES256_EXPANDED_KEY_SIZE>,
}

impl RoundKeys {
    /// Round key for `round`, with 0 ≤ `round` ≤ 14
    pub fn round_key(&self, round: usize) -> Result<&Block> {
        validate::round_index(round, AES256_ROUNDS)?;

        let offset = round * AES_BLOCK_SIZE;
        <&Block>::try_from(&self.bytes.as_slice()[offset..offset + AES_BLOCK_SIZE]).map_err(|_| {
            Error::RoundIndexOutOfRange {
                index: round,
                max: AES256_ROUNDS,
            }
        })
    }

    /// The full 240-byte schedule
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Schedule length in bytes
    pub fn len(&self) -> usize {
        AES256_EXPANDED_KEY_SIZE
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RoundKeys([REDACTED])")
    }
}

/// Expand a key of any length, rejecting everything but 32 bytes
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    validate::key_length(key.len(), AES256_KEY_SIZE)?;

    let mut fixed = Zeroizing::new([0u8; AES256_KEY_SIZE]);
    fixed.copy_from_slice(key);
    Ok(expand(&fixed))
}

/// Expand a 32-byte key
pub(crate) fn expand(key: &[u8; AES256_KEY_SIZE]) -> RoundKeys {
    let mut w = Zeroizing::new([0u8; AES256_EXPANDED_KEY_SIZE]);
    w[..AES256_KEY_SIZE].copy_from_slice(key);

    let mut offset = AES256_KEY_SIZE;
    while offset < AES256_EXPANDED_KEY_SIZE {
        let mut temp = [w[offset - 4], w[offset - 3], w[offset - 2], w[offset - 1]];

        if offset % AES256_KEY_SIZE == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= rcon(offset / AES256_KEY_SIZE);
        } else if offset % AES256_KEY_SIZE == 16 {
            temp = sub_word(temp);
        }

        for i in 0..AES_WORD_SIZE {
            w[offset + i] = w[offset + i - AES256_KEY_SIZE] ^ temp[i];
        }
        temp.zeroize();
        offset += AES_WORD_SIZE;
    }

    RoundKeys {
        bytes: SecretBuffer::new(*w),
    }
}
