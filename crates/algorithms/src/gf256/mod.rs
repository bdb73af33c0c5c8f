//! Arithmetic in GF(2^8) with the AES reduction polynomial
//!
//! Elements are bytes. Addition is XOR and multiplication is carry-less
//! multiplication reduced modulo x^8 + x^4 + x^3 + x + 1 (0x11B).

use crate::block::Block;
use crate::error::{validate, Result};
use params::utils::symmetric::AES_BLOCK_SIZE;

/// Low byte of the reduction polynomial, applied when x^7 overflows
const REDUCTION: u8 = 0x1B;

/// Add two field elements
#[inline(always)]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtract two field elements (identical to [`add`] in characteristic 2)
#[inline(always)]
pub fn sub(a: u8, b: u8) -> u8 {
    add(a, b)
}

/// Multiply two field elements
#[inline(always)]
pub fn mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        // if hi was set, reduce by 0x1B
        a ^= ((hi != 0) as u8) * REDUCTION;
        b >>= 1;
    }
    p
}

/// XOR two blocks
#[inline]
pub fn xor_blocks(a: &Block, b: &Block) -> Block {
    internal::constant_time::ct_xor(a, b)
}

/// XOR `src` into `dst`; both slices must have the same length
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) -> Result<()> {
    validate::block_length("GF(2^8) xor", src.len(), dst.len())?;
    internal::constant_time::xor_in_place(dst, src);
    Ok(())
}

/// XOR `src` into a single block
#[inline]
pub(crate) fn xor_into_block(dst: &mut Block, src: &Block) {
    for i in 0..AES_BLOCK_SIZE {
        dst[i] ^= src[i];
    }
}
