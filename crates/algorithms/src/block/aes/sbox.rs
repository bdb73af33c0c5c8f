//! Rijndael S-box construction
//!
//! The tables are derived rather than hard-coded. `p` walks the
//! multiplicative group of GF(2^8) with generator 0x03 while `q` walks it
//! backwards, so `q` is always the inverse of `p`. Applying the affine map to
//! `q` yields `S[p]` without computing any inverse explicitly.

use once_cell::sync::Lazy;

use crate::gf256;

/// Size of a byte substitution table
pub const SBOX_SIZE: usize = 256;

/// Constant of the Rijndael affine transform
const AFFINE_CONSTANT: u8 = 0x63;

/// Forward S-box, computed on first use
pub static SBOX: Lazy<[u8; SBOX_SIZE]> = Lazy::new(generate_sbox);

/// Inverse S-box, computed on first use
pub static INV_SBOX: Lazy<[u8; SBOX_SIZE]> = Lazy::new(|| invert(&SBOX));

/// Rijndael affine transform over GF(2)
#[inline(always)]
fn affine(q: u8) -> u8 {
    q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4) ^ AFFINE_CONSTANT
}

/// Divide by 0x03 in GF(2^8)
///
/// Multiplying by 0x03 is `q ^ (q << 1)` up to reduction, so its inverse is
/// the prefix XOR `q ^= q << 1; q ^= q << 2; q ^= q << 4` followed by a
/// correction when the top bit is set.
#[inline(always)]
fn div3(q: u8) -> u8 {
    let mut q = q;
    q ^= q << 1;
    q ^= q << 2;
    q ^= q << 4;
    if q & 0x80 != 0 {
        q ^= 0x09;
    }
    q
}

/// Build the forward S-box
pub fn generate_sbox() -> [u8; SBOX_SIZE] {
    let mut sbox = [0u8; SBOX_SIZE];
    let mut p: u8 = 1;
    let mut q: u8 = 1;

    loop {
        p = gf256::mul(p, 0x03);
        q = div3(q);
        sbox[p as usize] = affine(q);
        if p == 1 {
            break;
        }
    }

    // 0 has no inverse and maps to the affine constant
    sbox[0] = AFFINE_CONSTANT;
    sbox
}

/// Build the inverse S-box
pub fn generate_inv_sbox() -> [u8; SBOX_SIZE] {
    invert(&generate_sbox())
}

/// Positional inverse of a permutation table
fn invert(table: &[u8; SBOX_SIZE]) -> [u8; SBOX_SIZE] {
    let mut inv = [0u8; SBOX_SIZE];
    for (i, &s) in table.iter().enumerate() {
        inv[s as usize] = i as u8;
    }
    inv
}

/// Substitute one byte through the forward S-box
#[inline(always)]
pub fn sub_byte(b: u8) -> u8 {
    SBOX[b as usize]
}

/// Substitute one byte through the inverse S-box
#[inline(always)]
pub fn inv_sub_byte(b: u8) -> u8 {
    INV_SBOX[b as usize]
}
