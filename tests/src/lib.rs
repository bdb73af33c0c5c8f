//! Shared fixtures for the aesgard integration and property tests

pub mod vectors;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic CSPRNG for reproducible IVs and nonces
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Decode a hex vector, ignoring embedded whitespace
pub fn unhex(s: &str) -> Vec<u8> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).unwrap_or_else(|e| panic!("bad hex vector {s:?}: {e}"))
}
