//! AES-256 primitives and modes of operation
//!
//! This crate implements the AES-256 block cipher from first principles
//! (GF(2^8) arithmetic, a generated S-box, the key schedule and the round
//! transforms) and builds the ECB, CBC, CFB, OFB, CTR and GCM modes on top of
//! it. Every mode takes its IV or nonce explicitly; fresh randomness and the
//! wire layout are handled by `aesgard-symmetric`.
//!
//! # Security Features
//!
//! - Expanded keys live in zeroizing storage and are wiped on drop
//! - Keystream temporaries are wrapped in `Zeroizing`
//! - GCM tags are compared in constant time
//!
//! The table-driven S-box is not hardened against cache-timing attacks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Finite field arithmetic
pub mod gf256;

// Block cipher implementations
pub mod block;
pub use block::{Aes256, Block, BlockCipher, CipherAlgorithm};
pub use block::modes::{Cbc, Cfb, Counter, CounterBlock, Ctr, Ecb, Ofb};

// AEAD cipher implementations
pub mod aead;
pub use aead::gcm::{process_ghash, GHash, Gcm};

// Padding schemes
pub mod padding;
pub use padding::Padding;

// Type system
pub mod types;
pub use types::{Nonce, SecretBytes};

// Re-export security types from aesgard-common
pub use common::security::{barrier, SecretBuffer};
