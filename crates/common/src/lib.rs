//! Common implementations and shared functionality for the aesgard library
//!
//! This crate provides the zeroizing storage type used for expanded keys
//! and the memory barrier helpers used around secret-dependent code.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;

// Re-export memory barrier utilities
pub use security::memory::barrier;
