//! Authenticated Encryption with Associated Data (AEAD)
//!
//! AES-256-GCM over the shared counter-mode engine.

pub mod gcm;

pub use gcm::Gcm;
