//! AES-256 keys and the high-level cipher
//!
//! GCM lives under [`crate::aead::gcm`] and is implemented on the same
//! [`Aes256Cipher`].

pub mod cipher;
pub mod keys;

pub use cipher::Aes256Cipher;
pub use keys::Aes256Key;
