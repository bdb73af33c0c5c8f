//! High-level AES-256 encryption for the aesgard library
//!
//! This crate owns the key, draws fresh IVs and nonces from a CSPRNG and
//! applies the wire layout on top of the primitives in `aesgard-algorithms`:
//!
//! | mode | output |
//! |---|---|
//! | ECB | `ciphertext` |
//! | CBC, CFB, OFB | `iv (16) ‖ ciphertext` |
//! | CTR | `nonce (12) ‖ ciphertext` |
//! | GCM | `nonce (12) ‖ ciphertext ‖ tag (16)` |
//!
//! ```
//! use aesgard_symmetric::{Aes256Cipher, Aes256Key, Result, SymmetricCipher};
//!
//! fn example() -> Result<()> {
//!     let key = Aes256Key::generate()?;
//!     let cipher = Aes256Cipher::from_key(&key);
//!
//!     let sealed = cipher.encrypt_gcm(b"Secret message", b"header")?;
//!     let opened = cipher.decrypt_gcm(&sealed, b"header")?;
//!     assert_eq!(opened, b"Secret message");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod aead;
pub mod aes;
pub mod cipher;
pub mod error;

// Re-export main types for convenience
pub use aes::{Aes256Cipher, Aes256Key};
pub use algorithms::padding::Padding;
pub use algorithms::types::Nonce;
pub use cipher::{Aead, SymmetricCipher};

// Re-export the API error system instead of custom error types
pub use error::{validate, Error, Result};
