//! # aesgard
//!
//! A software-only AES-256 library: the block cipher, its key schedule and
//! GHASH are implemented from scratch, with ECB, CBC, CFB, OFB, CTR and GCM
//! built on top.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! aesgard = "0.3"
//! ```
//!
//! ```
//! use aesgard::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let key = Aes256Key::derive_from_secret(b"a secret of any length");
//! let cipher = Aes256Cipher::from_key(&key);
//!
//! let sealed = cipher.encrypt_gcm(b"attack at dawn", b"v1")?;
//! assert_eq!(cipher.decrypt_gcm(&sealed, b"v1")?, b"attack at dawn");
//!
//! let ciphertext = cipher.encrypt_cbc(b"attack at dawn", Padding::Pkcs7)?;
//! assert_eq!(cipher.decrypt_cbc(&ciphertext, Padding::Pkcs7)?, b"attack at dawn");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): the primitive layer with explicit IVs and nonces
//! - `symmetric` (default): the high-level [`symmetric::Aes256Cipher`]
//! - `std` (default): standard library support
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`aesgard-api`]: the error type and shared fixed-size types
//! - [`aesgard-params`]: size and round constants
//! - [`aesgard-algorithms`]: GF(2^8), the AES-256 core, modes, GHASH/GCM, padding
//! - [`aesgard-symmetric`]: key handling, IV generation and wire layout

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use aesgard_api as api;
pub use aesgard_common as common;
pub use aesgard_internal as internal;
pub use aesgard_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use aesgard_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use aesgard_symmetric as symmetric;

pub use zeroize;

/// Common imports for aesgard users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export security types
    pub use crate::api::SecretBytes;
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        Aes256, BlockCipher, Cbc, Cfb, Ctr, Ecb, Gcm, Nonce, Ofb, Padding,
    };

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{Aead, Aes256Cipher, Aes256Key, SymmetricCipher};
}
