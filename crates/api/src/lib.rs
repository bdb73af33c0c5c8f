//! Public API types for the aesgard library
//!
//! This crate provides the error taxonomy shared by every aesgard crate,
//! the validation helpers that raise it, and the secret byte container used
//! for keys.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::SecretBytes;
