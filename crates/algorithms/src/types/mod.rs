//! Type-safe wrappers for cipher inputs
//!
//! Nonces and IVs carry their size in the type, and the sealed
//! compatibility traits restrict each mode to the sizes it accepts.

pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use nonce::{AesCtrCompatible, AesGcmCompatible, IvCompatible, Nonce};

// Import and re-export core types
pub use api::types::SecretBytes;
