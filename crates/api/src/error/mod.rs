//! Error handling for the aesgard ecosystem
//!
//! There is exactly one error type. Helpers deep inside the block core
//! return it unchanged, so the kind a caller observes at the mode layer is
//! the kind that was raised.

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};
