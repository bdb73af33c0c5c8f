//! Error handling for the AES primitives
//!
//! The primitives share the workspace error type so that a kind raised deep
//! inside the block core reaches the caller unchanged.

pub use api::error::{validate, Error, Result};
