//! Error handling for the high-level cipher
//!
//! The primitives already speak `api::Error`, so errors pass through this
//! crate unchanged.

pub use api::error::{validate, Error, Result};
