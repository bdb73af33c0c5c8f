//! Security primitives and memory safety utilities
//!
//! This module provides foundational types used throughout aesgard to
//! ensure key material is wiped when it goes out of scope.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::SecretBuffer;

// Re-export memory barrier utilities
pub use memory::barrier;
