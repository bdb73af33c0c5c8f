//! Validation utilities shared by the block core and the modes
//!
//! Each helper returns `Ok(())` when the check passes and the matching
//! [`Error`] kind otherwise, so call sites read as one line with `?`.

use super::types::{Error, Result};

/// Check that a buffer is exactly `expected` bytes long
pub fn block_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidBlockSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check that a buffer length is a multiple of `block_size`
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::InvalidBlockSize {
            context,
            expected: block_size,
            actual,
        });
    }
    Ok(())
}

/// Check that a key is exactly `expected` bytes long
pub fn key_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeySize { expected, actual });
    }
    Ok(())
}

/// Check that an IV or nonce is exactly `expected` bytes long
pub fn nonce_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidNonceSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check that a CFB segment size lies in `min..=max`
pub fn segment_size(size: usize, min: usize, max: usize) -> Result<()> {
    if size < min || size > max {
        return Err(Error::InvalidSegmentSize { size });
    }
    Ok(())
}

/// Check that a round index does not exceed `max`
pub fn round_index(index: usize, max: usize) -> Result<()> {
    if index > max {
        return Err(Error::RoundIndexOutOfRange { index, max });
    }
    Ok(())
}

/// Turn the outcome of a tag comparison into a result
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::AuthenticationFailure { algorithm });
    }
    Ok(())
}

/// Check that input holds at least `minimum` bytes
pub fn min_length(context: &'static str, actual: usize, minimum: usize) -> Result<()> {
    if actual < minimum {
        return Err(Error::CiphertextTooShort {
            context,
            minimum,
            actual,
        });
    }
    Ok(())
}
