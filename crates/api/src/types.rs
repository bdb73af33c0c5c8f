//! Core types with security guarantees
//!
//! Key material crosses crate boundaries as [`SecretBytes`], which wipes
//! itself when dropped and never prints its contents.

use crate::error::{validate, Result};
use core::fmt;
use core::ops::{Deref, DerefMut};
use internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// This type provides:
/// - Compile-time size guarantees via const generics
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    ///
    /// A length mismatch is reported as [`Error::InvalidKeySize`](crate::Error::InvalidKeySize),
    /// since every secret of fixed width in this library is a key.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::key_length(slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Create an instance filled with zeros
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for SecretBytes<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}
