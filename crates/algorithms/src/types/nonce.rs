//! Type-safe nonce implementation with generic size parameter
//!
//! Used for both 16-byte IVs (CBC, CFB, OFB) and 12-byte nonces (CTR, GCM).
//! Nonces are public values and are not zeroized.

use core::fmt;
use core::ops::{Deref, DerefMut};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::error::{validate, Error, Result};
use crate::types::sealed::Sealed;
use params::utils::symmetric::{AES_IV_SIZE, AES_NONCE_SIZE};

/// Generic nonce type with compile-time size guarantee
#[derive(Clone, Copy)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

// Mark Nonce types as sealed
impl<const N: usize> Sealed for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    /// Create a new nonce from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed nonce
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::nonce_length("Nonce::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random nonce
    ///
    /// A generator failure is reported as
    /// [`Error::RandomSourceFailure`] and is not retried.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut data = [0u8; N];
        rng.try_fill_bytes(&mut data)
            .map_err(|e| Error::RandomSourceFailure {
                context: "nonce generation",
                message: e.to_string(),
            })?;
        Ok(Self { data })
    }

    /// Get the size of this nonce in bytes
    pub fn size() -> usize {
        N
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for Nonce<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>({:?})", N, &self.data[..])
    }
}

// Algorithm compatibility marker traits
/// Block-sized IVs for CBC, CFB and OFB
pub trait IvCompatible: Sealed {}
impl IvCompatible for Nonce<AES_IV_SIZE> {}

/// AES-GCM compatible nonce sizes (96-bit only)
pub trait AesGcmCompatible: Sealed {}
impl AesGcmCompatible for Nonce<AES_NONCE_SIZE> {}

/// AES-CTR compatible nonce sizes
pub trait AesCtrCompatible: Sealed {}
impl AesCtrCompatible for Nonce<AES_NONCE_SIZE> {}
