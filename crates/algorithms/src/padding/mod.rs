//! Block padding schemes for ECB and CBC
//!
//! Both schemes always add between 1 and 16 bytes, so block-aligned input
//! gains a full block of padding.

use crate::error::{Error, Result};
use params::utils::symmetric::AES_BLOCK_SIZE;

/// Padding applied before ECB or CBC encryption
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// Append zero bytes
    ///
    /// Unpadding strips every trailing 0x00, so plaintext that itself ends
    /// in zero bytes does not round-trip. Prefer [`Padding::Pkcs7`].
    Zero,
    /// PKCS#7: append `n` copies of the byte `n`
    #[default]
    Pkcs7,
}

impl Padding {
    /// Scheme name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Padding::Zero => "zero",
            Padding::Pkcs7 => "PKCS#7",
        }
    }

    /// Pad `data` to the next multiple of the block size
    pub fn pad(&self, data: &[u8]) -> Vec<u8> {
        let pad_len = AES_BLOCK_SIZE - data.len() % AES_BLOCK_SIZE;
        let fill = match self {
            Padding::Zero => 0u8,
            Padding::Pkcs7 => pad_len as u8,
        };

        let mut padded = Vec::with_capacity(data.len() + pad_len);
        padded.extend_from_slice(data);
        padded.resize(data.len() + pad_len, fill);
        padded
    }

    /// Remove padding added by [`Padding::pad`]
    pub fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Padding::Zero => {
                let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                Ok(data[..end].to_vec())
            }
            Padding::Pkcs7 => {
                let scheme = self.name();
                if data.is_empty() || data.len() % AES_BLOCK_SIZE != 0 {
                    return Err(Error::InvalidPadding { scheme });
                }

                let n = data[data.len() - 1] as usize;
                if n == 0 || n > AES_BLOCK_SIZE {
                    return Err(Error::InvalidPadding { scheme });
                }
                let (body, tail) = data.split_at(data.len() - n);
                if tail.iter().any(|&b| b as usize != n) {
                    return Err(Error::InvalidPadding { scheme });
                }
                Ok(body.to_vec())
            }
        }
    }
}
