//! Error type definitions for cipher operations

use thiserror::Error as ThisError;

/// Primary error type for every aesgard operation
///
/// All kinds except [`Error::AuthenticationFailure`] describe a local
/// validation failure and are raised before any cryptographic work starts.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The supplied key is not exactly 32 bytes
    #[error("invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        /// Required key length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A block or block-aligned buffer has the wrong length
    #[error("{context}: invalid block size, expected {expected} bytes, got {actual}")]
    InvalidBlockSize {
        /// Operation that rejected the buffer
        context: &'static str,
        /// Required length (or alignment) in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// The CFB segment size is outside 1..=16
    #[error("invalid CFB segment size {size}: must be between 1 and 16 bytes")]
    InvalidSegmentSize {
        /// Segment size that was requested
        size: usize,
    },

    /// An IV or nonce has the wrong length, or the input is shorter than its prefix
    #[error("{context}: invalid nonce size, expected {expected} bytes, got {actual}")]
    InvalidNonceSize {
        /// Operation that rejected the nonce
        context: &'static str,
        /// Required nonce length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A round key was requested past the end of the schedule
    #[error("round index {index} out of range: maximum is {max}")]
    RoundIndexOutOfRange {
        /// Requested round
        index: usize,
        /// Last valid round
        max: usize,
    },

    /// The random number generator could not produce bytes
    #[error("{context}: random source failure: {message}")]
    RandomSourceFailure {
        /// What the random bytes were for
        context: &'static str,
        /// Message reported by the generator
        message: String,
    },

    /// Tag verification failed
    #[error("{algorithm}: authentication failed")]
    AuthenticationFailure {
        /// Authenticated mode that rejected the input
        algorithm: &'static str,
    },

    /// Padding bytes are malformed
    #[error("invalid {scheme} padding")]
    InvalidPadding {
        /// Padding scheme that rejected the input
        scheme: &'static str,
    },

    /// Input cannot hold the fixed-size prefix and suffix of the wire format
    #[error("{context}: ciphertext too short, need at least {minimum} bytes, got {actual}")]
    CiphertextTooShort {
        /// Operation that rejected the input
        context: &'static str,
        /// Smallest acceptable length
        minimum: usize,
        /// Length that was supplied
        actual: usize,
    },
}

/// Result type for aesgard operations
pub type Result<T> = core::result::Result<T, Error>;
