//! Constants for AES-256 and its modes of operation

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Size of a key schedule word in bytes
pub const AES_WORD_SIZE: usize = 4;

/// Number of rounds for AES-256 (Nr)
pub const AES256_ROUNDS: usize = 14;

/// Number of round keys derived by the AES-256 key schedule
pub const AES256_ROUND_KEYS: usize = AES256_ROUNDS + 1;

/// Total size of the AES-256 expanded key in bytes
pub const AES256_EXPANDED_KEY_SIZE: usize = AES_BLOCK_SIZE * AES256_ROUND_KEYS;

/// Initialization vector size for CBC, CFB and OFB
pub const AES_IV_SIZE: usize = 16;

/// Nonce size for CTR and GCM
pub const AES_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Smallest CFB segment size in bytes
pub const CFB_MIN_SEGMENT_SIZE: usize = 1;

/// Largest CFB segment size in bytes
pub const CFB_MAX_SEGMENT_SIZE: usize = AES_BLOCK_SIZE;
