//! Block cipher modes of operation
//!
//! Every mode borrows its block cipher and takes the IV or nonce
//! explicitly, so one expanded key can serve any number of concurrent
//! operations. ECB and CBC operate on block-aligned input; padding is
//! applied by the caller. CFB, OFB and CTR are stream modes and accept any
//! length.

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::{Counter, CounterBlock, Ctr};
pub use ecb::Ecb;
pub use ofb::Ofb;
