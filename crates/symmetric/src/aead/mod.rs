//! Authenticated encryption on the high-level cipher

pub mod gcm;
