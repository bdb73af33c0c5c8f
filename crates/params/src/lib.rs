//! Constant values for aesgard cryptographic operations
//!
//! This library provides the sizes and round counts shared by every
//! aesgard crate.

#![no_std]

pub mod utils;
