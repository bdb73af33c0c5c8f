//! Internal utilities for the aesgard library
//!
//! Not part of the public API. Items here may change without notice.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
