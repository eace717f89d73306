// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # securec_sensitive
//!
//! Primitives for handling secrets:
//!
//! - [`constant_time_compare`]: equality whose running time does not depend
//!   on where (or whether) the inputs differ
//! - [`zeroize_sensitive`]: volatile clearing followed by a compiler fence
//! - [`random_bytes`]: fills a buffer from an injected [`EntropySource`]
//!
//! As in the other securec crates, [`raw`] exposes the pointer-based forms
//! with null checks.
//!
//! ## Example
//!
//! ```rust
//! use securec_sensitive::{constant_time_compare, random_bytes_os, zeroize_sensitive};
//!
//! let mut key = [0u8; 32];
//! random_bytes_os(&mut key).expect("Failed to random_bytes_os(..)");
//!
//! let copy = key;
//! assert_eq!(constant_time_compare(&key, &copy, key.len()), Ok(true));
//!
//! zeroize_sensitive(&mut key).expect("Failed to zeroize_sensitive(..)");
//! assert_eq!(key, [0u8; 32]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod compare;
mod random;
mod zeroize;

pub mod raw;

pub use compare::constant_time_compare;
pub use random::{random_bytes, random_bytes_os};
pub use zeroize::zeroize_sensitive;

pub use securec_rand::{EntropyError, EntropySource, SystemEntropySource};
