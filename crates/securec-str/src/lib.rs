// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # securec_str
//!
//! Bounds-checked primitives for NUL-terminated byte strings.
//!
//! A capacity always includes room for the terminator, and every successful
//! write leaves the destination NUL-terminated within its capacity. When a
//! write cannot fit, the whole destination is cleared and
//! [`SecError::Overflow`](securec_core::SecError::Overflow) is returned.
//!
//! The crate root works on slices: a slice without a NUL byte is treated as
//! terminated at its end. [`raw`] takes pointers and adds null checks.
//!
//! ## Example
//!
//! ```rust
//! use securec_core::SecError;
//! use securec_str::{bounded_length, copy};
//!
//! let mut dest = [0xFFu8; 6];
//! copy(&mut dest, b"hi\0").expect("Failed to copy(..)");
//! assert_eq!(&dest[..3], b"hi\0");
//! assert_eq!(bounded_length(&dest, dest.len()), 2);
//!
//! let mut small = [0xFFu8; 4];
//! assert_eq!(copy(&mut small, b"hello"), Err(SecError::Overflow));
//! assert_eq!(small, [0u8; 4]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod string;

pub mod raw;

pub use string::{
    bounded_compare, bounded_copy, bounded_length, compare, concat, copy, try_bounded_length,
};
