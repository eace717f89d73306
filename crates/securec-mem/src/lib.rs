// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # securec_mem
//!
//! Bounds-checked memory primitives: copy, move, set, compare and zero.
//!
//! Two surfaces are provided:
//!
//! - The crate root works on slices. A slice length is the declared capacity,
//!   and borrow rules already exclude null and overlapping arguments.
//! - [`raw`] works on `(pointer, capacity)` pairs and runs the full check
//!   sequence, including null and overlap detection.
//!
//! Whenever a write is refused with [`SecError::Overflow`](securec_core::SecError::Overflow)
//! the whole destination capacity is cleared with volatile writes before the
//! call returns.
//!
//! ## Example
//!
//! ```rust
//! use securec_core::SecError;
//! use securec_mem::{copy, set};
//!
//! let mut dest = [0xFFu8; 5];
//! assert_eq!(copy(&mut dest, b"0123456789", 10), Err(SecError::Overflow));
//! assert_eq!(dest, [0u8; 5]);
//!
//! let mut buf = [0u8; 20];
//! set(&mut buf, b'A', 10).expect("Failed to set(..)");
//! assert_eq!(&buf[..10], b"AAAAAAAAAA");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod mem;
mod volatile;

pub mod raw;

pub use mem::{compare, copy, move_bytes, move_within, set, zero};
pub use volatile::{volatile_fill, volatile_fill_raw};
