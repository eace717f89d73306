// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # securec
//!
//! Bounds-checked, overlap-aware memory and string primitives for code that
//! handles sensitive data.
//!
//! Every mutating call refuses to write outside the caller-declared buffer.
//! When a request cannot be served safely, the destination is left zeroed
//! rather than holding partial or stale bytes.
//!
//! # Modules
//!
//! - [`mem`]: copy, move, set, compare, zero
//! - [`string`]: NUL-terminated copy, bounded copy, concat, length, compare
//! - [`sensitive`]: constant-time compare, fenced zeroization, random fill
//! - [`rand`]: the injectable [`EntropySource`](rand::EntropySource)
//! - [`fmt`]: bounded formatting into a byte buffer
//! - `last_error` (feature `std`): per-thread record of the last outcome
//!
//! Each primitive has a slice form at the module root and a pointer form in
//! the module's `raw` submodule.
//!
//! # Quick Start
//!
//! ```rust
//! use securec::{SecError, mem, sec_format, string};
//!
//! let mut key = [0u8; 16];
//! mem::copy(&mut key, b"0123456789abcdef", 16).expect("Failed to copy(..)");
//!
//! let mut name = [0u8; 4];
//! assert_eq!(string::copy(&mut name, b"hello\0"), Err(SecError::Overflow));
//! assert_eq!(name, [0u8; 4]);
//!
//! let mut line = [0u8; 8];
//! let out = sec_format!(&mut line, "id={}", 42).expect("Failed to format(..)");
//! assert_eq!(&line[..out.len + 1], b"id=42\0");
//! ```
//!
//! # Status codes
//!
//! Results carry a [`SecError`]. For interop, [`status_code`] and
//! [`error_string`] expose the stable numeric codes (`0` for success, `-1`
//! to `-7` for failures).
//!
//! # Configuration
//!
//! [`MAX_BUFFER_SIZE`] (10 MiB by default) caps every capacity argument. Set
//! `SECUREC_MAX_BUFFER` in the build environment to change it.
//!
//! # Logging
//!
//! Refused writes are reported through `tracing` (`warn` for defensive
//! clears, `debug` for overlap refusals, `error` for entropy failures).
//! Buffer contents are never logged. No subscriber is installed.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod fmt;
#[cfg(any(test, feature = "std"))]
pub mod last_error;
pub mod support;

mod version;

pub use securec_core::{
    DEFAULT_MAX_BUFFER_SIZE, MAX_BUFFER_SIZE, SEC_OK, SecError, SecResult, error_string,
    ranges_overlap, status_code, validate_overlap, validate_ptr, validate_range, validate_size,
};
pub use securec_mem as mem;
pub use securec_rand as rand;
pub use securec_sensitive as sensitive;
pub use securec_str as string;

pub use version::{VERSION, version};
