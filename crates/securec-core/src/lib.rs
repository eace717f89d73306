// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # securec_core
//!
//! Result kinds, configured limits and the validation layer shared by every
//! securec primitive.
//!
//! Every mutating primitive in the workspace consults these predicates in a
//! fixed order before touching memory:
//!
//! 1. [`validate_ptr`]: null pointers ([`SecError::Null`])
//! 2. [`validate_size`]: zero or oversized capacities ([`SecError::Size`], [`SecError::Range`])
//! 3. [`validate_range`]: byte counts larger than the capacity ([`SecError::Overflow`])
//! 4. [`validate_overlap`]: intersecting ranges, copy only ([`SecError::Invalid`])
//!
//! ## Example
//!
//! ```rust
//! use securec_core::{SecError, validate_range, validate_overlap};
//!
//! assert_eq!(validate_range(0, 5), Err(SecError::Size));
//! assert_eq!(validate_range(4, 5), Err(SecError::Overflow));
//!
//! let buf = [0u8; 16];
//! let p = buf.as_ptr();
//! assert_eq!(validate_overlap(p, p.wrapping_add(2), 10), Err(SecError::Invalid));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod limits;
mod validate;

pub use error::{SEC_OK, SecError, SecResult, error_string, status_code};
pub use limits::{DEFAULT_MAX_BUFFER_SIZE, MAX_BUFFER_SIZE};
pub use validate::{
    ranges_overlap, validate_overlap, validate_ptr, validate_range, validate_size,
};
