// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pointer-based forms of the secret-handling primitives.

use core::slice;

use securec_core::{SecResult, validate_ptr};
use securec_rand::EntropySource;

use crate::compare::ct_eq;

/// Compares `len` bytes at `a` and `b` in constant time.
///
/// # Errors
///
/// [`SecError::Null`](securec_core::SecError::Null) for `a` then `b`.
///
/// # Safety
///
/// Both pointers must be valid for reads of `len` bytes.
pub unsafe fn constant_time_compare(a: *const u8, b: *const u8, len: usize) -> SecResult<bool> {
    validate_ptr(a)?;
    validate_ptr(b)?;

    // SAFETY: non-null and readable for `len` bytes per the caller contract.
    let (a, b) = unsafe { (slice::from_raw_parts(a, len), slice::from_raw_parts(b, len)) };

    Ok(ct_eq(a, b))
}

/// Zeroes `len` bytes at `buf` and fences the stores.
///
/// # Errors
///
/// [`SecError::Null`](securec_core::SecError::Null), then size checks on `len`.
///
/// # Safety
///
/// `buf` must be valid for writes of `len` bytes.
#[must_use = "the result reports whether the buffer was cleared"]
pub unsafe fn zeroize_sensitive(buf: *mut u8, len: usize) -> SecResult<()> {
    validate_ptr(buf)?;
    securec_core::validate_size(len)?;

    // SAFETY: validated above; the caller vouches for `len` writable bytes.
    let buf = unsafe { slice::from_raw_parts_mut(buf, len) };

    crate::zeroize_sensitive(buf)
}

/// Fills `len` bytes at `buf` from `source`.
///
/// # Errors
///
/// [`SecError::Null`](securec_core::SecError::Null), then the errors of
/// [`random_bytes`](crate::random_bytes).
///
/// # Safety
///
/// `buf` must be valid for writes of `len` bytes.
#[must_use = "the result reports whether the buffer holds random bytes"]
pub unsafe fn random_bytes<E: EntropySource + ?Sized>(
    buf: *mut u8,
    len: usize,
    source: &E,
) -> SecResult<()> {
    validate_ptr(buf)?;
    securec_core::validate_size(len)?;

    // SAFETY: validated above; the caller vouches for `len` writable bytes.
    let buf = unsafe { slice::from_raw_parts_mut(buf, len) };

    crate::random_bytes(buf, source)
}
