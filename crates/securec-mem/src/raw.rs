// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pointer-based memory primitives.
//!
//! Each function runs the full validation sequence in order: pointers, then
//! capacity, then count against capacity, then (copy only) overlap. Nothing
//! is written unless every check passes, except that an
//! [`SecError::Overflow`] clears the whole destination capacity.

use core::cmp::Ordering;
use core::ptr;
use core::slice;

use securec_core::{
    SecError, SecResult, validate_overlap, validate_ptr, validate_range, validate_size,
};

use crate::mem::compare_bytes;
use crate::volatile::volatile_fill_raw;

/// Runs `validate_range`, clearing `capacity` bytes at `dest` on overflow.
///
/// # Safety
///
/// `dest` must be non-null and valid for writes of `capacity` bytes whenever
/// `capacity` passes `validate_size`.
unsafe fn guard_destination(
    op: &'static str,
    dest: *mut u8,
    capacity: usize,
    count: usize,
) -> SecResult<()> {
    match validate_range(capacity, count) {
        Err(SecError::Overflow) => {
            // SAFETY: forwarded from the caller.
            unsafe { volatile_fill_raw(dest, capacity, 0) };
            tracing::warn!(
                op,
                capacity,
                requested = count,
                "overflow refused, destination cleared"
            );
            Err(SecError::Overflow)
        }
        other => other,
    }
}

/// Copies `count` bytes from `src` to `dest`; the ranges must not overlap.
///
/// # Errors
///
/// Checked in order:
/// 1. [`SecError::Null`]: `dest` or `src` is null.
/// 2. [`SecError::Size`] / [`SecError::Range`]: invalid `capacity`.
/// 3. [`SecError::Overflow`]: `count > capacity`; `capacity` bytes at `dest`
///    are zeroed.
/// 4. [`SecError::Invalid`]: `[dest, dest + count)` and `[src, src + count)`
///    intersect; `dest` untouched.
///
/// # Safety
///
/// - `dest` must be valid for writes of `capacity` bytes.
/// - `src` must be valid for reads of `count` bytes when `count <= capacity`.
#[must_use = "the result reports whether the copy happened"]
pub unsafe fn copy(dest: *mut u8, capacity: usize, src: *const u8, count: usize) -> SecResult<()> {
    validate_ptr(dest)?;
    validate_ptr(src)?;
    validate_size(capacity)?;
    // SAFETY: `dest` is non-null and the caller vouches for `capacity` bytes.
    unsafe { guard_destination("copy", dest, capacity, count)? };

    if let Err(e) = validate_overlap(dest, src, count) {
        tracing::debug!(op = "copy", requested = count, "overlapping ranges refused");
        return Err(e);
    }

    // SAFETY: both ranges are valid for `count` bytes and do not overlap.
    unsafe { ptr::copy_nonoverlapping(src, dest, count) };

    Ok(())
}

/// Copies `count` bytes from `src` to `dest`; the ranges may overlap.
///
/// The copy direction follows the relative position of the two ranges, so
/// the result equals copying `src` to a temporary first.
///
/// # Errors
///
/// Same as [`copy`] without the overlap check.
///
/// # Safety
///
/// - `dest` must be valid for writes of `capacity` bytes.
/// - `src` must be valid for reads of `count` bytes when `count <= capacity`.
///
/// # Example
///
/// ```
/// use securec_mem::raw;
///
/// let mut buf = *b"abcdef__";
/// let p = buf.as_mut_ptr();
/// // SAFETY: both ranges lie inside `buf`.
/// unsafe { raw::move_bytes(p.add(2), 6, p, 6) }.expect("Failed to move_bytes(..)");
/// assert_eq!(&buf, b"ababcdef");
/// ```
#[must_use = "the result reports whether the move happened"]
pub unsafe fn move_bytes(
    dest: *mut u8,
    capacity: usize,
    src: *const u8,
    count: usize,
) -> SecResult<()> {
    validate_ptr(dest)?;
    validate_ptr(src)?;
    validate_size(capacity)?;
    // SAFETY: `dest` is non-null and the caller vouches for `capacity` bytes.
    unsafe { guard_destination("move", dest, capacity, count)? };

    // SAFETY: both ranges are valid for `count` bytes; `ptr::copy` permits overlap.
    unsafe { ptr::copy(src, dest, count) };

    Ok(())
}

/// Writes `value` into the first `count` bytes at `dest` with volatile stores.
///
/// # Errors
///
/// [`SecError::Null`], then [`SecError::Size`] / [`SecError::Range`], then
/// [`SecError::Overflow`] (all `capacity` bytes zeroed).
///
/// # Safety
///
/// `dest` must be valid for writes of `capacity` bytes.
#[must_use = "the result reports whether the fill happened"]
pub unsafe fn set(dest: *mut u8, capacity: usize, value: u8, count: usize) -> SecResult<()> {
    validate_ptr(dest)?;
    validate_size(capacity)?;
    // SAFETY: `dest` is non-null and the caller vouches for `capacity` bytes.
    unsafe { guard_destination("set", dest, capacity, count)? };

    // SAFETY: `count <= capacity`.
    unsafe { volatile_fill_raw(dest, count, value) };

    Ok(())
}

/// Compares `min(max1, max2)` bytes of `buf1` and `buf2`.
///
/// # Errors
///
/// [`SecError::Null`] for `buf1` then `buf2`, then size checks on `max1`
/// then `max2`.
///
/// # Safety
///
/// `buf1` must be valid for reads of `max1` bytes and `buf2` of `max2` bytes.
pub unsafe fn compare(
    buf1: *const u8,
    max1: usize,
    buf2: *const u8,
    max2: usize,
) -> SecResult<Ordering> {
    validate_ptr(buf1)?;
    validate_ptr(buf2)?;
    validate_size(max1)?;
    validate_size(max2)?;

    // SAFETY: non-null, sizes are capped well below `isize::MAX`, and the
    // caller vouches for readability.
    let (a, b) = unsafe {
        (
            slice::from_raw_parts(buf1, max1),
            slice::from_raw_parts(buf2, max2),
        )
    };

    Ok(compare_bytes(a, b))
}

/// Overwrites `len` bytes at `dest` with zeros using volatile stores.
///
/// # Errors
///
/// [`SecError::Null`], then [`SecError::Size`] / [`SecError::Range`].
///
/// # Safety
///
/// `dest` must be valid for writes of `len` bytes.
#[must_use = "the result reports whether the buffer was cleared"]
pub unsafe fn zero(dest: *mut u8, len: usize) -> SecResult<()> {
    validate_ptr(dest)?;
    validate_size(len)?;

    // SAFETY: validated above; the caller vouches for `len` writable bytes.
    unsafe { volatile_fill_raw(dest, len, 0) };

    Ok(())
}
