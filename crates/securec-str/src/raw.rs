// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pointer-based string primitives.
//!
//! Pointers are checked before any size argument. Source strings are read one
//! byte at a time and never past the bound implied by the destination
//! capacity (or by `maxlen` / `n`), so an unterminated source is never
//! over-read.

use core::cmp::Ordering;

use securec_core::{MAX_BUFFER_SIZE, SecError, SecResult, validate_ptr, validate_size};
use securec_mem::volatile_fill_raw;

/// Number of bytes before the first NUL within the first `limit` bytes of `s`.
///
/// # Safety
///
/// `s` must be readable up to its first NUL or `limit` bytes, whichever
/// comes first.
unsafe fn scan(s: *const u8, limit: usize) -> usize {
    let mut len = 0;
    // SAFETY: `len < limit` and no NUL was seen before `len`.
    while len < limit && unsafe { s.add(len).read() } != 0 {
        len += 1;
    }
    len
}

/// # Safety
///
/// `dest` must be valid for writes of `capacity` bytes.
unsafe fn refuse_overflow(
    op: &'static str,
    dest: *mut u8,
    capacity: usize,
    requested: usize,
) -> SecError {
    // SAFETY: forwarded from the caller.
    unsafe { volatile_fill_raw(dest, capacity, 0) };
    tracing::warn!(
        op,
        capacity,
        requested,
        "overflow refused, destination cleared"
    );
    SecError::Overflow
}

/// Copies the string at `src` into `dest` and terminates it.
///
/// # Errors
///
/// [`SecError::Null`] for `dest` then `src`, then [`SecError::Size`] /
/// [`SecError::Range`] for `capacity`, then [`SecError::Overflow`] when no
/// terminator appears in the first `capacity` bytes of `src` (all
/// `capacity` bytes at `dest` zeroed).
///
/// # Safety
///
/// - `dest` must be valid for writes of `capacity` bytes.
/// - `src` must be readable up to its terminator or `capacity` bytes.
/// - The two ranges must not overlap.
#[must_use = "the result reports whether the copy happened"]
pub unsafe fn copy(dest: *mut u8, capacity: usize, src: *const u8) -> SecResult<()> {
    validate_ptr(dest)?;
    validate_ptr(src)?;
    validate_size(capacity)?;

    // SAFETY: the caller vouches for `capacity` readable bytes at most.
    let len = unsafe { scan(src, capacity) };
    if len >= capacity {
        // SAFETY: `dest` is valid for `capacity` bytes.
        return Err(unsafe { refuse_overflow("strcpy", dest, capacity, len.saturating_add(1)) });
    }

    // SAFETY: `len < capacity`, so `len + 1` bytes fit and were read above.
    unsafe {
        core::ptr::copy_nonoverlapping(src, dest, len);
        dest.add(len).write(0);
    }

    Ok(())
}

/// Copies at most `min(count, capacity - 1)` bytes of the string at `src`
/// and always terminates. Returns the number of bytes copied.
///
/// # Errors
///
/// [`SecError::Null`] for `dest` then `src`, then [`SecError::Size`] /
/// [`SecError::Range`] for `capacity`.
///
/// # Safety
///
/// - `dest` must be valid for writes of `capacity` bytes.
/// - `src` must be readable up to its terminator or `min(count, capacity - 1)`
///   bytes.
/// - The two ranges must not overlap.
#[must_use = "the result reports whether the copy happened"]
pub unsafe fn bounded_copy(
    dest: *mut u8,
    capacity: usize,
    src: *const u8,
    count: usize,
) -> SecResult<usize> {
    validate_ptr(dest)?;
    validate_ptr(src)?;
    validate_size(capacity)?;

    // SAFETY: readability is bounded by the caller contract.
    let n = unsafe { scan(src, count.min(capacity - 1)) };

    // SAFETY: `n <= capacity - 1`.
    unsafe {
        core::ptr::copy_nonoverlapping(src, dest, n);
        dest.add(n).write(0);
    }

    Ok(n)
}

/// Appends the string at `src` to the string held at `dest`.
///
/// # Errors
///
/// [`SecError::Null`] for `dest` then `src`, then [`SecError::Size`] /
/// [`SecError::Range`] for `capacity`, then [`SecError::Overflow`] when the
/// result plus terminator would exceed `capacity` (all `capacity` bytes at
/// `dest` zeroed).
///
/// # Safety
///
/// - `dest` must be valid for reads and writes of `capacity` bytes.
/// - `src` must be readable up to its terminator or `capacity` bytes.
/// - The two ranges must not overlap.
#[must_use = "the result reports whether the append happened"]
pub unsafe fn concat(dest: *mut u8, capacity: usize, src: *const u8) -> SecResult<()> {
    validate_ptr(dest)?;
    validate_ptr(src)?;
    validate_size(capacity)?;

    // SAFETY: `dest` is readable for `capacity` bytes.
    let existing = unsafe { scan(dest, capacity) };
    let room = capacity - existing;
    // SAFETY: at most `room <= capacity` bytes of `src` are read.
    let appended = unsafe { scan(src, room) };

    let required = existing.checked_add(appended).and_then(|n| n.checked_add(1));
    match required {
        Some(required) if required <= capacity => {
            // SAFETY: `existing + appended < capacity`.
            unsafe {
                core::ptr::copy_nonoverlapping(src, dest.add(existing), appended);
                dest.add(existing + appended).write(0);
            }
            Ok(())
        }
        // SAFETY: `dest` is valid for `capacity` bytes.
        Some(required) => Err(unsafe { refuse_overflow("strcat", dest, capacity, required) }),
        None => Err(unsafe { refuse_overflow("strcat", dest, capacity, usize::MAX) }),
    }
}

/// Length of the string at `s`, capped at `maxlen`.
///
/// Returns 0 when `s` is null, `maxlen` is 0 or `maxlen` exceeds
/// [`MAX_BUFFER_SIZE`].
///
/// # Safety
///
/// `s` must be null or readable up to its terminator or `maxlen` bytes.
pub unsafe fn bounded_length(s: *const u8, maxlen: usize) -> usize {
    // SAFETY: forwarded from the caller.
    unsafe { try_bounded_length(s, maxlen) }.unwrap_or(0)
}

/// Length of the string at `s`, capped at `maxlen`.
///
/// # Errors
///
/// [`SecError::Null`], then [`SecError::Size`] / [`SecError::Range`] for
/// `maxlen`.
///
/// # Safety
///
/// `s` must be null or readable up to its terminator or `maxlen` bytes.
pub unsafe fn try_bounded_length(s: *const u8, maxlen: usize) -> SecResult<usize> {
    validate_ptr(s)?;
    validate_size(maxlen)?;

    // SAFETY: forwarded from the caller.
    Ok(unsafe { scan(s, maxlen) })
}

/// Orders two strings byte by byte up to their terminators.
///
/// At most [`MAX_BUFFER_SIZE`] bytes are examined.
///
/// # Errors
///
/// [`SecError::Null`] for `s1` then `s2`.
///
/// # Safety
///
/// Both pointers must be readable up to their terminator or
/// [`MAX_BUFFER_SIZE`] bytes.
pub unsafe fn compare(s1: *const u8, s2: *const u8) -> SecResult<Ordering> {
    // SAFETY: forwarded from the caller.
    unsafe { bounded_compare(s1, s2, MAX_BUFFER_SIZE) }
}

/// Orders the first `n` bytes of two strings, stopping at a terminator.
///
/// `n == 0` compares equal. `n` is capped at [`MAX_BUFFER_SIZE`].
///
/// # Errors
///
/// [`SecError::Null`] for `s1` then `s2`.
///
/// # Safety
///
/// Both pointers must be readable up to their terminator or `n` bytes.
pub unsafe fn bounded_compare(s1: *const u8, s2: *const u8, n: usize) -> SecResult<Ordering> {
    validate_ptr(s1)?;
    validate_ptr(s2)?;

    for i in 0..n.min(MAX_BUFFER_SIZE) {
        // SAFETY: no terminator was met before `i` on either side.
        let (a, b) = unsafe { (s1.add(i).read(), s2.add(i).read()) };

        if a != b {
            return Ok(a.cmp(&b));
        }
        if a == 0 {
            break;
        }
    }

    Ok(Ordering::Equal)
}
