// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Argument predicates. Pure, allocation-free and safe to call from any thread.

use crate::error::{SecError, SecResult};
use crate::limits::MAX_BUFFER_SIZE;

/// Rejects null pointers with [`SecError::Null`].
///
/// The pointer is never dereferenced.
#[inline]
pub fn validate_ptr(ptr: *const u8) -> SecResult<()> {
    if ptr.is_null() {
        return Err(SecError::Null);
    }

    Ok(())
}

/// Rejects a zero size with [`SecError::Size`] and a size above
/// [`MAX_BUFFER_SIZE`] with [`SecError::Range`].
#[inline]
pub const fn validate_size(size: usize) -> SecResult<()> {
    if size == 0 {
        return Err(SecError::Size);
    }

    if size > MAX_BUFFER_SIZE {
        return Err(SecError::Range);
    }

    Ok(())
}

/// Validates `capacity` with [`validate_size`], then rejects
/// `count > capacity` with [`SecError::Overflow`].
///
/// Capacity problems always take precedence over count problems.
#[inline]
pub const fn validate_range(capacity: usize, count: usize) -> SecResult<()> {
    if let Err(e) = validate_size(capacity) {
        return Err(e);
    }

    if count > capacity {
        return Err(SecError::Overflow);
    }

    Ok(())
}

/// Returns `true` if the half-open ranges `[a, a + len)` and `[b, b + len)`
/// share at least one address.
///
/// Range ends saturate at `usize::MAX`, so ranges touching the top of the
/// address space never wrap around. Empty ranges never overlap.
#[inline]
pub const fn ranges_overlap(a: usize, b: usize, len: usize) -> bool {
    if len == 0 {
        return false;
    }

    let a_end = a.saturating_add(len);
    let b_end = b.saturating_add(len);

    a < b_end && b < a_end
}

/// Rejects null pointers with [`SecError::Null`] and intersecting
/// `[dest, dest + len)` / `[src, src + len)` ranges with [`SecError::Invalid`].
///
/// Only addresses are compared; neither pointer is dereferenced.
#[inline]
pub fn validate_overlap(dest: *const u8, src: *const u8, len: usize) -> SecResult<()> {
    if dest.is_null() || src.is_null() {
        return Err(SecError::Null);
    }

    if ranges_overlap(dest as usize, src as usize, len) {
        return Err(SecError::Invalid);
    }

    Ok(())
}
