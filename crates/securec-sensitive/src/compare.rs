// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::hint::black_box;

use securec_core::{SecError, SecResult};
use subtle::ConstantTimeEq;

/// OR-of-XOR over every byte pair, then a constant-time zero test.
///
/// Both slices must have the same length.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());

    let acc = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | black_box(x ^ y));

    bool::from(black_box(acc).ct_eq(&0u8))
}

/// Compares the first `len` bytes of `a` and `b` in constant time.
///
/// All `len` byte pairs are examined, with no early exit, whatever their
/// contents. `len == 0` compares equal.
///
/// # Errors
///
/// [`SecError::Invalid`] if either slice is shorter than `len`. Lengths are
/// public, so this check reveals nothing about the contents.
///
/// # Example
///
/// ```
/// use securec_sensitive::constant_time_compare;
///
/// assert_eq!(constant_time_compare(b"secret", b"secret", 6), Ok(true));
/// assert_eq!(constant_time_compare(b"secret", b"secreT", 6), Ok(false));
/// assert_eq!(constant_time_compare(b"secret", b"secreT", 5), Ok(true));
/// ```
pub fn constant_time_compare(a: &[u8], b: &[u8], len: usize) -> SecResult<bool> {
    if a.len() < len || b.len() < len {
        return Err(SecError::Invalid);
    }

    Ok(ct_eq(&a[..len], &b[..len]))
}
