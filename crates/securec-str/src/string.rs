// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use securec_core::{MAX_BUFFER_SIZE, SecError, SecResult, validate_size};
use securec_mem::volatile_fill;

/// Bytes of `s` before the first NUL, or all of `s`.
pub(crate) fn terminated(s: &[u8]) -> &[u8] {
    match s.iter().position(|&b| b == 0) {
        Some(end) => &s[..end],
        None => s,
    }
}

/// Clears `dest` and reports the overflow.
fn refuse_overflow(op: &'static str, dest: &mut [u8], requested: usize) -> SecError {
    volatile_fill(dest, 0);
    tracing::warn!(
        op,
        capacity = dest.len(),
        requested,
        "overflow refused, destination cleared"
    );
    SecError::Overflow
}

/// Copies the string in `src` into `dest` and terminates it.
///
/// The string must fit together with its terminator: at most
/// `dest.len() - 1` bytes precede the first NUL in `src`.
///
/// # Errors
///
/// - [`SecError::Size`] / [`SecError::Range`]: invalid `dest.len()`; `dest`
///   untouched.
/// - [`SecError::Overflow`]: the string does not fit; all of `dest` is zeroed.
#[must_use = "the result reports whether the copy happened"]
pub fn copy(dest: &mut [u8], src: &[u8]) -> SecResult<()> {
    validate_size(dest.len())?;

    let s = terminated(src);
    if s.len() >= dest.len() {
        return Err(refuse_overflow("strcpy", dest, s.len() + 1));
    }

    dest[..s.len()].copy_from_slice(s);
    dest[s.len()] = 0;

    Ok(())
}

/// Copies at most `min(count, dest.len() - 1)` bytes of the string in `src`
/// and always terminates.
///
/// Truncation is not an error. Returns the number of bytes copied, not
/// counting the terminator.
///
/// # Errors
///
/// [`SecError::Size`] / [`SecError::Range`]: invalid `dest.len()`; `dest`
/// untouched.
///
/// # Example
///
/// ```
/// use securec_str::bounded_copy;
///
/// let mut dest = [0u8; 4];
/// assert_eq!(bounded_copy(&mut dest, b"hello", 10), Ok(3));
/// assert_eq!(&dest, b"hel\0");
/// ```
#[must_use = "the result reports whether the copy happened"]
pub fn bounded_copy(dest: &mut [u8], src: &[u8], count: usize) -> SecResult<usize> {
    validate_size(dest.len())?;

    let s = terminated(src);
    let n = s.len().min(count).min(dest.len() - 1);

    dest[..n].copy_from_slice(&s[..n]);
    dest[n] = 0;

    Ok(n)
}

/// Appends the string in `src` to the string already held in `dest`.
///
/// The existing string is bounded by `dest.len()`. If `dest` holds no
/// terminator, nothing can be appended.
///
/// # Errors
///
/// - [`SecError::Size`] / [`SecError::Range`]: invalid `dest.len()`; `dest`
///   untouched.
/// - [`SecError::Overflow`]: `existing + appended + 1 > dest.len()`; all of
///   `dest` is zeroed.
///
/// # Example
///
/// ```
/// use securec_str::concat;
///
/// let mut dest = *b"foo\0\0\0\0";
/// concat(&mut dest, b"bar").expect("Failed to concat(..)");
/// assert_eq!(&dest, b"foobar\0");
/// ```
#[must_use = "the result reports whether the append happened"]
pub fn concat(dest: &mut [u8], src: &[u8]) -> SecResult<()> {
    validate_size(dest.len())?;

    let existing = terminated(dest).len();
    let s = terminated(src);

    let required = existing.checked_add(s.len()).and_then(|n| n.checked_add(1));
    match required {
        Some(required) if required <= dest.len() => {
            dest[existing..existing + s.len()].copy_from_slice(s);
            dest[existing + s.len()] = 0;
            Ok(())
        }
        Some(required) => Err(refuse_overflow("strcat", dest, required)),
        None => Err(refuse_overflow("strcat", dest, usize::MAX)),
    }
}

/// Length of the string in `s`, capped at `maxlen`.
///
/// Returns 0 when `maxlen` is 0 or above [`MAX_BUFFER_SIZE`]. Use
/// [`try_bounded_length`] to tell those cases apart from an empty string.
pub fn bounded_length(s: &[u8], maxlen: usize) -> usize {
    try_bounded_length(s, maxlen).unwrap_or(0)
}

/// Length of the string in `s`, capped at `maxlen`.
///
/// # Errors
///
/// [`SecError::Size`] if `maxlen == 0`, [`SecError::Range`] if `maxlen`
/// exceeds [`MAX_BUFFER_SIZE`].
pub fn try_bounded_length(s: &[u8], maxlen: usize) -> SecResult<usize> {
    validate_size(maxlen)?;

    let window = &s[..s.len().min(maxlen)];

    Ok(terminated(window).len())
}

/// Orders two strings byte by byte up to their terminators.
///
/// A string that is a proper prefix of the other orders first. At most
/// [`MAX_BUFFER_SIZE`] bytes of each are examined.
pub fn compare(s1: &[u8], s2: &[u8]) -> Ordering {
    bounded_compare(s1, s2, MAX_BUFFER_SIZE)
}

/// Orders the first `n` bytes of two strings, stopping at a terminator.
///
/// `n == 0` compares equal.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use securec_str::bounded_compare;
///
/// assert_eq!(bounded_compare(b"abcX", b"abcY", 3), Ordering::Equal);
/// assert_eq!(bounded_compare(b"ab\0", b"abc\0", 8), Ordering::Less);
/// ```
pub fn bounded_compare(s1: &[u8], s2: &[u8], n: usize) -> Ordering {
    let a = terminated(s1);
    let b = terminated(s2);

    a[..a.len().min(n)].cmp(&b[..b.len().min(n)])
}
