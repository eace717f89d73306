// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use securec_core::{SecError, SecResult, validate_range, validate_size};

use crate::volatile::volatile_fill;

/// Validates `count` against the capacity of `dest`.
///
/// On [`SecError::Overflow`] the whole of `dest` is cleared before returning.
pub(crate) fn guard_destination(op: &'static str, dest: &mut [u8], count: usize) -> SecResult<()> {
    match validate_range(dest.len(), count) {
        Err(SecError::Overflow) => {
            volatile_fill(dest, 0);
            tracing::warn!(
                op,
                capacity = dest.len(),
                requested = count,
                "overflow refused, destination cleared"
            );
            Err(SecError::Overflow)
        }
        other => other,
    }
}

/// Source slices must hold at least `count` bytes.
fn check_source(src_len: usize, count: usize) -> SecResult<()> {
    if count > src_len {
        return Err(SecError::Invalid);
    }

    Ok(())
}

/// First differing byte decides; equal prefixes order by length.
pub(crate) fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return x.cmp(y);
        }
    }

    a.len().cmp(&b.len())
}

/// Copies the first `count` bytes of `src` into `dest`.
///
/// The capacity is `dest.len()`.
///
/// # Errors
///
/// - [`SecError::Size`] / [`SecError::Range`]: `dest` is empty or larger than
///   [`MAX_BUFFER_SIZE`](securec_core::MAX_BUFFER_SIZE); `dest` untouched.
/// - [`SecError::Overflow`]: `count > dest.len()`; all of `dest` is zeroed.
/// - [`SecError::Invalid`]: `src` holds fewer than `count` bytes; `dest`
///   untouched.
///
/// # Example
///
/// ```
/// use securec_mem::copy;
///
/// let mut dest = [0u8; 8];
/// copy(&mut dest, b"hello", 5).expect("Failed to copy(..)");
/// assert_eq!(&dest[..5], b"hello");
/// ```
#[must_use = "the result reports whether the copy happened"]
pub fn copy(dest: &mut [u8], src: &[u8], count: usize) -> SecResult<()> {
    guard_destination("copy", dest, count)?;
    check_source(src.len(), count)?;

    dest[..count].copy_from_slice(&src[..count]);

    Ok(())
}

/// Move between distinct slices.
///
/// Borrowed slices cannot overlap, so this behaves like [`copy`]. Use
/// [`move_within`] (or [`raw::move_bytes`](crate::raw::move_bytes)) for
/// overlapping ranges.
#[must_use = "the result reports whether the move happened"]
pub fn move_bytes(dest: &mut [u8], src: &[u8], count: usize) -> SecResult<()> {
    guard_destination("move", dest, count)?;
    check_source(src.len(), count)?;

    dest[..count].copy_from_slice(&src[..count]);

    Ok(())
}

/// Moves `count` bytes starting at `src_offset` to `dest_offset` inside `buf`.
///
/// The destination region is `buf[dest_offset..]`, and its length is the
/// capacity checked against `count`. Overlapping source and destination
/// ranges are handled as if the source were first copied to a temporary.
///
/// # Errors
///
/// - [`SecError::Size`]: the destination region is empty (including
///   `dest_offset > buf.len()`).
/// - [`SecError::Range`]: the destination region exceeds the maximum size.
/// - [`SecError::Overflow`]: `count` exceeds the destination region, which is
///   zeroed in full. Bytes before `dest_offset` are untouched.
/// - [`SecError::Invalid`]: the source span runs past the end of `buf`.
///
/// # Example
///
/// ```
/// use securec_mem::move_within;
///
/// let mut buf = *b"abcdef__";
/// move_within(&mut buf, 2, 0, 6).expect("Failed to move_within(..)");
/// assert_eq!(&buf, b"ababcdef");
/// ```
#[must_use = "the result reports whether the move happened"]
pub fn move_within(
    buf: &mut [u8],
    dest_offset: usize,
    src_offset: usize,
    count: usize,
) -> SecResult<()> {
    let dest_start = dest_offset.min(buf.len());
    guard_destination("move", &mut buf[dest_start..], count)?;

    let src_end = src_offset.checked_add(count).ok_or(SecError::Invalid)?;
    check_source(buf.len(), src_end)?;

    buf.copy_within(src_offset..src_end, dest_offset);

    Ok(())
}

/// Writes `value` into the first `count` bytes of `dest` with volatile stores.
///
/// # Errors
///
/// - [`SecError::Size`] / [`SecError::Range`]: invalid capacity.
/// - [`SecError::Overflow`]: `count > dest.len()`; all of `dest` is zeroed
///   instead.
#[must_use = "the result reports whether the fill happened"]
pub fn set(dest: &mut [u8], value: u8, count: usize) -> SecResult<()> {
    guard_destination("set", dest, count)?;

    volatile_fill(&mut dest[..count], value);

    Ok(())
}

/// Compares `a` and `b` over `min(a.len(), b.len())` bytes.
///
/// The first differing byte decides. If every compared byte is equal, the
/// shorter buffer orders first.
///
/// # Errors
///
/// [`SecError::Size`] / [`SecError::Range`] if either length is invalid
/// (`a` is checked first).
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use securec_mem::compare;
///
/// assert_eq!(compare(b"abc", b"abd"), Ok(Ordering::Less));
/// assert_eq!(compare(b"abc", b"ab"), Ok(Ordering::Greater));
/// ```
pub fn compare(a: &[u8], b: &[u8]) -> SecResult<Ordering> {
    validate_size(a.len())?;
    validate_size(b.len())?;

    Ok(compare_bytes(a, b))
}

/// Overwrites all of `dest` with zeros using volatile stores.
///
/// # Errors
///
/// [`SecError::Size`] / [`SecError::Range`] if `dest.len()` is invalid.
#[must_use = "the result reports whether the buffer was cleared"]
pub fn zero(dest: &mut [u8]) -> SecResult<()> {
    validate_size(dest.len())?;

    volatile_fill(dest, 0);

    Ok(())
}
