// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Writes `value` into every byte of `dest` with volatile stores.
///
/// Volatile stores are never merged away or dropped as dead, which is what
/// `set`, `zero` and every defensive clear in securec rely on.
///
/// # Example
///
/// ```
/// use securec_mem::volatile_fill;
///
/// let mut secret = *b"hunter2";
/// volatile_fill(&mut secret, 0);
/// assert!(secret.iter().all(|&b| b == 0));
/// ```
#[inline(never)]
pub fn volatile_fill(dest: &mut [u8], value: u8) {
    // SAFETY: a mutable slice is valid for writes over its whole length.
    unsafe { volatile_fill_raw(dest.as_mut_ptr(), dest.len(), value) }
}

/// Pointer form of [`volatile_fill`].
///
/// # Safety
///
/// `dest` must be valid for writes of `len` bytes.
#[inline(never)]
pub unsafe fn volatile_fill_raw(dest: *mut u8, len: usize, value: u8) {
    for i in 0..len {
        // SAFETY: `i < len` and the caller guarantees `len` writable bytes.
        unsafe { core::ptr::write_volatile(dest.add(i), value) };
    }
}
