// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for securec crates.
//!
//! ## License
//!
//! GPL-3.0-only

/// Byte used to pre-fill destination buffers so clears and writes are visible.
pub const DIRTY_BYTE: u8 = 0xAA;

/// Returns a buffer of `len` bytes filled with [`DIRTY_BYTE`].
pub fn dirty_buffer(len: usize) -> Vec<u8> {
    vec![DIRTY_BYTE; len]
}

/// Returns `len` bytes counting up from 1 (wrapping), never containing NUL.
pub fn sequential_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 255) as u8 + 1).collect()
}

/// Returns a NUL-terminated copy of `s`.
pub fn c_string(s: &str) -> Vec<u8> {
    let mut bytes = s.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

/// Returns `true` if every byte of `slice` is zero.
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns the bytes of `buf` before the first NUL (or all of `buf`).
pub fn until_nul(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}

/// Reference overlapping move: copies `src_offset..src_offset + count` to
/// `dest_offset` through a temporary buffer.
pub fn move_through_temporary(buf: &[u8], dest_offset: usize, src_offset: usize, count: usize) -> Vec<u8> {
    let mut expected = buf.to_vec();
    let tmp = buf[src_offset..src_offset + count].to_vec();
    expected[dest_offset..dest_offset + count].copy_from_slice(&tmp);
    expected
}
