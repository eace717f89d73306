// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{Ordering, compiler_fence};

use securec_core::{SecResult, validate_size};
use securec_mem::volatile_fill;

/// Overwrites all of `buf` with zeros and fences the stores.
///
/// Unlike a plain clear, the zeros survive even when `buf` is dropped right
/// after the call.
///
/// # Errors
///
/// [`SecError::Size`](securec_core::SecError::Size) /
/// [`SecError::Range`](securec_core::SecError::Range) for an invalid
/// `buf.len()`.
#[must_use = "the result reports whether the buffer was cleared"]
pub fn zeroize_sensitive(buf: &mut [u8]) -> SecResult<()> {
    validate_size(buf.len())?;

    volatile_fill(buf, 0);
    compiler_fence(Ordering::SeqCst);

    Ok(())
}
