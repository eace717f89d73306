// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use securec_core::{SecError, SecResult, validate_size};
use securec_mem::volatile_fill;
use securec_rand::{EntropySource, SystemEntropySource};

/// Fills all of `buf` from `source`.
///
/// # Errors
///
/// - [`SecError::Size`] / [`SecError::Range`]: invalid `buf.len()`; `buf`
///   untouched.
/// - [`SecError::Fail`]: the source failed or filled only part of `buf`;
///   `buf` is zeroed so partial output is never used as key material.
///
/// # Example
///
/// ```
/// use securec_sensitive::{SystemEntropySource, random_bytes};
///
/// let mut nonce = [0u8; 24];
/// random_bytes(&mut nonce, &SystemEntropySource {}).expect("Failed to random_bytes(..)");
/// ```
#[must_use = "the result reports whether the buffer holds random bytes"]
pub fn random_bytes<E: EntropySource + ?Sized>(buf: &mut [u8], source: &E) -> SecResult<()> {
    validate_size(buf.len())?;

    if let Err(e) = source.fill_bytes(buf) {
        volatile_fill(buf, 0);
        tracing::error!(requested = buf.len(), error = %e, "entropy source failed, buffer cleared");
        return Err(SecError::from(e));
    }

    Ok(())
}

/// [`random_bytes`] backed by the operating system CSPRNG.
///
/// # Errors
///
/// Same as [`random_bytes`].
#[must_use = "the result reports whether the buffer holds random bytes"]
pub fn random_bytes_os(buf: &mut [u8]) -> SecResult<()> {
    random_bytes(buf, &SystemEntropySource {})
}
