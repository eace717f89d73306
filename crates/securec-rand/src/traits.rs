// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must provide randomness suitable for cryptographic operations
/// (e.g., key generation). Typically backed by OS-level CSPRNGs.
pub trait EntropySource {
    /// Fills the whole destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// - [`EntropyError::EntropyNotAvailable`] if the source is unavailable.
    /// - [`EntropyError::ShortFill`] if fewer than `dest.len()` bytes were produced.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
