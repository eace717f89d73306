// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use securec_core::SecError;
use thiserror::Error;

/// Errors that can occur when generating random data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,

    /// The source delivered fewer bytes than requested.
    #[error("ShortFill: requested {requested}, filled {filled}")]
    ShortFill {
        /// Bytes requested by the caller.
        requested: usize,
        /// Bytes actually produced.
        filled: usize,
    },
}

impl From<EntropyError> for SecError {
    fn from(_: EntropyError) -> Self {
        SecError::Fail
    }
}
