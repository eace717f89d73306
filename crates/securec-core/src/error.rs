// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Status code reported for a successful operation.
pub const SEC_OK: i32 = 0;

/// Result alias used by every securec primitive.
pub type SecResult<T> = Result<T, SecError>;

/// Failure kinds reported by securec primitives.
///
/// The success kind is `Ok(_)`; each variant here is one failing kind with a
/// stable negative status code (see [`SecError::code`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecError {
    /// A required pointer argument is null.
    #[error("null pointer argument")]
    Null,

    /// A size or capacity argument is zero.
    #[error("invalid size (zero)")]
    Size,

    /// The requested byte count exceeds the destination capacity, or no
    /// terminator was found within the allowed bound.
    #[error("buffer overflow prevented")]
    Overflow,

    /// A size or capacity argument exceeds the configured maximum buffer size.
    #[error("size out of range")]
    Range,

    /// Overlapping ranges or another semantic violation.
    #[error("invalid argument")]
    Invalid,

    /// Allocation failure. Reserved; no core primitive allocates.
    #[error("out of memory")]
    NoMemory,

    /// Generic failure, used when the entropy source cannot deliver.
    #[error("operation failed")]
    Fail,
}

impl SecError {
    /// Returns the stable numeric status code of this failure kind.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Self::Null => -1,
            Self::Size => -2,
            Self::Overflow => -3,
            Self::Range => -4,
            Self::Invalid => -5,
            Self::NoMemory => -6,
            Self::Fail => -7,
        }
    }

    /// Maps a numeric status code back to its failure kind.
    ///
    /// Returns `None` for [`SEC_OK`] and for unknown codes.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Null),
            -2 => Some(Self::Size),
            -3 => Some(Self::Overflow),
            -4 => Some(Self::Range),
            -5 => Some(Self::Invalid),
            -6 => Some(Self::NoMemory),
            -7 => Some(Self::Fail),
            _ => None,
        }
    }
}

/// Collapses a result into its numeric status code.
///
/// # Example
///
/// ```
/// use securec_core::{SEC_OK, SecError, SecResult, status_code};
///
/// let ok: SecResult<()> = Ok(());
/// let err: SecResult<()> = Err(SecError::Overflow);
///
/// assert_eq!(status_code(&ok), SEC_OK);
/// assert_eq!(status_code(&err), -3);
/// ```
#[inline]
pub fn status_code<T>(result: &SecResult<T>) -> i32 {
    match result {
        Ok(_) => SEC_OK,
        Err(e) => e.code(),
    }
}

/// Human-readable description of a numeric status code.
pub const fn error_string(code: i32) -> &'static str {
    if code == SEC_OK {
        return "success";
    }

    match SecError::from_code(code) {
        Some(SecError::Null) => "null pointer argument",
        Some(SecError::Size) => "invalid size (zero)",
        Some(SecError::Overflow) => "buffer overflow prevented",
        Some(SecError::Range) => "size out of range",
        Some(SecError::Invalid) => "invalid argument",
        Some(SecError::NoMemory) => "out of memory",
        Some(SecError::Fail) => "operation failed",
        None => "unknown error",
    }
}
