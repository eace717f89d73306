// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-thread record of the last tracked outcome.
//!
//! Nothing is recorded implicitly: wrap a call in [`track`] to store its
//! outcome. Each thread sees only its own record.
//!
//! ```
//! use securec::SecError;
//! use securec::last_error::{clear_last_error, last_error, track};
//!
//! let mut dest = [0u8; 2];
//! let _ = track(securec::mem::copy(&mut dest, b"abc", 3));
//! assert_eq!(last_error(), Some(SecError::Overflow));
//!
//! clear_last_error();
//! assert_eq!(last_error(), None);
//! ```

use std::cell::Cell;

use securec_core::{SEC_OK, SecError, SecResult, status_code};

thread_local! {
    static LAST_STATUS: Cell<i32> = const { Cell::new(SEC_OK) };
}

/// Records the outcome of `result` for the current thread and returns it
/// unchanged.
pub fn track<T>(result: SecResult<T>) -> SecResult<T> {
    let code = status_code(&result);
    LAST_STATUS.with(|status| status.set(code));
    result
}

/// Overwrites the current thread's record.
pub fn set_last_error(error: Option<SecError>) {
    let code = error.map_or(SEC_OK, SecError::code);
    LAST_STATUS.with(|status| status.set(code));
}

/// The failure last recorded on this thread, or `None` after a success.
pub fn last_error() -> Option<SecError> {
    SecError::from_code(last_status_code())
}

/// The numeric status code last recorded on this thread.
pub fn last_status_code() -> i32 {
    LAST_STATUS.with(Cell::get)
}

/// Resets this thread's record to success.
pub fn clear_last_error() {
    set_last_error(None);
}
