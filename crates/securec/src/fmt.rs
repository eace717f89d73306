// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded formatting into byte buffers.
//!
//! Output is cut at `dest.len() - 1` bytes and always NUL-terminated.
//! Truncation is reported, not treated as an error.

use core::fmt::{self, Write};

use securec_core::{SecError, SecResult, validate_size};
use securec_mem::volatile_fill;

/// Outcome of a successful [`format_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatted {
    /// Bytes written, not counting the terminator.
    pub len: usize,
    /// Whether output was cut to fit the buffer.
    pub truncated: bool,
}

struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // One byte is always kept for the terminator.
        let room = self.buf.len() - 1 - self.len;
        let n = s.len().min(room);

        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;

        if n < s.len() {
            self.truncated = true;
        }

        Ok(())
    }
}

/// Writes `args` into `dest` and terminates the output.
///
/// # Errors
///
/// - [`SecError::Size`] / [`SecError::Range`]: invalid `dest.len()`; `dest`
///   untouched.
/// - [`SecError::Fail`]: a `Display` or `Debug` implementation returned an
///   error; `dest` is zeroed.
///
/// # Example
///
/// ```
/// use securec::fmt::{Formatted, format_into};
///
/// let mut dest = [0u8; 6];
/// let out = format_into(&mut dest, format_args!("{}-{}", "abc", 123));
///
/// assert_eq!(out, Ok(Formatted { len: 5, truncated: true }));
/// assert_eq!(&dest, b"abc-1\0");
/// ```
pub fn format_into(dest: &mut [u8], args: fmt::Arguments<'_>) -> SecResult<Formatted> {
    validate_size(dest.len())?;

    let mut writer = BoundedWriter {
        buf: dest,
        len: 0,
        truncated: false,
    };

    if writer.write_fmt(args).is_err() {
        volatile_fill(writer.buf, 0);
        tracing::warn!(
            op = "format",
            capacity = writer.buf.len(),
            "formatting failed, destination cleared"
        );
        return Err(SecError::Fail);
    }

    let BoundedWriter {
        buf,
        len,
        truncated,
    } = writer;
    buf[len] = 0;

    Ok(Formatted { len, truncated })
}

/// Formats into a byte buffer with [`format_into`].
///
/// ```
/// use securec::sec_format;
///
/// let mut dest = [0u8; 16];
/// let out = sec_format!(&mut dest, "{:>4}", 7).expect("Failed to format(..)");
/// assert_eq!(&dest[..out.len], b"   7");
/// ```
#[macro_export]
macro_rules! sec_format {
    ($dest:expr, $($arg:tt)*) => {
        $crate::fmt::format_into($dest, ::core::format_args!($($arg)*))
    };
}
