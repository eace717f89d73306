// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Default cap on any capacity argument: 10 MiB.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 10 * 1024 * 1024;

/// Largest capacity accepted by any securec primitive.
///
/// Defaults to [`DEFAULT_MAX_BUFFER_SIZE`]. Set the `SECUREC_MAX_BUFFER`
/// environment variable (decimal bytes, non-zero) at build time to override
/// it; an unparsable value fails the build.
pub const MAX_BUFFER_SIZE: usize = match option_env!("SECUREC_MAX_BUFFER") {
    Some(raw) => parse_max_buffer(raw),
    None => DEFAULT_MAX_BUFFER_SIZE,
};

pub(crate) const fn parse_max_buffer(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    assert!(!bytes.is_empty(), "SECUREC_MAX_BUFFER must not be empty");

    let mut value: usize = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        assert!(b.is_ascii_digit(), "SECUREC_MAX_BUFFER must be decimal");

        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as usize) {
                Some(v) => v,
                None => panic!("SECUREC_MAX_BUFFER overflows usize"),
            },
            None => panic!("SECUREC_MAX_BUFFER overflows usize"),
        };
        i += 1;
    }

    assert!(value != 0, "SECUREC_MAX_BUFFER must be non-zero");
    value
}
