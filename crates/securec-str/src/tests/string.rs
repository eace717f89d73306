// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use securec_core::{MAX_BUFFER_SIZE, SecError};
use securec_test_utils::{DIRTY_BYTE, c_string, dirty_buffer, is_slice_zeroized, until_nul};

use crate::string::{
    bounded_compare, bounded_copy, bounded_length, compare, concat, copy, terminated,
    try_bounded_length,
};

// terminated

#[test]
fn test_terminated_stops_at_first_nul() {
    assert_eq!(terminated(b"ab\0cd\0"), b"ab");
    assert_eq!(terminated(b"\0"), b"");
}

#[test]
fn test_terminated_without_nul_is_whole_slice() {
    assert_eq!(terminated(b"abc"), b"abc");
    assert_eq!(terminated(b""), b"");
}

// copy

#[test]
fn test_copy_fits() {
    let mut dest = dirty_buffer(6);

    assert_eq!(copy(&mut dest, &c_string("hi")), Ok(()));
    assert_eq!(&dest[..3], b"hi\0");
    assert!(dest[3..].iter().all(|&b| b == DIRTY_BYTE));
}

#[test]
fn test_copy_exact_fit() {
    let mut dest = dirty_buffer(6);

    assert_eq!(copy(&mut dest, b"hello\0"), Ok(()));
    assert_eq!(&dest, b"hello\0");
}

#[test]
fn test_copy_overflow_clears_dest() {
    let mut dest = dirty_buffer(4);

    assert_eq!(copy(&mut dest, &c_string("hello")), Err(SecError::Overflow));
    assert!(is_slice_zeroized(&dest));
}

#[test]
fn test_copy_off_by_one_overflows() {
    let mut dest = dirty_buffer(5);

    assert_eq!(copy(&mut dest, b"hello"), Err(SecError::Overflow));
    assert!(is_slice_zeroized(&dest));
}

#[test]
fn test_copy_empty_string() {
    let mut dest = dirty_buffer(1);

    assert_eq!(copy(&mut dest, b"\0garbage"), Ok(()));
    assert_eq!(dest, [0]);
}

#[test]
fn test_copy_zero_capacity() {
    let mut dest: [u8; 0] = [];

    assert_eq!(copy(&mut dest, b"a\0"), Err(SecError::Size));
}

#[test]
fn test_copy_capacity_above_max() {
    let mut dest = dirty_buffer(MAX_BUFFER_SIZE + 1);

    assert_eq!(copy(&mut dest, b"a\0"), Err(SecError::Range));
    assert!(dest.iter().all(|&b| b == DIRTY_BYTE));
}

// bounded_copy

#[test]
fn test_bounded_copy_stops_at_count() {
    let mut dest = dirty_buffer(8);

    assert_eq!(bounded_copy(&mut dest, b"hello\0", 3), Ok(3));
    assert_eq!(until_nul(&dest), b"hel");
}

#[test]
fn test_bounded_copy_stops_at_terminator() {
    let mut dest = dirty_buffer(8);

    assert_eq!(bounded_copy(&mut dest, b"hi\0xyz", 6), Ok(2));
    assert_eq!(&dest[..3], b"hi\0");
}

#[test]
fn test_bounded_copy_truncates_to_capacity() {
    let mut dest = dirty_buffer(4);

    assert_eq!(bounded_copy(&mut dest, b"hello\0", 100), Ok(3));
    assert_eq!(&dest, b"hel\0");
}

#[test]
fn test_bounded_copy_zero_count_writes_terminator() {
    let mut dest = dirty_buffer(4);

    assert_eq!(bounded_copy(&mut dest, b"hello\0", 0), Ok(0));
    assert_eq!(dest[0], 0);
}

#[test]
fn test_bounded_copy_zero_capacity() {
    let mut dest: [u8; 0] = [];

    assert_eq!(bounded_copy(&mut dest, b"a\0", 1), Err(SecError::Size));
}

// concat

#[test]
fn test_concat_appends() {
    let mut dest = [0u8; 8];
    dest[..3].copy_from_slice(b"foo");

    assert_eq!(concat(&mut dest, b"bar\0"), Ok(()));
    assert_eq!(&dest[..7], b"foobar\0");
}

#[test]
fn test_concat_exact_fit() {
    let mut dest = *b"ab\0\0\0";

    assert_eq!(concat(&mut dest, b"cd"), Ok(()));
    assert_eq!(&dest, b"abcd\0");
}

#[test]
fn test_concat_overflow_clears_dest() {
    let mut dest = *b"abc\0\0";

    assert_eq!(concat(&mut dest, b"def\0"), Err(SecError::Overflow));
    assert!(is_slice_zeroized(&dest));
}

#[test]
fn test_concat_unterminated_dest_overflows() {
    let mut dest = dirty_buffer(4);

    assert_eq!(concat(&mut dest, b"\0"), Err(SecError::Overflow));
    assert!(is_slice_zeroized(&dest));
}

#[test]
fn test_concat_empty_source() {
    let mut dest = *b"abc\0";

    assert_eq!(concat(&mut dest, b"\0"), Ok(()));
    assert_eq!(&dest, b"abc\0");
}

#[test]
fn test_concat_zero_capacity() {
    let mut dest: [u8; 0] = [];

    assert_eq!(concat(&mut dest, b"a\0"), Err(SecError::Size));
}

// bounded_length

#[test]
fn test_bounded_length_before_terminator() {
    assert_eq!(bounded_length(b"hello\0world", 100), 5);
}

#[test]
fn test_bounded_length_capped_at_maxlen() {
    assert_eq!(bounded_length(b"hello\0", 3), 3);
}

#[test]
fn test_bounded_length_unterminated_slice() {
    assert_eq!(bounded_length(b"abc", 10), 3);
}

#[test]
fn test_bounded_length_invalid_maxlen_is_zero() {
    assert_eq!(bounded_length(b"abc\0", 0), 0);
    assert_eq!(bounded_length(b"abc\0", MAX_BUFFER_SIZE + 1), 0);
}

#[test]
fn test_try_bounded_length_reports_kind() {
    assert_eq!(try_bounded_length(b"abc\0", 8), Ok(3));
    assert_eq!(try_bounded_length(b"\0", 8), Ok(0));
    assert_eq!(try_bounded_length(b"abc\0", 0), Err(SecError::Size));
    assert_eq!(
        try_bounded_length(b"abc\0", MAX_BUFFER_SIZE + 1),
        Err(SecError::Range)
    );
}

// compare

#[test]
fn test_compare_equal() {
    assert_eq!(compare(b"abc\0", b"abc\0"), Ordering::Equal);
    assert_eq!(compare(b"abc\0xx", b"abc\0yy"), Ordering::Equal);
}

#[test]
fn test_compare_first_difference_decides() {
    assert_eq!(compare(b"abd\0", b"abc\0"), Ordering::Greater);
    assert_eq!(compare(b"abc\0", b"abd\0"), Ordering::Less);
}

#[test]
fn test_compare_prefix_orders_first() {
    assert_eq!(compare(b"ab\0", b"abc\0"), Ordering::Less);
    assert_eq!(compare(b"abc\0", b"ab\0"), Ordering::Greater);
}

#[test]
fn test_compare_bytes_are_unsigned() {
    assert_eq!(compare(b"\x80\0", b"\x7f\0"), Ordering::Greater);
}

#[test]
fn test_bounded_compare_limits_to_n() {
    assert_eq!(bounded_compare(b"abcX\0", b"abcY\0", 3), Ordering::Equal);
    assert_eq!(bounded_compare(b"abcX\0", b"abcY\0", 4), Ordering::Less);
}

#[test]
fn test_bounded_compare_zero_is_equal() {
    assert_eq!(bounded_compare(b"a\0", b"z\0", 0), Ordering::Equal);
}

#[test]
fn test_bounded_compare_stops_at_terminator() {
    assert_eq!(bounded_compare(b"ab\0X", b"ab\0Y", 10), Ordering::Equal);
}
