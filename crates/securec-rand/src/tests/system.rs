// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_fill_bytes_with_failure() {
    let mut bytes = [0u8; 32];
    let result =
        SystemEntropySource::fill_bytes_with(&|_| Err(GetRandomError::UNSUPPORTED), &mut bytes);

    assert!(result.is_err());
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)))
}

#[test]
fn test_fill_bytes_ok() {
    let source = SystemEntropySource {};
    let mut bytes = [0u8; 32];
    let result = source.fill_bytes(&mut bytes);

    assert!(result.is_ok());
}

#[test]
fn test_fill_bytes_is_not_constant() {
    let source = SystemEntropySource {};
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    source.fill_bytes(&mut a).expect("Failed to fill_bytes(..) (#0)");
    source.fill_bytes(&mut b).expect("Failed to fill_bytes(..) (#1)");

    // 2^-256 chance of a false failure.
    assert_ne!(a, b);
}

#[test]
fn test_fill_bytes_through_reference() {
    let source = SystemEntropySource {};
    let by_ref: &dyn EntropySource = &source;
    let mut bytes = [0u8; 16];

    assert!((&by_ref).fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_entropy_error_maps_to_fail() {
    use securec_core::SecError;

    assert_eq!(SecError::from(EntropyError::EntropyNotAvailable), SecError::Fail);
    assert_eq!(
        SecError::from(EntropyError::ShortFill {
            requested: 8,
            filled: 3
        }),
        SecError::Fail
    );
}
