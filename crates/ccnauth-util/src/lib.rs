// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the ccnauth crates.
//!
//! - [`constant_time_eq`] compares MAC tags without leaking the position of
//!   the first differing byte.
//! - [`try_split_at_mut`] splits a buffer without panicking.
//! - [`hex_to_bytes`] decodes test vectors (requires `test-utils`).

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal. For equal lengths the running
/// time does not depend on where the slices differ.
///
/// # Example
///
/// ```
/// use ccnauth_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Splits a mutable slice at `mid`, or returns `None` when `mid` is out of
/// bounds.
///
/// # Example
///
/// ```
/// use ccnauth_util::try_split_at_mut;
///
/// let mut data = [1u8, 2, 3];
/// let (left, right) = try_split_at_mut(&mut data, 1).expect("in bounds");
/// assert_eq!(left, &[1]);
/// assert_eq!(right, &[2, 3]);
/// assert!(try_split_at_mut(&mut data, 4).is_none());
/// ```
#[inline]
pub fn try_split_at_mut<T>(slice: &mut [T], mid: usize) -> Option<(&mut [T], &mut [T])> {
    if mid > slice.len() {
        return None;
    }

    Some(slice.split_at_mut(mid))
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use ccnauth_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
