// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers shared by the keyforge crates.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal without inspecting contents.
///
/// # Example
///
/// ```
/// use keyforge_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// XORs `src` into `dst` byte by byte.
///
/// Only the common prefix `min(dst.len(), src.len())` is touched.
#[inline]
pub fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Returns `true` if every byte of the slice is zero.
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|b| *b == 0)
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
/// use keyforge_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
