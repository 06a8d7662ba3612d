// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Inner pad byte
pub const IPAD: u8 = 0x36;

/// Outer pad byte
pub const OPAD: u8 = 0x5c;

/// Longest hardware key identifier accepted by [`Hmac::with_key_id`](crate::Hmac::with_key_id)
pub const HMAC_MAX_ID_LEN: usize = 32;

/// Longest hardware key label accepted by [`Hmac::with_key_label`](crate::Hmac::with_key_label)
pub const HMAC_MAX_LABEL_LEN: usize = 32;

/// Shortest key SetKey accepts when the `fips` feature is enabled
pub const HMAC_FIPS_MIN_KEY: usize = 14;
