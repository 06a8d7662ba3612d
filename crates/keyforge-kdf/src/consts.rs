// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyforge_hash::MAX_DIGEST_SIZE;

/// RFC 5869: `L <= 255 * HashLen`
pub const HKDF_MAX_BLOCKS: usize = 255;

/// Longest secret half the TLS 1.0/1.1 PRF accepts
pub const MAX_PRF_HALF: usize = 260;

/// Longest `label || seed` the TLS PRFs accept
pub const MAX_PRF_LABEL_SEED: usize = 128;

/// Longest output the TLS 1.0/1.1 PRF produces
pub const MAX_PRF_DIGEST: usize = 224;

/// Size of the `HkdfLabel` scratch used by TLS 1.3 Expand-Label
pub const MAX_TLS13_HKDF_LABEL_SIZE: usize = 47 + MAX_DIGEST_SIZE;

/// Width of the SSH-KDF length prefix
pub(crate) const SSH_LENGTH_SIZE: usize = 4;
