// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hash capability error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// Numeric hash id does not name a supported algorithm
    #[error("unsupported hash algorithm id {0}")]
    UnsupportedAlgorithm(u8),

    /// Output buffer cannot hold the digest
    #[error("output buffer too small: need {needed} bytes, got {actual}")]
    OutputTooSmall {
        /// Digest size of the algorithm
        needed: usize,
        /// Length of the buffer supplied
        actual: usize,
    },
}
