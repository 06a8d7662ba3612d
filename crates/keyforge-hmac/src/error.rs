// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyforge_hash::HashError;
use thiserror::Error;

/// Error reported by a device or offload backend
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// Backend cannot serve this operation; the next backend is tried
    #[error("backend unavailable for this operation")]
    Unavailable,

    /// Backend attempted the operation and failed with a driver code
    #[error("backend failed with code {0}")]
    Failed(i32),
}

/// HMAC engine error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// Hash id does not name a supported algorithm
    #[error("unsupported hash algorithm id {0}")]
    UnsupportedAlgorithm(u8),

    /// Update or Final before SetKey
    #[error("context has no key")]
    NotKeyed,

    /// Output buffer cannot hold the MAC
    #[error("output buffer too small: need {needed} bytes, got {actual}")]
    OutputTooSmall {
        /// Digest size of the keyed algorithm
        needed: usize,
        /// Length of the buffer supplied
        actual: usize,
    },

    /// Key identifier or label does not fit its fixed buffer
    #[error("key identifier or label length out of range")]
    BufferTooSmall,

    /// Key shorter than the FIPS minimum
    #[error("key shorter than the FIPS minimum")]
    KeyTooShort,

    /// Scratch allocation failed
    #[error("allocation failure")]
    AllocationFailure,

    /// Computed MAC differs from the expected tag
    #[error("MAC verification failed")]
    TagMismatch,

    /// Offload job is still in flight; poll until it completes
    #[error("offload operation pending")]
    Pending,

    /// Underlying hash failure
    #[error("hash error: {0}")]
    Hash(#[from] HashError),

    /// Backend failure other than unavailability
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}
