// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyforge_hash::{HashError, HashType};
use keyforge_hmac::HmacError;
use thiserror::Error;

/// Key derivation error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// Required input is empty or cannot be length-encoded
    #[error("invalid argument")]
    InvalidArgument,

    /// Algorithm is valid but not allowed for this derivation
    #[error("{0} is not supported by this derivation")]
    UnsupportedAlgorithm(HashType),

    /// Requested output length exceeds maximum (255 * HashLen)
    #[error("requested output length exceeds maximum (255 * HashLen)")]
    OutputTooLong,

    /// Input does not fit the derivation's fixed-size scratch
    #[error("input exceeds fixed scratch buffer")]
    BufferTooSmall,

    /// Scratch allocation failed
    #[error("allocation failure")]
    AllocationFailure,

    /// Underlying HMAC failure
    #[error("hmac error: {0}")]
    Hmac(#[from] HmacError),

    /// Underlying hash failure
    #[error("hash error: {0}")]
    Hash(#[from] HashError),
}
