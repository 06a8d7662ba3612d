// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyforge_hash::HashType;

/// MAC algorithm named by a TLS cipher suite.
///
/// Ordered from weakest to strongest, except [`MacAlgorithm::Blake2b`]
/// which sorts last but has no PRF of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MacAlgorithm {
    /// No MAC
    None,
    /// HMAC-MD5
    Md5,
    /// HMAC-SHA1
    Sha1,
    /// HMAC-SHA224
    Sha224,
    /// HMAC-SHA256
    Sha256,
    /// HMAC-SHA384
    Sha384,
    /// HMAC-SHA512
    Sha512,
    /// BLAKE2b
    Blake2b,
}

impl MacAlgorithm {
    /// Hash `P_hash` runs over. MD5 and SHA-256/384/512 map directly;
    /// everything else runs over SHA-1.
    pub const fn prf_hash_type(self) -> HashType {
        match self {
            MacAlgorithm::Md5 => HashType::Md5,
            MacAlgorithm::Sha256 => HashType::Sha256,
            MacAlgorithm::Sha384 => HashType::Sha384,
            MacAlgorithm::Sha512 => HashType::Sha512,
            MacAlgorithm::None
            | MacAlgorithm::Sha1
            | MacAlgorithm::Sha224
            | MacAlgorithm::Blake2b => HashType::Sha1,
        }
    }

    /// Raise weak or PRF-less choices to SHA-256 for TLS 1.2.
    pub fn at_least_sha256(self) -> Self {
        if self < MacAlgorithm::Sha256 || self == MacAlgorithm::Blake2b {
            MacAlgorithm::Sha256
        } else {
            self
        }
    }
}
