// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm tags and their size constants.

use core::fmt;

use crate::error::HashError;

/// Largest digest of any supported algorithm (SHA-512, SHA3-512)
pub const MAX_DIGEST_SIZE: usize = 64;

/// Largest block of any supported algorithm (SHA3-224 rate)
pub const MAX_BLOCK_SIZE: usize = 144;

/// Hash algorithm tag.
///
/// The discriminants are the numeric hash ids used on the wire by the
/// TLS/SSH callers; ids without a variant (none, MD2, MD4, MD5-SHA,
/// BLAKE2) are rejected by [`HashType::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashType {
    /// MD5 (RFC 1321)
    Md5 = 3,
    /// SHA-1 (FIPS 180-4)
    Sha1 = 4,
    /// SHA-224 (FIPS 180-4)
    Sha224 = 5,
    /// SHA-256 (FIPS 180-4)
    Sha256 = 6,
    /// SHA-384 (FIPS 180-4)
    Sha384 = 7,
    /// SHA-512 (FIPS 180-4)
    Sha512 = 8,
    /// SHA3-224 (FIPS 202)
    Sha3_224 = 10,
    /// SHA3-256 (FIPS 202)
    Sha3_256 = 11,
    /// SHA3-384 (FIPS 202)
    Sha3_384 = 12,
    /// SHA3-512 (FIPS 202)
    Sha3_512 = 13,
}

impl HashType {
    /// Every supported algorithm, in id order.
    pub const ALL: [HashType; 10] = [
        HashType::Md5,
        HashType::Sha1,
        HashType::Sha224,
        HashType::Sha256,
        HashType::Sha384,
        HashType::Sha512,
        HashType::Sha3_224,
        HashType::Sha3_256,
        HashType::Sha3_384,
        HashType::Sha3_512,
    ];

    /// Numeric hash id.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Digest length in bytes.
    #[inline]
    pub const fn digest_size(self) -> usize {
        match self {
            HashType::Md5 => 16,
            HashType::Sha1 => 20,
            HashType::Sha224 | HashType::Sha3_224 => 28,
            HashType::Sha256 | HashType::Sha3_256 => 32,
            HashType::Sha384 | HashType::Sha3_384 => 48,
            HashType::Sha512 | HashType::Sha3_512 => 64,
        }
    }

    /// Input block length in bytes (the sponge rate for SHA-3).
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            HashType::Md5 | HashType::Sha1 | HashType::Sha224 | HashType::Sha256 => 64,
            HashType::Sha384 | HashType::Sha512 => 128,
            HashType::Sha3_224 => 144,
            HashType::Sha3_256 => 136,
            HashType::Sha3_384 => 104,
            HashType::Sha3_512 => 72,
        }
    }

    /// Human-readable algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            HashType::Md5 => "MD5",
            HashType::Sha1 => "SHA-1",
            HashType::Sha224 => "SHA-224",
            HashType::Sha256 => "SHA-256",
            HashType::Sha384 => "SHA-384",
            HashType::Sha512 => "SHA-512",
            HashType::Sha3_224 => "SHA3-224",
            HashType::Sha3_256 => "SHA3-256",
            HashType::Sha3_384 => "SHA3-384",
            HashType::Sha3_512 => "SHA3-512",
        }
    }
}

impl TryFrom<u8> for HashType {
    type Error = HashError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        HashType::ALL
            .iter()
            .copied()
            .find(|t| t.id() == id)
            .ok_or(HashError::UnsupportedAlgorithm(id))
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digest size for a numeric hash id.
///
/// # Errors
///
/// [`HashError::UnsupportedAlgorithm`] if `id` names no supported algorithm.
pub fn size_by_type(id: u8) -> Result<usize, HashError> {
    HashType::try_from(id).map(HashType::digest_size)
}

/// Largest MAC/digest any supported algorithm can produce.
#[inline]
pub const fn max_digest_size() -> usize {
    MAX_DIGEST_SIZE
}
