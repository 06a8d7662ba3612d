// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Running hash of any supported algorithm.

use core::fmt;

use crate::capability::HashCapability;
use crate::error::HashError;
use crate::hash_type::HashType;

/// One active hash computation, tagged by its algorithm.
///
/// Only one variant is ever live; switching algorithms means dropping this
/// state and building a new one.
#[derive(Clone)]
pub enum HashState {
    /// MD5
    Md5(md5::Md5),
    /// SHA-1
    Sha1(sha1::Sha1),
    /// SHA-224
    Sha224(sha2::Sha224),
    /// SHA-256
    Sha256(sha2::Sha256),
    /// SHA-384
    Sha384(sha2::Sha384),
    /// SHA-512
    Sha512(sha2::Sha512),
    /// SHA3-224
    Sha3_224(sha3::Sha3_224),
    /// SHA3-256
    Sha3_256(sha3::Sha3_256),
    /// SHA3-384
    Sha3_384(sha3::Sha3_384),
    /// SHA3-512
    Sha3_512(sha3::Sha3_512),
}

macro_rules! with_hasher {
    ($state:expr, $h:ident => $body:expr) => {
        match $state {
            HashState::Md5($h) => $body,
            HashState::Sha1($h) => $body,
            HashState::Sha224($h) => $body,
            HashState::Sha256($h) => $body,
            HashState::Sha384($h) => $body,
            HashState::Sha512($h) => $body,
            HashState::Sha3_224($h) => $body,
            HashState::Sha3_256($h) => $body,
            HashState::Sha3_384($h) => $body,
            HashState::Sha3_512($h) => $body,
        }
    };
}

impl HashState {
    /// Initialize a fresh state for `hash_type`.
    pub fn new(hash_type: HashType) -> Self {
        match hash_type {
            HashType::Md5 => HashState::Md5(HashCapability::init()),
            HashType::Sha1 => HashState::Sha1(HashCapability::init()),
            HashType::Sha224 => HashState::Sha224(HashCapability::init()),
            HashType::Sha256 => HashState::Sha256(HashCapability::init()),
            HashType::Sha384 => HashState::Sha384(HashCapability::init()),
            HashType::Sha512 => HashState::Sha512(HashCapability::init()),
            HashType::Sha3_224 => HashState::Sha3_224(HashCapability::init()),
            HashType::Sha3_256 => HashState::Sha3_256(HashCapability::init()),
            HashType::Sha3_384 => HashState::Sha3_384(HashCapability::init()),
            HashType::Sha3_512 => HashState::Sha3_512(HashCapability::init()),
        }
    }

    /// Algorithm of the live variant.
    pub fn hash_type(&self) -> HashType {
        fn tag_of<H: HashCapability>(_: &H) -> HashType {
            H::HASH_TYPE
        }

        with_hasher!(self, h => tag_of(h))
    }

    /// Digest length of the live variant.
    #[inline]
    pub fn digest_size(&self) -> usize {
        self.hash_type().digest_size()
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        with_hasher!(self, h => h.absorb(data));
        Ok(())
    }

    /// Write the digest into the first `digest_size()` bytes of `out` and
    /// reset the running state for the next message.
    ///
    /// # Errors
    ///
    /// [`HashError::OutputTooSmall`] if `out` is shorter than the digest; the
    /// running state is left untouched in that case.
    pub fn finalize_reset(&mut self, out: &mut [u8]) -> Result<(), HashError> {
        let needed = self.digest_size();
        if out.len() < needed {
            return Err(HashError::OutputTooSmall {
                needed,
                actual: out.len(),
            });
        }

        let out = &mut out[..needed];
        with_hasher!(self, h => h.finalize_reset(out));
        Ok(())
    }

    /// Hash `data` in one shot into `out`.
    pub fn digest(hash_type: HashType, data: &[u8], out: &mut [u8]) -> Result<(), HashError> {
        let mut state = HashState::new(hash_type);
        state.update(data)?;
        state.finalize_reset(out)
    }
}

impl fmt::Debug for HashState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashState").field(&self.hash_type()).finish()
    }
}
