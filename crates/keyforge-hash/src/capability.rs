// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Init/Update/Final capability over the RustCrypto hashers.

use digest::{Digest, FixedOutputReset, Output};

use crate::hash_type::HashType;

/// Streaming hash primitive bound to one algorithm tag.
///
/// Free is `Drop`.
pub trait HashCapability: Sized {
    /// Tag this implementation answers to
    const HASH_TYPE: HashType;

    /// Fresh state (Init)
    fn init() -> Self;

    /// Absorb `data` (Update)
    fn absorb(&mut self, data: &[u8]);

    /// Write the digest into `out` and reset to the initial state (Final).
    ///
    /// `out` must be exactly `HASH_TYPE.digest_size()` bytes long.
    fn finalize_reset(&mut self, out: &mut [u8]);
}

fn finalize_into<D: Digest + FixedOutputReset>(hasher: &mut D, out: &mut [u8]) {
    Digest::finalize_into_reset(hasher, Output::<D>::from_mut_slice(out));
}

macro_rules! impl_hash_capability {
    ($($hasher:ty => $tag:ident),* $(,)?) => {
        $(
            impl HashCapability for $hasher {
                const HASH_TYPE: HashType = HashType::$tag;

                #[inline]
                fn init() -> Self {
                    <$hasher as Digest>::new()
                }

                #[inline]
                fn absorb(&mut self, data: &[u8]) {
                    Digest::update(self, data);
                }

                #[inline]
                fn finalize_reset(&mut self, out: &mut [u8]) {
                    finalize_into(self, out);
                }
            }
        )*
    };
}

impl_hash_capability!(
    md5::Md5 => Md5,
    sha1::Sha1 => Sha1,
    sha2::Sha224 => Sha224,
    sha2::Sha256 => Sha256,
    sha2::Sha384 => Sha384,
    sha2::Sha512 => Sha512,
    sha3::Sha3_224 => Sha3_224,
    sha3::Sha3_256 => Sha3_256,
    sha3::Sha3_384 => Sha3_384,
    sha3::Sha3_512 => Sha3_512,
);
