// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF per RFC 5869

use keyforge_hash::{HashType, MAX_DIGEST_SIZE};
use keyforge_hmac::{Hmac, HmacBinding};
use zeroize::{Zeroize, Zeroizing};

use crate::consts::HKDF_MAX_BLOCKS;
use crate::error::KdfError;

/// HKDF-Extract: `PRK = HMAC-Hash(salt, IKM)`.
///
/// A `None` salt stands for `HashLen` zero bytes. The PRK is written to the
/// first `digest_size` bytes of `prk`.
///
/// # Errors
///
/// [`KdfError::Hmac`] wrapping `OutputTooSmall` if `prk` is shorter than
/// the digest.
pub fn extract(
    hash_type: HashType,
    salt: Option<&[u8]>,
    ikm: &[u8],
    prk: &mut [u8],
) -> Result<(), KdfError> {
    let zero_salt = [0u8; MAX_DIGEST_SIZE];
    let salt = salt.unwrap_or(&zero_salt[..hash_type.digest_size()]);

    let mut hmac = Hmac::new(HmacBinding::software());
    hmac.set_key(hash_type, salt)?;
    hmac.update(ikm)?;
    hmac.finalize(prk)?;

    Ok(())
}

/// HKDF-Expand: fills all of `okm` from `prk` and `info`.
///
/// `T(n) = HMAC-Hash(PRK, T(n-1) || info || n)`, with `T(0)` empty and the
/// context rekeyed for every block. An empty `okm` is a no-op.
///
/// # Errors
///
/// [`KdfError::OutputTooLong`] if `okm` needs more than 255 blocks.
pub fn expand(
    hash_type: HashType,
    prk: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), KdfError> {
    let digest_size = hash_type.digest_size();

    if okm.len().div_ceil(digest_size) > HKDF_MAX_BLOCKS {
        return Err(KdfError::OutputTooLong);
    }

    let result = expand_blocks(hash_type, prk, info, okm);
    if result.is_err() {
        okm.zeroize();
    }

    result
}

fn expand_blocks(
    hash_type: HashType,
    prk: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), KdfError> {
    let digest_size = hash_type.digest_size();
    let mut hmac = Hmac::new(HmacBinding::software());
    let mut t = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);

    for (n, block) in (1..=u8::MAX).zip(okm.chunks_mut(digest_size)) {
        hmac.set_key(hash_type, prk)?;
        if n > 1 {
            hmac.update(&t[..digest_size])?;
        }
        hmac.update(info)?;
        hmac.update(&[n])?;
        hmac.finalize(&mut t[..])?;

        block.copy_from_slice(&t[..block.len()]);
    }

    Ok(())
}

/// HKDF: Extract then Expand.
///
/// # Errors
///
/// As [`extract`] and [`expand`].
pub fn hkdf(
    hash_type: HashType,
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), KdfError> {
    let mut prk = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);

    extract(hash_type, salt, ikm, &mut prk[..])?;
    expand(hash_type, &prk[..hash_type.digest_size()], info, okm)
}

/// TLS 1.3 HKDF-Extract.
///
/// Only SHA-256, SHA-384 and SHA-512 are allowed. An empty `ikm` is replaced
/// by `HashLen` zero bytes, as the TLS 1.3 key schedule requires.
///
/// # Errors
///
/// [`KdfError::UnsupportedAlgorithm`] for any other hash, otherwise as
/// [`extract`].
pub fn tls13_extract(
    hash_type: HashType,
    salt: &[u8],
    ikm: &[u8],
    prk: &mut [u8],
) -> Result<(), KdfError> {
    match hash_type {
        HashType::Sha256 | HashType::Sha384 | HashType::Sha512 => {}
        other => return Err(KdfError::UnsupportedAlgorithm(other)),
    }

    let zero_ikm = [0u8; MAX_DIGEST_SIZE];
    let ikm = if ikm.is_empty() {
        &zero_ikm[..hash_type.digest_size()]
    } else {
        ikm
    };

    extract(hash_type, Some(salt), ikm, prk)
}
