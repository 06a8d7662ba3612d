// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TLS pseudorandom functions (RFC 2246 §5, RFC 5246 §5)

use alloc::vec::Vec;

use keyforge_hash::MAX_DIGEST_SIZE;
use keyforge_hmac::{Hmac, HmacBinding};
use keyforge_util::xor_into;
use zeroize::{Zeroize, Zeroizing};

use crate::consts::{MAX_PRF_DIGEST, MAX_PRF_HALF, MAX_PRF_LABEL_SEED};
use crate::error::KdfError;
use crate::mac_algorithm::MacAlgorithm;

/// `P_hash(secret, seed)` truncated to `out.len()` bytes.
///
/// `A(0) = seed`, `A(i) = HMAC(secret, A(i-1))`, output
/// `HMAC(secret, A(1) || seed) || HMAC(secret, A(2) || seed) || ...`.
/// One context is keyed once and reused for every HMAC of the run.
///
/// The hash follows [`MacAlgorithm::prf_hash_type`].
///
/// # Errors
///
/// [`KdfError::Hmac`] if the HMAC engine or a bound backend fails.
pub fn prf(
    out: &mut [u8],
    secret: &[u8],
    seed: &[u8],
    mac: MacAlgorithm,
    binding: &HmacBinding,
) -> Result<(), KdfError> {
    let result = p_hash(out, secret, seed, mac, binding);
    if result.is_err() {
        out.zeroize();
    }

    result
}

fn p_hash(
    out: &mut [u8],
    secret: &[u8],
    seed: &[u8],
    mac: MacAlgorithm,
    binding: &HmacBinding,
) -> Result<(), KdfError> {
    let hash_type = mac.prf_hash_type();
    let digest_size = hash_type.digest_size();

    let mut previous = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
    let mut current = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);

    let mut hmac = Hmac::new(binding.clone());
    hmac.set_key(hash_type, secret)?;

    // A(1)
    hmac.update(seed)?;
    hmac.finalize(&mut previous[..])?;

    for block in out.chunks_mut(digest_size) {
        hmac.update(&previous[..digest_size])?;
        hmac.update(seed)?;
        hmac.finalize(&mut current[..])?;
        block.copy_from_slice(&current[..block.len()]);

        if block.len() == digest_size {
            hmac.update(&previous[..digest_size])?;
            hmac.finalize(&mut previous[..])?;
        }
    }

    Ok(())
}

/// TLS 1.0/1.1 PRF: `P_MD5(S1, label || seed) XOR P_SHA1(S2, label || seed)`.
///
/// `S1` is the first `ceil(len/2)` bytes of `secret` and `S2` the last
/// `ceil(len/2)`; they share the middle byte when the length is odd.
///
/// # Errors
///
/// - [`KdfError::BufferTooSmall`] if a half exceeds [`MAX_PRF_HALF`],
///   `label || seed` exceeds [`MAX_PRF_LABEL_SEED`] or `out` exceeds
///   [`MAX_PRF_DIGEST`].
/// - [`KdfError::AllocationFailure`] if the SHA-1 scratch cannot be
///   allocated.
pub fn prf_tls_v1(
    out: &mut [u8],
    secret: &[u8],
    label: &[u8],
    seed: &[u8],
    binding: &HmacBinding,
) -> Result<(), KdfError> {
    let half = secret.len().div_ceil(2);

    if half > MAX_PRF_HALF
        || label.len() + seed.len() > MAX_PRF_LABEL_SEED
        || out.len() > MAX_PRF_DIGEST
    {
        return Err(KdfError::BufferTooSmall);
    }

    let md5_half = &secret[..half];
    let sha_half = &secret[half - secret.len() % 2..];

    let mut label_seed = Zeroizing::new([0u8; MAX_PRF_LABEL_SEED]);
    let label_seed = concat_label_seed(&mut label_seed, label, seed);

    let mut sha_result = Zeroizing::new(Vec::new());
    sha_result
        .try_reserve_exact(out.len())
        .map_err(|_| KdfError::AllocationFailure)?;
    sha_result.resize(out.len(), 0);

    prf(out, md5_half, label_seed, MacAlgorithm::Md5, binding)?;
    if let Err(err) = prf(&mut sha_result[..], sha_half, label_seed, MacAlgorithm::Sha1, binding) {
        out.zeroize();
        return Err(err);
    }

    xor_into(out, &sha_result[..]);

    Ok(())
}

/// PRF dispatch by TLS version.
///
/// With `use_at_least_sha256` (TLS 1.2) runs [`prf`] over `label || seed`
/// with `mac` raised by [`MacAlgorithm::at_least_sha256`]. Otherwise runs
/// [`prf_tls_v1`].
///
/// # Errors
///
/// [`KdfError::BufferTooSmall`] if `label || seed` exceeds
/// [`MAX_PRF_LABEL_SEED`], otherwise as the selected PRF.
pub fn prf_tls(
    out: &mut [u8],
    secret: &[u8],
    label: &[u8],
    seed: &[u8],
    use_at_least_sha256: bool,
    mac: MacAlgorithm,
    binding: &HmacBinding,
) -> Result<(), KdfError> {
    if !use_at_least_sha256 {
        tracing::trace!("selecting TLS 1.0/1.1 dual-hash PRF");
        return prf_tls_v1(out, secret, label, seed, binding);
    }

    if label.len() + seed.len() > MAX_PRF_LABEL_SEED {
        return Err(KdfError::BufferTooSmall);
    }

    let mut label_seed = Zeroizing::new([0u8; MAX_PRF_LABEL_SEED]);
    let label_seed = concat_label_seed(&mut label_seed, label, seed);

    let mac = mac.at_least_sha256();
    tracing::trace!(?mac, "selecting TLS 1.2 PRF");

    prf(out, secret, label_seed, mac, binding)
}

/// Caller guarantees `label.len() + seed.len() <= MAX_PRF_LABEL_SEED`.
fn concat_label_seed<'a>(
    buf: &'a mut [u8; MAX_PRF_LABEL_SEED],
    label: &[u8],
    seed: &[u8],
) -> &'a [u8] {
    let len = label.len() + seed.len();
    buf[..label.len()].copy_from_slice(label);
    buf[label.len()..len].copy_from_slice(seed);

    &buf[..len]
}
