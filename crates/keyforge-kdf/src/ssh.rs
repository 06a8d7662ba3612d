// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SSH transport key derivation (RFC 4253 §7.2)

use keyforge_hash::{HashState, HashType, MAX_DIGEST_SIZE};
use zeroize::{Zeroize, Zeroizing};

use crate::consts::SSH_LENGTH_SIZE;
use crate::error::KdfError;

/// Shared secret `K` as an SSH `mpint`: big-endian length, then a zero
/// sign byte when the top bit is set, then the magnitude.
struct Mpint<'a> {
    length: [u8; SSH_LENGTH_SIZE],
    pad: bool,
    magnitude: &'a [u8],
}

impl<'a> Mpint<'a> {
    fn new(k: &'a [u8]) -> Result<Self, KdfError> {
        let pad = k[0] & 0x80 != 0;
        let length = u32::try_from(k.len() + usize::from(pad))
            .map_err(|_| KdfError::InvalidArgument)?;

        Ok(Self {
            length: length.to_be_bytes(),
            pad,
            magnitude: k,
        })
    }

    fn absorb_into(&self, state: &mut HashState) -> Result<(), KdfError> {
        state.update(&self.length)?;
        if self.pad {
            state.update(&[0])?;
        }
        state.update(self.magnitude)?;

        Ok(())
    }
}

/// Derive one SSH transport key into `key_out`.
///
/// ```text
/// K1 = HASH(K || H || key_id || session_id)
/// Kn = HASH(K || H || K1 || ... || K(n-1))
/// key_out = K1 || K2 || ...   (truncated)
/// ```
///
/// `key_id` is the single letter `b'A'..=b'F'` selecting the IV,
/// encryption or integrity key of either direction. `k` is the raw shared
/// secret magnitude; it is `mpint`-encoded here.
///
/// # Errors
///
/// - [`KdfError::InvalidArgument`] if any of `key_out`, `k`, `h` or
///   `session_id` is empty, or `k` is too long to length-encode.
/// - [`KdfError::UnsupportedAlgorithm`] unless `hash_type` is SHA-1,
///   SHA-256, SHA-384 or SHA-512.
pub fn ssh_kdf(
    hash_type: HashType,
    key_id: u8,
    key_out: &mut [u8],
    k: &[u8],
    h: &[u8],
    session_id: &[u8],
) -> Result<(), KdfError> {
    if key_out.is_empty() || k.is_empty() || h.is_empty() || session_id.is_empty() {
        return Err(KdfError::InvalidArgument);
    }

    match hash_type {
        HashType::Sha1 | HashType::Sha256 | HashType::Sha384 | HashType::Sha512 => {}
        other => return Err(KdfError::UnsupportedAlgorithm(other)),
    }

    let k = Mpint::new(k)?;

    let result = derive(hash_type, key_id, key_out, &k, h, session_id);
    if result.is_err() {
        key_out.zeroize();
    }

    result
}

fn derive(
    hash_type: HashType,
    key_id: u8,
    key_out: &mut [u8],
    k: &Mpint<'_>,
    h: &[u8],
    session_id: &[u8],
) -> Result<(), KdfError> {
    let digest_size = hash_type.digest_size();
    let mut state = HashState::new(hash_type);
    let mut block = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
    let mut produced = 0;

    while produced < key_out.len() {
        k.absorb_into(&mut state)?;
        state.update(h)?;
        if produced == 0 {
            state.update(&[key_id])?;
            state.update(session_id)?;
        } else {
            state.update(&key_out[..produced])?;
        }
        state.finalize_reset(&mut block[..])?;

        let take = digest_size.min(key_out.len() - produced);
        key_out[produced..produced + take].copy_from_slice(&block[..take]);
        produced += take;
    }

    Ok(())
}
