// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TLS 1.3 HKDF-Expand-Label (RFC 8446 §7.1)

use keyforge_hash::HashType;
use zeroize::Zeroizing;

use crate::consts::MAX_TLS13_HKDF_LABEL_SIZE;
use crate::error::KdfError;
use crate::hkdf::expand;

/// `HKDF-Expand(prk, HkdfLabel, okm.len())`.
///
/// `HkdfLabel` is laid out as:
///
/// ```text
/// u16  length              (big-endian, okm.len())
/// u8   protocol.len() + label.len()
///      protocol || label   (protocol is normally "tls13 ")
/// u8   info.len()
///      info                (normally a transcript hash)
/// ```
///
/// The serialized label is wiped once the expansion returns.
///
/// # Errors
///
/// - [`KdfError::OutputTooLong`] if `okm` does not fit a `u16` or needs
///   more than 255 blocks.
/// - [`KdfError::BufferTooSmall`] if a length prefix overflows its byte or
///   the whole label exceeds [`MAX_TLS13_HKDF_LABEL_SIZE`].
pub fn tls13_expand_label(
    okm: &mut [u8],
    prk: &[u8],
    protocol: &[u8],
    label: &[u8],
    info: &[u8],
    hash_type: HashType,
) -> Result<(), KdfError> {
    let length = u16::try_from(okm.len()).map_err(|_| KdfError::OutputTooLong)?;
    let name_len = u8::try_from(protocol.len() + label.len()).map_err(|_| KdfError::BufferTooSmall)?;
    let info_len = u8::try_from(info.len()).map_err(|_| KdfError::BufferTooSmall)?;

    let total = 2 + 1 + usize::from(name_len) + 1 + usize::from(info_len);
    if total > MAX_TLS13_HKDF_LABEL_SIZE {
        return Err(KdfError::BufferTooSmall);
    }

    let mut data = Zeroizing::new([0u8; MAX_TLS13_HKDF_LABEL_SIZE]);
    let mut idx = 0;

    data[idx..idx + 2].copy_from_slice(&length.to_be_bytes());
    idx += 2;

    data[idx] = name_len;
    idx += 1;
    data[idx..idx + protocol.len()].copy_from_slice(protocol);
    idx += protocol.len();
    data[idx..idx + label.len()].copy_from_slice(label);
    idx += label.len();

    data[idx] = info_len;
    idx += 1;
    data[idx..idx + info.len()].copy_from_slice(info);
    idx += info.len();

    tracing::trace!(%hash_type, okm_len = okm.len(), label_len = idx, "expanding TLS 1.3 label");

    expand(hash_type, prk, &data[..idx], okm)
}
