// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! References to keys held inside a device.

use core::fmt;

use crate::consts::{HMAC_MAX_ID_LEN, HMAC_MAX_LABEL_LEN};
use crate::error::HmacError;

const KEY_REF_CAPACITY: usize = if HMAC_MAX_ID_LEN > HMAC_MAX_LABEL_LEN {
    HMAC_MAX_ID_LEN
} else {
    HMAC_MAX_LABEL_LEN
};

/// How a device-resident key is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRefKind {
    /// Opaque identifier bytes
    Id,
    /// Textual label
    Label,
}

/// Identifier or label of a key that lives in a [`CryptoDevice`](crate::CryptoDevice).
///
/// Stored inline; never allocates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyRef {
    kind: KeyRefKind,
    buf: [u8; KEY_REF_CAPACITY],
    len: usize,
}

impl KeyRef {
    /// Identifier of at most [`HMAC_MAX_ID_LEN`] bytes. An empty id is allowed.
    ///
    /// # Errors
    ///
    /// [`HmacError::BufferTooSmall`] if `id` is longer than [`HMAC_MAX_ID_LEN`].
    pub fn id(id: &[u8]) -> Result<Self, HmacError> {
        if id.len() > HMAC_MAX_ID_LEN {
            return Err(HmacError::BufferTooSmall);
        }

        Ok(Self::from_parts(KeyRefKind::Id, id))
    }

    /// Label of 1 to [`HMAC_MAX_LABEL_LEN`] bytes.
    ///
    /// # Errors
    ///
    /// [`HmacError::BufferTooSmall`] if `label` is empty or longer than
    /// [`HMAC_MAX_LABEL_LEN`].
    pub fn label(label: &str) -> Result<Self, HmacError> {
        if label.is_empty() || label.len() > HMAC_MAX_LABEL_LEN {
            return Err(HmacError::BufferTooSmall);
        }

        Ok(Self::from_parts(KeyRefKind::Label, label.as_bytes()))
    }

    fn from_parts(kind: KeyRefKind, bytes: &[u8]) -> Self {
        let mut buf = [0u8; KEY_REF_CAPACITY];
        buf[..bytes.len()].copy_from_slice(bytes);

        Self {
            kind,
            buf,
            len: bytes.len(),
        }
    }

    /// Whether this names the key by id or by label.
    #[inline]
    pub fn kind(&self) -> KeyRefKind {
        self.kind
    }

    /// The id or label bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Debug for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRef")
            .field("kind", &self.kind)
            .field("len", &self.len)
            .finish()
    }
}
