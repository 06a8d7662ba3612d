// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Crypto-callback device seam.

use core::fmt;

use keyforge_hash::HashType;

use super::HmacOp;
use crate::error::DeviceError;
use crate::key_ref::KeyRef;

/// Per-context state a device keeps between Update and Final.
///
/// A device opens a session on the first operation of a message and closes
/// it on Final. A session still open at Free is closed by issuing a Final
/// whose result is discarded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeviceSession {
    handle: Option<u64>,
}

impl DeviceSession {
    /// Record the device handle of a started message.
    #[inline]
    pub fn open(&mut self, handle: u64) {
        self.handle = Some(handle);
    }

    /// Forget the handle, returning it if one was open.
    #[inline]
    pub fn close(&mut self) -> Option<u64> {
        self.handle.take()
    }

    /// Device handle of the message in progress.
    #[inline]
    pub fn handle(&self) -> Option<u64> {
        self.handle
    }

    /// `true` while a message is in progress on the device.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

/// One HMAC operation offered to a [`CryptoDevice`].
pub struct HmacRequest<'a> {
    /// Algorithm bound at SetKey
    pub hash_type: HashType,
    /// Raw key as passed to SetKey (not normalised)
    pub key: &'a [u8],
    /// Device-resident key, if the context was built with one
    pub key_ref: Option<&'a KeyRef>,
    /// Update or Final
    pub op: HmacOp<'a>,
    /// Session slot owned by the context
    pub session: &'a mut DeviceSession,
}

/// Crypto-callback device.
///
/// Returning [`DeviceError::Unavailable`] declines the operation without
/// consuming it; the dispatcher then tries the next backend. Any other error
/// is reported to the caller as is.
pub trait CryptoDevice: Send + Sync {
    /// Perform `request`. On Final, the MAC goes into the `HmacOp::Final`
    /// buffer, which is exactly `digest_size` bytes long.
    fn hmac(&self, request: HmacRequest<'_>) -> Result<(), DeviceError>;
}

impl fmt::Debug for HmacRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacRequest")
            .field("hash_type", &self.hash_type)
            .field("key_len", &self.key.len())
            .field("key_ref", &self.key_ref)
            .field("op", &self.op)
            .field("session", &self.session)
            .finish()
    }
}
