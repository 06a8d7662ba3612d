// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend dispatch: crypto-callback device, then asynchronous offload,
//! then software.

mod device;
mod offload;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use keyforge_hash::{HashType, MAX_BLOCK_SIZE};
use zeroize::{Zeroize, Zeroizing};

use crate::binding::HmacBinding;
use crate::error::{DeviceError, HmacError};
use crate::key_ref::KeyRef;

pub use device::{CryptoDevice, DeviceSession, HmacRequest};
pub use offload::{OffloadDevice, OffloadJob, OffloadStatus};

/// The operation a backend is asked to perform.
pub enum HmacOp<'a> {
    /// Absorb message bytes.
    Update(&'a [u8]),
    /// Produce the MAC into a buffer of exactly `digest_size` bytes.
    Final(&'a mut [u8]),
}

impl HmacOp<'_> {
    /// Shorter-lived copy of this operation, so it can be offered to the
    /// next backend after one declines.
    pub fn reborrow(&mut self) -> HmacOp<'_> {
        match self {
            HmacOp::Update(data) => HmacOp::Update(*data),
            HmacOp::Final(out) => HmacOp::Final(&mut **out),
        }
    }

    #[inline]
    pub(crate) fn is_final(&self) -> bool {
        matches!(self, HmacOp::Final(_))
    }
}

impl fmt::Debug for HmacOp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HmacOp::Update(data) => f.debug_tuple("Update").field(&data.len()).finish(),
            HmacOp::Final(out) => f.debug_tuple("Final").field(&out.len()).finish(),
        }
    }
}

/// Outcome of offering an operation to one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Handled,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingOp {
    Update,
    Final,
}

type Handler = fn(&mut Dispatcher, HashType, HmacOp<'_>) -> Result<Dispatch, HmacError>;

/// Backends in the order they are tried. Software is the implicit last link.
const CHAIN: [(&str, Handler); 2] = [
    ("device", Dispatcher::via_device),
    ("offload", Dispatcher::via_offload),
];

/// Backend half of an HMAC context.
///
/// Holds the bound backends together with the per-key state they need: a
/// copy of the raw key for the device and the clamped normalised key for the
/// offload engine. Both copies are zeroized on rekey and on Free.
pub(crate) struct Dispatcher {
    device: Option<Arc<dyn CryptoDevice>>,
    offload: Option<Arc<dyn OffloadDevice>>,
    key_ref: Option<KeyRef>,
    session: DeviceSession,
    device_key: Zeroizing<Vec<u8>>,
    offload_key: Zeroizing<[u8; MAX_BLOCK_SIZE]>,
    offload_key_len: usize,
    offload_active: bool,
    pending: Option<PendingOp>,
}

impl Dispatcher {
    pub(crate) fn new(binding: HmacBinding, key_ref: Option<KeyRef>) -> Self {
        Self {
            device: binding.device,
            offload: binding.offload,
            key_ref,
            session: DeviceSession::default(),
            device_key: Zeroizing::new(Vec::new()),
            offload_key: Zeroizing::new([0u8; MAX_BLOCK_SIZE]),
            offload_key_len: 0,
            offload_active: false,
            pending: None,
        }
    }

    /// Keep a copy of the raw key for the device, if one is bound.
    pub(crate) fn bind_device_key(&mut self, key: &[u8]) -> Result<(), HmacError> {
        self.device_key.zeroize();

        if self.device.is_none() {
            return Ok(());
        }

        self.device_key
            .try_reserve_exact(key.len())
            .map_err(|_| HmacError::AllocationFailure)?;
        self.device_key.extend_from_slice(key);

        Ok(())
    }

    /// Hand the normalised key to the offload engine if it accepts the
    /// algorithm. The key is clamped to the block size.
    pub(crate) fn bind_offload_key(&mut self, hash_type: HashType, normalised: &[u8]) {
        self.offload_key.zeroize();
        self.offload_key_len = 0;
        self.offload_active = false;
        self.pending = None;

        let Some(offload) = self.offload.as_ref() else {
            return;
        };

        if !offload.accepts(hash_type) {
            tracing::debug!(%hash_type, "offload engine declined algorithm");
            return;
        }

        let len = normalised.len().min(hash_type.block_size());
        self.offload_key[..len].copy_from_slice(&normalised[..len]);
        self.offload_key_len = len;
        self.offload_active = true;
    }

    /// Offer `op` to each backend in turn.
    ///
    /// Returns [`Dispatch::Unavailable`] when every backend declined and
    /// the software path must run.
    pub(crate) fn dispatch(
        &mut self,
        hash_type: HashType,
        mut op: HmacOp<'_>,
    ) -> Result<Dispatch, HmacError> {
        if self.pending.is_some() {
            return Err(HmacError::Pending);
        }

        for (name, handler) in CHAIN {
            match handler(self, hash_type, op.reborrow())? {
                Dispatch::Handled => {
                    tracing::trace!(backend = name, ?op, "backend handled operation");
                    return Ok(Dispatch::Handled);
                }
                Dispatch::Unavailable => {
                    tracing::trace!(backend = name, ?op, "backend unavailable, falling through");
                }
            }
        }

        Ok(Dispatch::Unavailable)
    }

    fn via_device(&mut self, hash_type: HashType, op: HmacOp<'_>) -> Result<Dispatch, HmacError> {
        let Some(device) = self.device.as_ref() else {
            return Ok(Dispatch::Unavailable);
        };

        let request = HmacRequest {
            hash_type,
            key: &self.device_key[..],
            key_ref: self.key_ref.as_ref(),
            op,
            session: &mut self.session,
        };

        match device.hmac(request) {
            Ok(()) => Ok(Dispatch::Handled),
            Err(DeviceError::Unavailable) => Ok(Dispatch::Unavailable),
            Err(err) => Err(err.into()),
        }
    }

    fn via_offload(&mut self, hash_type: HashType, op: HmacOp<'_>) -> Result<Dispatch, HmacError> {
        let Some(offload) = self.offload.as_ref() else {
            return Ok(Dispatch::Unavailable);
        };

        if !self.offload_active {
            return Ok(Dispatch::Unavailable);
        }

        let pending_op = if op.is_final() {
            PendingOp::Final
        } else {
            PendingOp::Update
        };

        let job = OffloadJob {
            hash_type,
            key: &self.offload_key[..self.offload_key_len],
            op,
        };

        match offload.submit(job) {
            Ok(OffloadStatus::Complete) => Ok(Dispatch::Handled),
            Ok(OffloadStatus::Pending) => {
                tracing::debug!(%hash_type, ?pending_op, "offload job pending");
                self.pending = Some(pending_op);
                Err(HmacError::Pending)
            }
            Err(DeviceError::Unavailable) => Ok(Dispatch::Unavailable),
            Err(err) => Err(err.into()),
        }
    }

    /// Outstanding offload operation, if any.
    #[inline]
    pub(crate) fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    /// Drive the outstanding offload job. `Ok(true)` once nothing is in
    /// flight.
    pub(crate) fn poll(&mut self, out: &mut [u8]) -> Result<bool, HmacError> {
        if self.pending.is_none() {
            return Ok(true);
        }

        let Some(offload) = self.offload.as_ref() else {
            self.pending = None;
            return Ok(true);
        };

        match offload.poll(out) {
            Ok(OffloadStatus::Pending) => Ok(false),
            Ok(OffloadStatus::Complete) => {
                self.pending = None;
                Ok(true)
            }
            Err(err) => {
                self.pending = None;
                Err(err.into())
            }
        }
    }

    /// Close a device session left open by a context freed before Final.
    ///
    /// The device's answer is discarded.
    pub(crate) fn close_session(&mut self, hash_type: HashType) {
        let Some(device) = self.device.as_ref() else {
            return;
        };

        if !self.session.is_open() {
            return;
        }

        tracing::debug!(%hash_type, "closing device session left open");

        let mut scratch = Zeroizing::new([0u8; MAX_BLOCK_SIZE]);
        let request = HmacRequest {
            hash_type,
            key: &self.device_key[..],
            key_ref: self.key_ref.as_ref(),
            op: HmacOp::Final(&mut scratch[..hash_type.digest_size()]),
            session: &mut self.session,
        };
        let _ = device.hmac(request);

        self.session.close();
    }

    /// Drop every key copy and any outstanding job.
    pub(crate) fn clear_key(&mut self) {
        self.device_key.zeroize();
        self.offload_key.zeroize();
        self.offload_key_len = 0;
        self.offload_active = false;
        self.pending = None;
    }

    #[cfg(test)]
    pub(crate) fn is_key_cleared(&self) -> bool {
        self.device_key.is_empty()
            && keyforge_util::is_slice_zeroized(&self.offload_key[..])
            && self.offload_key_len == 0
            && !self.offload_active
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("device", &self.device.is_some())
            .field("offload", &self.offload.is_some())
            .field("key_ref", &self.key_ref)
            .field("session", &self.session)
            .field("offload_active", &self.offload_active)
            .field("pending", &self.pending)
            .finish()
    }
}
