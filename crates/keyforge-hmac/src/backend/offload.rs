// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Asynchronous offload seam.

use core::fmt;

use keyforge_hash::HashType;

use super::HmacOp;
use crate::error::DeviceError;

/// Progress of a submitted offload job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffloadStatus {
    /// Job finished; any output has been written.
    Complete,
    /// Job accepted and still running.
    Pending,
}

/// One HMAC operation submitted to an [`OffloadDevice`].
pub struct OffloadJob<'a> {
    /// Algorithm bound at SetKey
    pub hash_type: HashType,
    /// Normalised key, clamped to the algorithm's block size
    pub key: &'a [u8],
    /// Update or Final
    pub op: HmacOp<'a>,
}

/// Asynchronous offload engine.
///
/// Jobs are not cancellable. A job answered with [`OffloadStatus::Pending`]
/// is driven to completion through [`OffloadDevice::poll`].
pub trait OffloadDevice: Send + Sync {
    /// Whether the engine can run HMAC over `hash_type`. Asked once at SetKey.
    fn accepts(&self, hash_type: HashType) -> bool;

    /// Start `job`.
    fn submit(&self, job: OffloadJob<'_>) -> Result<OffloadStatus, DeviceError>;

    /// Check on the outstanding job. When that job is a Final, the MAC is
    /// written into the first `digest_size` bytes of `out` on completion;
    /// `out` is ignored otherwise.
    fn poll(&self, out: &mut [u8]) -> Result<OffloadStatus, DeviceError>;
}

impl fmt::Debug for OffloadJob<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffloadJob")
            .field("hash_type", &self.hash_type)
            .field("key_len", &self.key.len())
            .field("op", &self.op)
            .finish()
    }
}
