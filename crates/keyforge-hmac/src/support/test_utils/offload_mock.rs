// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock asynchronous offload engine.

use core::sync::atomic::{AtomicUsize, Ordering};

use keyforge_hash::HashType;

use crate::backend::{HmacOp, OffloadDevice, OffloadJob, OffloadStatus};
use crate::error::DeviceError;

/// Byte an [`OffloadMock`] fills every MAC it produces with.
pub const OFFLOAD_MOCK_MARKER: u8 = 0x0f;

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffloadMockBehaviour {
    /// Complete every job immediately.
    None,
    /// Refuse every algorithm at SetKey.
    Reject,
    /// Accept at SetKey, then decline every job.
    Unavailable,
    /// Fail submit at call index (0-indexed).
    FailSubmitAt(usize),
    /// Queue Final and complete it on the Nth poll (1-indexed).
    PendingFinal(usize),
    /// Queue Final and fail the first poll.
    PendingThenFail,
}

/// Mock offload engine.
pub struct OffloadMock {
    behaviour: OffloadMockBehaviour,
    submit_count: AtomicUsize,
    poll_count: AtomicUsize,
    last_key_len: AtomicUsize,
    absorbed: AtomicUsize,
}

impl OffloadMock {
    /// Creates a new mock engine with the specified behaviour.
    pub fn new(behaviour: OffloadMockBehaviour) -> Self {
        Self {
            behaviour,
            submit_count: AtomicUsize::new(0),
            poll_count: AtomicUsize::new(0),
            last_key_len: AtomicUsize::new(0),
            absorbed: AtomicUsize::new(0),
        }
    }

    /// Jobs submitted, accepted or not.
    pub fn submit_count(&self) -> usize {
        self.submit_count.load(Ordering::Relaxed)
    }

    /// Polls since the last queued Final.
    pub fn poll_count(&self) -> usize {
        self.poll_count.load(Ordering::Relaxed)
    }

    /// Length of the key carried by the last job.
    pub fn last_key_len(&self) -> usize {
        self.last_key_len.load(Ordering::Relaxed)
    }

    /// Message bytes received through completed Update jobs.
    pub fn absorbed(&self) -> usize {
        self.absorbed.load(Ordering::Relaxed)
    }
}

impl OffloadDevice for OffloadMock {
    fn accepts(&self, _hash_type: HashType) -> bool {
        self.behaviour != OffloadMockBehaviour::Reject
    }

    fn submit(&self, job: OffloadJob<'_>) -> Result<OffloadStatus, DeviceError> {
        let current = self.submit_count.fetch_add(1, Ordering::Relaxed);
        self.last_key_len.store(job.key.len(), Ordering::Relaxed);

        match self.behaviour {
            OffloadMockBehaviour::Unavailable => return Err(DeviceError::Unavailable),
            OffloadMockBehaviour::FailSubmitAt(idx) if current == idx => {
                return Err(DeviceError::Failed(-3));
            }
            _ => {}
        }

        match job.op {
            HmacOp::Update(data) => {
                self.absorbed.fetch_add(data.len(), Ordering::Relaxed);
                Ok(OffloadStatus::Complete)
            }
            HmacOp::Final(out) => match self.behaviour {
                OffloadMockBehaviour::PendingFinal(_) | OffloadMockBehaviour::PendingThenFail => {
                    self.poll_count.store(0, Ordering::Relaxed);
                    Ok(OffloadStatus::Pending)
                }
                _ => {
                    out.fill(OFFLOAD_MOCK_MARKER);
                    Ok(OffloadStatus::Complete)
                }
            },
        }
    }

    fn poll(&self, out: &mut [u8]) -> Result<OffloadStatus, DeviceError> {
        let current = self.poll_count.fetch_add(1, Ordering::Relaxed) + 1;

        match self.behaviour {
            OffloadMockBehaviour::PendingThenFail => Err(DeviceError::Failed(-4)),
            OffloadMockBehaviour::PendingFinal(n) if current < n => Ok(OffloadStatus::Pending),
            _ => {
                out.fill(OFFLOAD_MOCK_MARKER);
                Ok(OffloadStatus::Complete)
            }
        }
    }
}
