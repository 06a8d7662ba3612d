// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock crypto-callback device.

use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use crate::backend::{CryptoDevice, HmacOp, HmacRequest};
use crate::error::DeviceError;

/// Byte a [`DeviceMock`] fills every MAC it produces with.
pub const DEVICE_MOCK_MARKER: u8 = 0xd5;

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMockBehaviour {
    /// Handle every operation.
    None,
    /// Decline every operation.
    Unavailable,
    /// Fail update at call index (0-indexed).
    FailUpdateAt(usize),
    /// Fail final at call index (0-indexed).
    FailFinalAt(usize),
}

/// Mock device that answers Final with [`DEVICE_MOCK_MARKER`] bytes.
///
/// Opens a session on the first Update of a message and closes it on
/// Final, so leftover sessions can be observed.
pub struct DeviceMock {
    behaviour: DeviceMockBehaviour,
    update_count: AtomicUsize,
    final_count: AtomicUsize,
    last_key_len: AtomicUsize,
    saw_key_ref: AtomicBool,
    next_handle: AtomicU64,
}

impl DeviceMock {
    /// Creates a new mock device with the specified behaviour.
    pub fn new(behaviour: DeviceMockBehaviour) -> Self {
        Self {
            behaviour,
            update_count: AtomicUsize::new(0),
            final_count: AtomicUsize::new(0),
            last_key_len: AtomicUsize::new(0),
            saw_key_ref: AtomicBool::new(false),
            next_handle: AtomicU64::new(1),
        }
    }

    /// Update requests received, handled or not.
    pub fn update_count(&self) -> usize {
        self.update_count.load(Ordering::Relaxed)
    }

    /// Final requests received, handled or not.
    pub fn final_count(&self) -> usize {
        self.final_count.load(Ordering::Relaxed)
    }

    /// Length of the raw key carried by the last request.
    pub fn last_key_len(&self) -> usize {
        self.last_key_len.load(Ordering::Relaxed)
    }

    /// Whether the last request carried a key id or label.
    pub fn saw_key_ref(&self) -> bool {
        self.saw_key_ref.load(Ordering::Relaxed)
    }
}

impl CryptoDevice for DeviceMock {
    fn hmac(&self, request: HmacRequest<'_>) -> Result<(), DeviceError> {
        self.last_key_len.store(request.key.len(), Ordering::Relaxed);
        self.saw_key_ref.store(request.key_ref.is_some(), Ordering::Relaxed);

        match request.op {
            HmacOp::Update(_) => {
                let current = self.update_count.fetch_add(1, Ordering::Relaxed);

                match self.behaviour {
                    DeviceMockBehaviour::Unavailable => return Err(DeviceError::Unavailable),
                    DeviceMockBehaviour::FailUpdateAt(idx) if current == idx => {
                        return Err(DeviceError::Failed(-1));
                    }
                    _ => {}
                }

                if !request.session.is_open() {
                    let handle = self.next_handle.fetch_add(1, Ordering::Relaxed);
                    request.session.open(handle);
                }

                Ok(())
            }
            HmacOp::Final(out) => {
                let current = self.final_count.fetch_add(1, Ordering::Relaxed);

                match self.behaviour {
                    DeviceMockBehaviour::Unavailable => return Err(DeviceError::Unavailable),
                    DeviceMockBehaviour::FailFinalAt(idx) if current == idx => {
                        request.session.close();
                        return Err(DeviceError::Failed(-2));
                    }
                    _ => {}
                }

                out.fill(DEVICE_MOCK_MARKER);
                request.session.close();

                Ok(())
            }
        }
    }
}
