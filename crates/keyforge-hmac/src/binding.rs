// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::fmt;

use crate::backend::{CryptoDevice, OffloadDevice};

/// Execution backends a context dispatches to.
///
/// An empty binding is pure software. Backends are shared through `Arc` so
/// one device can serve many contexts.
#[derive(Clone, Default)]
pub struct HmacBinding {
    pub(crate) device: Option<Arc<dyn CryptoDevice>>,
    pub(crate) offload: Option<Arc<dyn OffloadDevice>>,
}

impl HmacBinding {
    /// No backends; every operation runs in software.
    pub fn software() -> Self {
        Self::default()
    }

    /// Route operations to a crypto-callback device first.
    pub fn with_device(mut self, device: Arc<dyn CryptoDevice>) -> Self {
        self.device = Some(device);
        self
    }

    /// Route operations to an asynchronous offload device after the
    /// crypto-callback device.
    pub fn with_offload(mut self, offload: Arc<dyn OffloadDevice>) -> Self {
        self.offload = Some(offload);
        self
    }

    /// `true` when no backend is bound.
    #[inline]
    pub fn is_software(&self) -> bool {
        self.device.is_none() && self.offload.is_none()
    }
}

impl fmt::Debug for HmacBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacBinding")
            .field("device", &self.device.is_some())
            .field("offload", &self.offload.is_some())
            .finish()
    }
}
