// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Behaviour-driven backend mocks for exercising the dispatcher.

mod device_mock;
mod offload_mock;

pub use device_mock::{DEVICE_MOCK_MARKER, DeviceMock, DeviceMockBehaviour};
pub use offload_mock::{OFFLOAD_MOCK_MARKER, OffloadMock, OffloadMockBehaviour};
