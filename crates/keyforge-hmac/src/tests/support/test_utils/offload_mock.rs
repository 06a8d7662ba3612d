// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyforge_hash::HashType;

use crate::backend::{HmacOp, OffloadDevice, OffloadJob, OffloadStatus};
use crate::error::DeviceError;
use crate::support::test_utils::{OFFLOAD_MOCK_MARKER, OffloadMock, OffloadMockBehaviour};

fn job(op: HmacOp<'_>) -> OffloadJob<'_> {
    OffloadJob {
        hash_type: HashType::Sha1,
        key: b"offload",
        op,
    }
}

#[test]
fn test_offload_mock_behaviour_none() {
    let mock = OffloadMock::new(OffloadMockBehaviour::None);
    let mut out = [0u8; 20];

    assert!(mock.accepts(HashType::Sha1));
    assert_eq!(mock.submit(job(HmacOp::Update(b"abc"))), Ok(OffloadStatus::Complete));
    assert_eq!(mock.submit(job(HmacOp::Final(&mut out))), Ok(OffloadStatus::Complete));
    assert_eq!(out, [OFFLOAD_MOCK_MARKER; 20]);
    assert_eq!(mock.absorbed(), 3);
    assert_eq!(mock.last_key_len(), 7);
}

#[test]
fn test_offload_mock_behaviour_reject() {
    let mock = OffloadMock::new(OffloadMockBehaviour::Reject);

    assert!(!mock.accepts(HashType::Sha256));
}

#[test]
fn test_offload_mock_behaviour_unavailable() {
    let mock = OffloadMock::new(OffloadMockBehaviour::Unavailable);

    assert!(mock.accepts(HashType::Sha256));
    assert_eq!(
        mock.submit(job(HmacOp::Update(b"abc"))),
        Err(DeviceError::Unavailable)
    );
    assert_eq!(mock.absorbed(), 0);
}

#[test]
fn test_offload_mock_pending_final() {
    let mock = OffloadMock::new(OffloadMockBehaviour::PendingFinal(2));
    let mut out = [0u8; 20];

    assert_eq!(mock.submit(job(HmacOp::Final(&mut out))), Ok(OffloadStatus::Pending));
    assert_eq!(out, [0u8; 20]);

    assert_eq!(mock.poll(&mut out), Ok(OffloadStatus::Pending));
    assert_eq!(mock.poll(&mut out), Ok(OffloadStatus::Complete));
    assert_eq!(out, [OFFLOAD_MOCK_MARKER; 20]);
}

#[test]
fn test_offload_mock_pending_then_fail() {
    let mock = OffloadMock::new(OffloadMockBehaviour::PendingThenFail);
    let mut out = [0u8; 20];

    assert_eq!(mock.submit(job(HmacOp::Final(&mut out))), Ok(OffloadStatus::Pending));
    assert_eq!(mock.poll(&mut out), Err(DeviceError::Failed(-4)));
}
