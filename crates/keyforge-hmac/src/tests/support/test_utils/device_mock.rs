// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyforge_hash::HashType;

use crate::backend::{CryptoDevice, DeviceSession, HmacOp, HmacRequest};
use crate::error::DeviceError;
use crate::support::test_utils::{DEVICE_MOCK_MARKER, DeviceMock, DeviceMockBehaviour};

fn request<'a>(op: HmacOp<'a>, session: &'a mut DeviceSession) -> HmacRequest<'a> {
    HmacRequest {
        hash_type: HashType::Sha256,
        key: b"mock key",
        key_ref: None,
        op,
        session,
    }
}

#[test]
fn test_device_mock_behaviour_none() {
    let mock = DeviceMock::new(DeviceMockBehaviour::None);
    let mut session = DeviceSession::default();
    let mut out = [0u8; 32];

    assert!(mock.hmac(request(HmacOp::Update(b"data"), &mut session)).is_ok());
    assert!(session.is_open());

    assert!(mock.hmac(request(HmacOp::Final(&mut out), &mut session)).is_ok());
    assert!(!session.is_open());
    assert_eq!(out, [DEVICE_MOCK_MARKER; 32]);
    assert_eq!(mock.last_key_len(), 8);
}

#[test]
fn test_device_mock_behaviour_unavailable() {
    let mock = DeviceMock::new(DeviceMockBehaviour::Unavailable);
    let mut session = DeviceSession::default();

    let result = mock.hmac(request(HmacOp::Update(b"data"), &mut session));

    assert_eq!(result, Err(DeviceError::Unavailable));
    assert!(!session.is_open());
    assert_eq!(mock.update_count(), 1);
}

#[test]
fn test_device_mock_fail_update_at_second_call() {
    let mock = DeviceMock::new(DeviceMockBehaviour::FailUpdateAt(1));
    let mut session = DeviceSession::default();

    assert!(mock.hmac(request(HmacOp::Update(b"a"), &mut session)).is_ok());
    assert_eq!(
        mock.hmac(request(HmacOp::Update(b"b"), &mut session)),
        Err(DeviceError::Failed(-1))
    );
    assert!(mock.hmac(request(HmacOp::Update(b"c"), &mut session)).is_ok());
}

#[test]
fn test_device_mock_fail_final_closes_session() {
    let mock = DeviceMock::new(DeviceMockBehaviour::FailFinalAt(0));
    let mut session = DeviceSession::default();
    let mut out = [0u8; 20];

    assert!(mock.hmac(request(HmacOp::Update(b"a"), &mut session)).is_ok());
    assert_eq!(
        mock.hmac(request(HmacOp::Final(&mut out), &mut session)),
        Err(DeviceError::Failed(-2))
    );
    assert!(!session.is_open());
}

#[test]
fn test_device_session_handles_are_distinct() {
    let mock = DeviceMock::new(DeviceMockBehaviour::None);
    let mut first = DeviceSession::default();
    let mut second = DeviceSession::default();

    assert!(mock.hmac(request(HmacOp::Update(b"a"), &mut first)).is_ok());
    assert!(mock.hmac(request(HmacOp::Update(b"b"), &mut second)).is_ok());

    assert_ne!(first.handle(), second.handle());
}
