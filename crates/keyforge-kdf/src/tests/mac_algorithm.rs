// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyforge_hash::HashType;

use crate::mac_algorithm::MacAlgorithm;

#[test]
fn test_prf_hash_type_mapping() {
    assert_eq!(MacAlgorithm::Md5.prf_hash_type(), HashType::Md5);
    assert_eq!(MacAlgorithm::Sha256.prf_hash_type(), HashType::Sha256);
    assert_eq!(MacAlgorithm::Sha384.prf_hash_type(), HashType::Sha384);
    assert_eq!(MacAlgorithm::Sha512.prf_hash_type(), HashType::Sha512);

    // Everything else falls back to SHA-1
    assert_eq!(MacAlgorithm::None.prf_hash_type(), HashType::Sha1);
    assert_eq!(MacAlgorithm::Sha1.prf_hash_type(), HashType::Sha1);
    assert_eq!(MacAlgorithm::Sha224.prf_hash_type(), HashType::Sha1);
    assert_eq!(MacAlgorithm::Blake2b.prf_hash_type(), HashType::Sha1);
}

#[test]
fn test_at_least_sha256_upgrades_weak_macs() {
    for mac in [
        MacAlgorithm::None,
        MacAlgorithm::Md5,
        MacAlgorithm::Sha1,
        MacAlgorithm::Sha224,
        MacAlgorithm::Blake2b,
    ] {
        assert_eq!(mac.at_least_sha256(), MacAlgorithm::Sha256, "{mac:?}");
    }
}

#[test]
fn test_at_least_sha256_keeps_strong_macs() {
    for mac in [
        MacAlgorithm::Sha256,
        MacAlgorithm::Sha384,
        MacAlgorithm::Sha512,
    ] {
        assert_eq!(mac.at_least_sha256(), mac);
    }
}
