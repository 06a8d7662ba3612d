// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for HKDF (RFC 5869)

use keyforge_hash::{HashType, MAX_DIGEST_SIZE};
use keyforge_hmac::HmacError;
use keyforge_util::{hex_to_bytes, is_slice_zeroized};

use crate::consts::HKDF_MAX_BLOCKS;
use crate::error::KdfError;
use crate::hkdf::{expand, extract, hkdf, tls13_extract};

fn rfc5869_salt() -> Vec<u8> {
    (0x00..=0x0c).collect()
}

fn rfc5869_info() -> Vec<u8> {
    (0xf0..=0xf9).collect()
}

// =============================================================================
// RFC 5869 known answers
// =============================================================================

#[test]
fn test_rfc5869_case1_sha256() {
    let ikm = [0x0bu8; 22];
    let salt = rfc5869_salt();
    let info = rfc5869_info();

    let mut prk = [0u8; 32];
    extract(HashType::Sha256, Some(&salt[..]), &ikm, &mut prk).expect("Failed to extract(..)");
    assert_eq!(
        prk.to_vec(),
        hex_to_bytes("077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5")
    );

    let mut okm = [0u8; 42];
    expand(HashType::Sha256, &prk, &info, &mut okm).expect("Failed to expand(..)");
    let expected = hex_to_bytes(
        "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865",
    );
    assert_eq!(okm.to_vec(), expected);

    let mut combined = [0u8; 42];
    hkdf(HashType::Sha256, &ikm, Some(&salt[..]), &info, &mut combined).expect("Failed to hkdf(..)");
    assert_eq!(combined, okm);
}

#[test]
fn test_rfc5869_case3_no_salt_no_info() {
    let ikm = [0x0bu8; 22];

    let mut prk = [0u8; 32];
    extract(HashType::Sha256, None, &ikm, &mut prk).expect("Failed to extract(..)");
    assert_eq!(
        prk.to_vec(),
        hex_to_bytes("19ef24a32c717b167f33a91d6f648bdf96596776afdb6377ac434c1c293ccb04")
    );

    let mut okm = [0u8; 42];
    hkdf(HashType::Sha256, &ikm, None, &[], &mut okm).expect("Failed to hkdf(..)");
    assert_eq!(
        okm.to_vec(),
        hex_to_bytes(
            "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d9d201395faa4b61a96c8"
        )
    );
}

#[test]
fn test_rfc5869_case4_sha1() {
    let ikm = [0x0bu8; 11];
    let salt = rfc5869_salt();
    let info = rfc5869_info();

    let mut prk = [0u8; 20];
    extract(HashType::Sha1, Some(&salt[..]), &ikm, &mut prk).expect("Failed to extract(..)");
    assert_eq!(
        prk.to_vec(),
        hex_to_bytes("9b6c18c432a7bf8f0e71c8eb88f4b30baa2ba243")
    );

    let mut okm = [0u8; 42];
    expand(HashType::Sha1, &prk, &info, &mut okm).expect("Failed to expand(..)");
    assert_eq!(
        okm.to_vec(),
        hex_to_bytes(
            "085a01ea1b10f36933068b56efa5ad81a4f14b822f5b091568a9cdd4f155fda2c22e422478d305f3f896"
        )
    );
}

#[test]
fn test_empty_salt_equals_zero_salt() {
    let ikm = b"input key material";

    let mut with_none = [0u8; 48];
    let mut with_zeros = [0u8; 48];
    let mut with_empty = [0u8; 48];
    extract(HashType::Sha384, None, ikm, &mut with_none).expect("Failed to extract(..)");
    extract(HashType::Sha384, Some(&[0u8; 48][..]), ikm, &mut with_zeros)
        .expect("Failed to extract(..)");
    extract(HashType::Sha384, Some(&[0u8; 0][..]), ikm, &mut with_empty).expect("Failed to extract(..)");

    assert_eq!(with_none, with_zeros);
    assert_eq!(with_none, with_empty);
}

// =============================================================================
// Output length
// =============================================================================

#[test]
fn test_expand_prefix_stable() {
    let prk = [0x42u8; 32];

    let mut short = [0u8; 10];
    let mut long = [0u8; 100];
    expand(HashType::Sha256, &prk, b"ctx", &mut short).expect("Failed to expand(..)");
    expand(HashType::Sha256, &prk, b"ctx", &mut long).expect("Failed to expand(..)");

    assert_eq!(short, long[..10]);
}

#[test]
fn test_expand_empty_output_is_noop() {
    let mut okm = [0u8; 0];
    expand(HashType::Sha256, &[0x42; 32], b"info", &mut okm).expect("Failed to expand(..)");
}

#[test]
fn test_expand_max_output() {
    let digest_size = HashType::Sha1.digest_size();
    let mut okm = vec![0u8; HKDF_MAX_BLOCKS * digest_size];

    expand(HashType::Sha1, &[0x01; 20], b"max", &mut okm).expect("Failed to expand(..)");
    assert!(!is_slice_zeroized(&okm[okm.len() - digest_size..]));
}

#[test]
fn test_expand_rejects_256_blocks() {
    let digest_size = HashType::Sha256.digest_size();
    let mut okm = vec![0xffu8; HKDF_MAX_BLOCKS * digest_size + 1];

    let result = expand(HashType::Sha256, &[0x01; 32], b"", &mut okm);
    assert_eq!(result, Err(KdfError::OutputTooLong));
}

#[test]
fn test_extract_short_prk_buffer() {
    let mut prk = [0u8; 31];

    let result = extract(HashType::Sha256, None, b"ikm", &mut prk);
    assert_eq!(
        result,
        Err(KdfError::Hmac(HmacError::OutputTooSmall {
            needed: 32,
            actual: 31
        }))
    );
}

#[test]
fn test_every_algorithm_derives() {
    for hash_type in HashType::ALL {
        let mut okm = [0u8; 3 * MAX_DIGEST_SIZE];
        hkdf(hash_type, b"ikm", Some(&b"salt"[..]), b"info", &mut okm).expect("Failed to hkdf(..)");
        assert!(!is_slice_zeroized(&okm), "{hash_type}");
    }
}

// =============================================================================
// TLS 1.3 Extract
// =============================================================================

#[test]
fn test_tls13_extract_empty_ikm_is_zeros() {
    let salt = [0x5au8; 32];

    let mut from_empty = [0u8; 32];
    let mut from_zeros = [0u8; 32];
    tls13_extract(HashType::Sha256, &salt, &[], &mut from_empty)
        .expect("Failed to tls13_extract(..)");
    extract(HashType::Sha256, Some(&salt[..]), &[0u8; 32], &mut from_zeros)
        .expect("Failed to extract(..)");

    assert_eq!(from_empty, from_zeros);
}

#[test]
fn test_tls13_extract_early_secret() {
    let mut early = [0u8; 32];
    tls13_extract(HashType::Sha256, &[0u8; 32], &[], &mut early)
        .expect("Failed to tls13_extract(..)");

    assert_eq!(
        early.to_vec(),
        hex_to_bytes("33ad0a1c607ec03b09e6cd9893680ce210adf300aa1f2660e1b22e10f170f92a")
    );
}

#[test]
fn test_tls13_extract_rejects_other_hashes() {
    let mut prk = [0u8; MAX_DIGEST_SIZE];

    for hash_type in [
        HashType::Md5,
        HashType::Sha1,
        HashType::Sha224,
        HashType::Sha3_256,
    ] {
        let result = tls13_extract(hash_type, b"salt", b"ikm", &mut prk);
        assert_eq!(result, Err(KdfError::UnsupportedAlgorithm(hash_type)));
    }
}
