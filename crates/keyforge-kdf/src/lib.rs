// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key derivation functions layered on the keyforge HMAC engine.
//!
//! - RFC 5869 HKDF: [`extract`], [`expand`], [`hkdf`], plus the TLS 1.3
//!   flavour of Extract, [`tls13_extract`]
//! - TLS PRFs: the single-hash `P_hash` ([`prf`]), the TLS 1.0/1.1
//!   dual-hash PRF ([`prf_tls_v1`]) and the version dispatch wrapper
//!   ([`prf_tls`])
//! - TLS 1.3 `HKDF-Expand-Label` ([`tls13_expand_label`])
//! - SSH transport key derivation, RFC 4253 §7.2 ([`ssh_kdf`])
//!
//! The HKDF family always runs in software. The TLS PRFs take an
//! [`HmacBinding`](keyforge_hmac::HmacBinding) so the caller's device or
//! offload backend sees every HMAC they compute. SSH-KDF is a plain iterated
//! hash and uses the hash capability directly.
//!
//! Output buffers are zeroized when a derivation fails part way.
//!
//! References:
//! - RFC 5869: <https://datatracker.ietf.org/doc/html/rfc5869>
//! - RFC 2246 §5, RFC 5246 §5: TLS PRF
//! - RFC 8446 §7.1: TLS 1.3 key schedule
//! - RFC 4253 §7.2: SSH key derivation

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod hkdf;
mod mac_algorithm;
mod prf;
mod ssh;
mod tls13;

pub use consts::{
    HKDF_MAX_BLOCKS, MAX_PRF_DIGEST, MAX_PRF_HALF, MAX_PRF_LABEL_SEED, MAX_TLS13_HKDF_LABEL_SIZE,
};
pub use error::KdfError;
pub use hkdf::{expand, extract, hkdf, tls13_extract};
pub use mac_algorithm::MacAlgorithm;
pub use prf::{prf, prf_tls, prf_tls_v1};
pub use ssh::ssh_kdf;
pub use tls13::tls13_expand_label;
