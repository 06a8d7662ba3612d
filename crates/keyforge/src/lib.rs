// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Streaming HMAC and the TLS/SSH key derivations built on it.</em></p>
//!
//! ---
//!
//! Keyforge is an algorithm-polymorphic HMAC engine (MD5, SHA-1, SHA-2 and
//! SHA-3) plus the key derivation functions TLS and SSH stacks need on top of
//! it. Every context can be routed to an external crypto device or an
//! asynchronous offload engine, with software as the final fallback.
//!
//! # Features
//!
//! - **One engine, every hash**: a single [`hmac::Hmac`] context covers all
//!   supported algorithms and can be re-keyed or reused after `finalize`
//! - **Pluggable backends**: [`hmac::CryptoDevice`] and
//!   [`hmac::OffloadDevice`] are tried in order before software
//! - **Key derivation**: HKDF, the TLS 1.0/1.1 and 1.2 PRFs, TLS 1.3
//!   `HKDF-Expand-Label` and SSH-KDF
//! - **Zeroized on every path**: pads, intermediate digests and scratch
//!   buffers are wiped on success, error and drop
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use keyforge::hmac::{HashType, Hmac, HmacBinding};
//!
//! let mut ctx = Hmac::new(HmacBinding::software());
//! ctx.set_key(HashType::Sha256, b"key")?;
//! ctx.update(b"The quick brown fox ")?;
//! ctx.update(b"jumps over the lazy dog")?;
//!
//! let mut tag = [0u8; 32];
//! ctx.finalize(&mut tag)?;
//!
//! // Same key, next message
//! ctx.update(b"another message")?;
//! ctx.finalize(&mut tag)?;
//! # Ok::<(), keyforge::hmac::HmacError>(())
//! ```
//!
//! # Key derivation
//!
//! ```rust
//! use keyforge::hash::HashType;
//! use keyforge::kdf::{hkdf, ssh_kdf};
//!
//! let mut okm = [0u8; 42];
//! hkdf(HashType::Sha256, b"input key material", Some(&b"salt"[..]), b"info", &mut okm)?;
//!
//! let mut iv = [0u8; 16];
//! ssh_kdf(HashType::Sha256, b'A', &mut iv, b"\x01shared", b"exchange hash", b"session")?;
//! # Ok::<(), keyforge::kdf::KdfError>(())
//! ```
//!
//! # Crates
//!
//! - [`hash`]: algorithm tags, size registry and the streaming hash state
//! - [`hmac`]: the HMAC engine and backend traits
//! - [`kdf`]: HKDF, TLS PRFs, TLS 1.3 labels and SSH-KDF
//! - [`util`]: constant-time comparison and byte helpers
//!
//! # Feature flags
//!
//! - `fips`: reject HMAC keys shorter than 14 bytes
//! - `test-utils`: mock device and offload backends under [`support`]

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use keyforge_hash as hash;
pub use keyforge_hmac as hmac;
pub use keyforge_kdf as kdf;
pub use keyforge_util as util;
