// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming HMAC (RFC 2104) over every [`HashType`] with pluggable
//! execution backends.
//!
//! An [`Hmac`] context walks Init → SetKey → Update* → Final → … → Free.
//! The inner pad is absorbed lazily on the first Update (or Final, for an
//! empty message) after keying, so a finalized context can be reused under
//! the same key without running SetKey again.
//!
//! Every Update and Final is first offered to the backends bound through
//! [`HmacBinding`]: a crypto-callback [`CryptoDevice`], then an
//! asynchronous [`OffloadDevice`]. A backend answering
//! [`DeviceError::Unavailable`] hands the operation to the next one; the
//! software path is the last link.
//!
//! # Example
//!
//! ```
//! use keyforge_hash::HashType;
//! use keyforge_hmac::{Hmac, HmacBinding};
//!
//! let mut hmac = Hmac::new(HmacBinding::software());
//! hmac.set_key(HashType::Sha256, b"key").expect("Failed to set_key(..)");
//! hmac.update(b"The quick brown fox ").expect("Failed to update(..)");
//! hmac.update(b"jumps over the lazy dog").expect("Failed to update(..)");
//!
//! let mut tag = [0u8; 32];
//! hmac.finalize(&mut tag).expect("Failed to finalize(..)");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod backend;
mod binding;
mod consts;
mod error;
mod hmac;
mod key_ref;
mod support;

pub use backend::{
    CryptoDevice, DeviceSession, HmacOp, HmacRequest, OffloadDevice, OffloadJob, OffloadStatus,
};
pub use binding::HmacBinding;
pub use consts::{HMAC_FIPS_MIN_KEY, HMAC_MAX_ID_LEN, HMAC_MAX_LABEL_LEN, IPAD, OPAD};
pub use error::{DeviceError, HmacError};
pub use hmac::{Hmac, hmac};
pub use key_ref::{KeyRef, KeyRefKind};

pub use keyforge_hash::HashType;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
