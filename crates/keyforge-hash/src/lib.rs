// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash algorithm registry and streaming hash capability.
//!
//! Every hash variant the keyforge crates can key or iterate over is named by
//! a [`HashType`]. Each tag carries two constants, its block size and its
//! digest size, which size the HMAC pads and scratch buffers.
//!
//! [`HashState`] holds exactly one running hash of any supported variant and
//! exposes the Init/Update/Final/Free capability the MAC engine and the KDFs
//! are written against.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod capability;
mod error;
mod hash_type;
mod state;

pub use capability::HashCapability;
pub use error::HashError;
pub use hash_type::{HashType, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE, max_digest_size, size_by_type};
pub use state::HashState;
