// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC context per RFC 2104.

use core::fmt;

use keyforge_hash::{HashState, HashType, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE};
use keyforge_util::constant_time_eq;
use zeroize::Zeroize;

use crate::backend::{Dispatch, Dispatcher, HmacOp, PendingOp};
use crate::binding::HmacBinding;
use crate::consts::{IPAD, OPAD};
use crate::error::HmacError;
use crate::key_ref::KeyRef;

/// Streaming HMAC context.
///
/// Pads and the inner digest scratch are fixed-size buffers sized for the
/// largest supported algorithm; only the first `block_size` (resp.
/// `digest_size`) bytes are live. All of them are zeroized on Free and on
/// drop.
pub struct Hmac {
    mac_type: Option<HashType>,
    /// K ⊕ ipad
    ipad: [u8; MAX_BLOCK_SIZE],
    /// K ⊕ opad
    opad: [u8; MAX_BLOCK_SIZE],
    /// H(K ⊕ ipad || message)
    inner_hash: [u8; MAX_DIGEST_SIZE],
    hash: Option<HashState>,
    /// ipad already absorbed into `hash` for the current message
    inner_keyed: bool,
    dispatcher: Dispatcher,
}

impl Hmac {
    /// Fresh, unkeyed context (Init).
    pub fn new(binding: HmacBinding) -> Self {
        Self::with_key_ref(binding, None)
    }

    /// Context whose device key is named by an opaque identifier.
    ///
    /// # Errors
    ///
    /// [`HmacError::BufferTooSmall`] if `id` is longer than
    /// [`HMAC_MAX_ID_LEN`](crate::HMAC_MAX_ID_LEN).
    pub fn with_key_id(id: &[u8], binding: HmacBinding) -> Result<Self, HmacError> {
        Ok(Self::with_key_ref(binding, Some(KeyRef::id(id)?)))
    }

    /// Context whose device key is named by a label.
    ///
    /// # Errors
    ///
    /// [`HmacError::BufferTooSmall`] if `label` is empty or longer than
    /// [`HMAC_MAX_LABEL_LEN`](crate::HMAC_MAX_LABEL_LEN).
    pub fn with_key_label(label: &str, binding: HmacBinding) -> Result<Self, HmacError> {
        Ok(Self::with_key_ref(binding, Some(KeyRef::label(label)?)))
    }

    fn with_key_ref(binding: HmacBinding, key_ref: Option<KeyRef>) -> Self {
        Self {
            mac_type: None,
            ipad: [0u8; MAX_BLOCK_SIZE],
            opad: [0u8; MAX_BLOCK_SIZE],
            inner_hash: [0u8; MAX_DIGEST_SIZE],
            hash: None,
            inner_keyed: false,
            dispatcher: Dispatcher::new(binding, key_ref),
        }
    }

    /// Algorithm bound by the last SetKey.
    #[inline]
    pub fn hash_type(&self) -> Option<HashType> {
        self.mac_type
    }

    /// MAC length of the bound algorithm.
    #[inline]
    pub fn digest_size(&self) -> Option<usize> {
        self.mac_type.map(HashType::digest_size)
    }

    /// Bind `hash_type` and `key` (SetKey).
    ///
    /// A context that was already keyed is freed first. Keys longer than the
    /// block size are hashed down; shorter ones are zero-padded. An empty key
    /// is valid.
    ///
    /// # Errors
    ///
    /// - [`HmacError::KeyTooShort`] with the `fips` feature, for keys under
    ///   [`HMAC_FIPS_MIN_KEY`](crate::HMAC_FIPS_MIN_KEY) bytes.
    /// - [`HmacError::AllocationFailure`] if the device key copy cannot be
    ///   allocated.
    pub fn set_key(&mut self, hash_type: HashType, key: &[u8]) -> Result<(), HmacError> {
        if self.mac_type.is_some() {
            self.free();
        }

        self.inner_keyed = false;

        #[cfg(feature = "fips")]
        if key.len() < crate::consts::HMAC_FIPS_MIN_KEY {
            return Err(HmacError::KeyTooShort);
        }

        let mut hash = HashState::new(hash_type);

        self.dispatcher.bind_device_key(key)?;

        let block_size = hash_type.block_size();
        let key_len = if key.len() > block_size {
            tracing::debug!(%hash_type, key_len = key.len(), "hashing down long key");
            hash.update(key)?;
            hash.finalize_reset(&mut self.ipad)?;
            hash_type.digest_size()
        } else {
            self.ipad[..key.len()].copy_from_slice(key);
            key.len()
        };

        self.dispatcher.bind_offload_key(hash_type, &self.ipad[..key_len]);

        self.ipad[key_len..block_size].fill(0);
        for i in 0..block_size {
            self.opad[i] = self.ipad[i] ^ OPAD;
            self.ipad[i] ^= IPAD;
        }

        self.mac_type = Some(hash_type);
        self.hash = Some(hash);
        Ok(())
    }

    /// SetKey with a numeric hash id.
    ///
    /// # Errors
    ///
    /// [`HmacError::UnsupportedAlgorithm`] if `id` names no supported
    /// algorithm, otherwise as [`Hmac::set_key`].
    pub fn set_key_by_id(&mut self, id: u8, key: &[u8]) -> Result<(), HmacError> {
        let hash_type = HashType::try_from(id).map_err(|_| HmacError::UnsupportedAlgorithm(id))?;
        self.set_key(hash_type, key)
    }

    /// Absorb message bytes (Update). May be called any number of times.
    ///
    /// # Errors
    ///
    /// - [`HmacError::NotKeyed`] before SetKey.
    /// - [`HmacError::Pending`] if an offload job is in flight, or the
    ///   offload engine queued this one.
    /// - [`HmacError::Device`] if a backend failed.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HmacError> {
        let hash_type = self.mac_type.ok_or(HmacError::NotKeyed)?;

        if self.dispatcher.dispatch(hash_type, HmacOp::Update(data))? == Dispatch::Handled {
            return Ok(());
        }

        self.key_inner_hash(hash_type)?;
        self.hash_mut()?.update(data)?;

        Ok(())
    }

    /// Write the MAC into the first `digest_size` bytes of `out` (Final).
    ///
    /// The context stays keyed; the next Update starts a new message under
    /// the same key.
    ///
    /// # Errors
    ///
    /// - [`HmacError::NotKeyed`] before SetKey.
    /// - [`HmacError::OutputTooSmall`] if `out` is shorter than the MAC.
    /// - [`HmacError::Pending`] / [`HmacError::Device`] as for
    ///   [`Hmac::update`].
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<(), HmacError> {
        let hash_type = self.mac_type.ok_or(HmacError::NotKeyed)?;
        let digest_size = hash_type.digest_size();

        if out.len() < digest_size {
            return Err(HmacError::OutputTooSmall {
                needed: digest_size,
                actual: out.len(),
            });
        }

        let out = &mut out[..digest_size];

        if self.dispatcher.dispatch(hash_type, HmacOp::Final(&mut *out))? == Dispatch::Handled {
            return Ok(());
        }

        // Empty message: nothing has absorbed ipad yet.
        self.key_inner_hash(hash_type)?;

        let result = self.finalize_outer(hash_type, out);
        self.inner_hash.zeroize();
        self.inner_keyed = false;

        result
    }

    fn finalize_outer(&mut self, hash_type: HashType, out: &mut [u8]) -> Result<(), HmacError> {
        let block_size = hash_type.block_size();
        let digest_size = hash_type.digest_size();
        let hash = self.hash.as_mut().ok_or(HmacError::NotKeyed)?;

        hash.finalize_reset(&mut self.inner_hash)?;
        hash.update(&self.opad[..block_size])?;
        hash.update(&self.inner_hash[..digest_size])?;
        hash.finalize_reset(out)?;

        Ok(())
    }

    /// Finalize and compare against `expected` in constant time.
    ///
    /// # Errors
    ///
    /// [`HmacError::TagMismatch`] if the MAC differs (including a length
    /// mismatch), otherwise as [`Hmac::finalize`].
    pub fn verify(&mut self, expected: &[u8]) -> Result<(), HmacError> {
        let digest_size = self.digest_size().ok_or(HmacError::NotKeyed)?;
        let mut tag = [0u8; MAX_DIGEST_SIZE];

        let result = self
            .finalize(&mut tag)
            .map(|()| constant_time_eq(&tag[..digest_size], expected));
        tag.zeroize();

        if result? {
            Ok(())
        } else {
            Err(HmacError::TagMismatch)
        }
    }

    /// Drive an outstanding offload job.
    ///
    /// Returns `Ok(true)` once nothing is in flight. When the job is a Final,
    /// the MAC is written to the first `digest_size` bytes of `out` on
    /// completion; for an Update, `out` may be empty.
    ///
    /// # Errors
    ///
    /// - [`HmacError::OutputTooSmall`] if a Final is pending and `out`
    ///   cannot hold the MAC.
    /// - [`HmacError::Device`] if the offload engine failed the job.
    pub fn poll(&mut self, out: &mut [u8]) -> Result<bool, HmacError> {
        if self.dispatcher.pending() == Some(PendingOp::Final) {
            let digest_size = self.digest_size().ok_or(HmacError::NotKeyed)?;
            if out.len() < digest_size {
                return Err(HmacError::OutputTooSmall {
                    needed: digest_size,
                    actual: out.len(),
                });
            }

            return self.dispatcher.poll(&mut out[..digest_size]);
        }

        self.dispatcher.poll(out)
    }

    /// Release the context (Free).
    ///
    /// Closes a device session left open, drops the hash state and zeroizes
    /// all key material. Idempotent; also run on drop. The backends and key
    /// reference stay bound, so the context can be keyed again.
    pub fn free(&mut self) {
        if let Some(hash_type) = self.mac_type.take() {
            self.dispatcher.close_session(hash_type);
        }

        self.hash = None;
        self.inner_keyed = false;
        self.ipad.zeroize();
        self.opad.zeroize();
        self.inner_hash.zeroize();
        self.dispatcher.clear_key();
    }

    fn key_inner_hash(&mut self, hash_type: HashType) -> Result<(), HmacError> {
        if self.inner_keyed {
            return Ok(());
        }

        let hash = self.hash.as_mut().ok_or(HmacError::NotKeyed)?;
        hash.update(&self.ipad[..hash_type.block_size()])?;
        self.inner_keyed = true;

        Ok(())
    }

    #[inline]
    fn hash_mut(&mut self) -> Result<&mut HashState, HmacError> {
        self.hash.as_mut().ok_or(HmacError::NotKeyed)
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        use keyforge_util::is_slice_zeroized;

        self.mac_type.is_none()
            && self.hash.is_none()
            && !self.inner_keyed
            && is_slice_zeroized(&self.ipad)
            && is_slice_zeroized(&self.opad)
            && is_slice_zeroized(&self.inner_hash)
            && self.dispatcher.is_key_cleared()
    }

    #[cfg(test)]
    pub(crate) fn is_inner_keyed(&self) -> bool {
        self.inner_keyed
    }
}

impl Drop for Hmac {
    fn drop(&mut self) {
        self.free();
    }
}

impl fmt::Debug for Hmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("mac_type", &self.mac_type)
            .field("inner_keyed", &self.inner_keyed)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

/// One-shot software HMAC of `data` under `key` into `out`.
///
/// # Errors
///
/// As [`Hmac::set_key`] and [`Hmac::finalize`].
pub fn hmac(hash_type: HashType, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), HmacError> {
    let mut hmac = Hmac::new(HmacBinding::software());
    hmac.set_key(hash_type, key)?;
    hmac.update(data)?;
    hmac.finalize(out)
}
