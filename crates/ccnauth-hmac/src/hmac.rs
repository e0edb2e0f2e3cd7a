// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 implementation per RFC 2104

use zeroize::{Zeroize, ZeroizeOnDrop};

use ccnauth_util::constant_time_eq;

use crate::consts::{BLOCK_LEN, HASH_LEN, IPAD, OPAD, TAG_LEN};
use crate::sha256::Sha256State;

/// HMAC-SHA256 state with all intermediate buffers.
///
/// Works on an already derived key value (see [`KeyValue`](crate::KeyValue)).
/// Oversized raw keys are not hashed here.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct HmacSha256State {
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// SHA256 state shared by the inner and outer pass
    sha: Sha256State,
    /// Inner hash result: SHA256(K ⊕ ipad || message)
    inner_hash: [u8; HASH_LEN],
}

impl HmacSha256State {
    /// Create new HMAC-SHA256 state
    pub fn new() -> Self {
        Self {
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            sha: Sha256State::new(),
            inner_hash: [0u8; HASH_LEN],
        }
    }

    /// Build both padded key blocks.
    ///
    /// Bytes past the end of `key_value` act as zeros; anything beyond one
    /// block is ignored.
    fn key_setup(&mut self, key_value: &[u8]) {
        let kv_len = core::cmp::min(key_value.len(), BLOCK_LEN);

        self.k_ipad.fill(IPAD);
        self.k_opad.fill(OPAD);
        for (i, kv) in key_value[..kv_len].iter().enumerate() {
            self.k_ipad[i] ^= kv;
            self.k_opad[i] ^= kv;
        }
    }

    /// Full 32-byte HMAC-SHA256 of `data` under `key_value`
    pub fn sign(&mut self, key_value: &[u8], data: &[u8], out: &mut [u8; HASH_LEN]) {
        self.key_setup(key_value);

        // Inner hash: SHA256(k_ipad || data)
        self.sha.reset();
        self.sha.update(&self.k_ipad);
        self.sha.update(data);
        self.sha.finalize(&mut self.inner_hash);

        // Outer hash: SHA256(k_opad || inner_hash) -> out
        self.sha.reset();
        self.sha.update(&self.k_opad);
        self.sha.update(&self.inner_hash);
        self.sha.finalize(out);

        self.zeroize();
    }
}

/// An HMAC-SHA256 authentication tag, possibly truncated.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    bytes: [u8; TAG_LEN],
    len: usize,
}

impl Tag {
    /// Tag bytes (the leading `len()` bytes of the full digest).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Tag length in bytes, at most 32.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length request.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Tag(")?;
        for b in self.as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        f.write_str(")")
    }
}

/// HMAC-SHA256 per RFC 2104 over a derived key value.
///
/// Returns the leading `min(max_out_len, 32)` bytes of the MAC. Shorter
/// requests are prefixes of longer ones.
///
/// # Example
///
/// ```
/// use ccnauth_hmac::{hmac_sha256, KeyValue};
///
/// let kv = KeyValue::derive(b"Jefe");
/// let tag = hmac_sha256(kv.as_ref(), b"what do ya want for nothing?", 32);
/// assert_eq!(tag.as_bytes()[..4], [0x5b, 0xdc, 0xc1, 0x46]);
/// ```
pub fn hmac_sha256(key_value: &[u8], data: &[u8], max_out_len: usize) -> Tag {
    let mut state = HmacSha256State::new();
    let mut full = [0u8; HASH_LEN];

    state.sign(key_value, data, &mut full);

    let len = core::cmp::min(max_out_len, TAG_LEN);
    let mut bytes = [0u8; TAG_LEN];
    bytes[..len].copy_from_slice(&full[..len]);
    full.zeroize();

    Tag { bytes, len }
}

/// HMAC-SHA256 into a caller buffer.
///
/// Writes `min(out.len(), 32)` bytes to the front of `out` and returns that
/// count.
pub fn hmac_sha256_into(key_value: &[u8], data: &[u8], out: &mut [u8]) -> usize {
    let tag = hmac_sha256(key_value, data, out.len());
    out[..tag.len()].copy_from_slice(tag.as_bytes());
    tag.len()
}

/// Recompute the MAC and compare it with `tag` in constant time.
///
/// Truncated tags are accepted; an empty tag or one longer than 32 bytes is
/// rejected.
pub fn verify_hmac_sha256(key_value: &[u8], data: &[u8], tag: &[u8]) -> bool {
    if tag.is_empty() || tag.len() > TAG_LEN {
        return false;
    }

    let expected = hmac_sha256(key_value, data, tag.len());
    constant_time_eq(expected.as_bytes(), tag)
}
