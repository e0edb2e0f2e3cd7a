// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key material derivation per RFC 2104 Section 2
//!
//! A shared secret of any length is turned into the two artifacts the
//! signer needs: the 64-byte key-value block that is XORed with the pads,
//! and the 32-byte key identifier published next to the tag.
//!
//! Oversized keys (> 64 bytes) are hashed once for the key value but twice
//! for the key identifier. Both derivations must stay as they are so that
//! identifiers keep matching those produced by existing peers.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN, KEY_ID_LEN, KEY_VALUE_LEN};
use crate::sha256::Sha256State;

/// The 64-byte block-sized key value.
///
/// Zeroized on drop. `Debug` never prints the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyValue([u8; KEY_VALUE_LEN]);

impl KeyValue {
    /// Derive the key value from a raw shared secret.
    ///
    /// Keys of up to 64 bytes are copied and zero padded; longer keys are
    /// replaced by their SHA-256 digest, zero padded.
    pub fn derive(key: &[u8]) -> Self {
        let mut block = [0u8; KEY_VALUE_LEN];

        if key.len() <= BLOCK_LEN {
            block[..key.len()].copy_from_slice(key);
        } else {
            let mut sha = Sha256State::new();
            let mut digest = [0u8; HASH_LEN];

            sha.update(key);
            sha.finalize(&mut digest);
            block[..HASH_LEN].copy_from_slice(&digest);
            digest.zeroize();
        }

        Self(block)
    }

    /// Wrap an already derived 64-byte key value.
    pub fn from_bytes(bytes: [u8; KEY_VALUE_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key value bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_VALUE_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for KeyValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for KeyValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("KeyValue([REDACTED])")
    }
}

/// The 32-byte public key identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId([u8; KEY_ID_LEN]);

impl KeyId {
    /// Derive the key identifier from a raw shared secret.
    ///
    /// `SHA256(key)` for keys of up to 64 bytes, `SHA256(SHA256(key))` for
    /// longer ones.
    pub fn derive(key: &[u8]) -> Self {
        let mut sha = Sha256State::new();
        let mut id = [0u8; KEY_ID_LEN];

        sha.update(key);

        if key.len() > BLOCK_LEN {
            let mut md = [0u8; HASH_LEN];
            sha.finalize(&mut md);
            sha.reset();
            sha.update(&md);
            md.zeroize();
        }

        sha.finalize(&mut id);

        Self(id)
    }

    /// Wrap identifier bytes read from the wire.
    pub fn from_bytes(bytes: [u8; KEY_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_ID_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for KeyId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for KeyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("KeyId(")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        f.write_str(")")
    }
}

/// Key value and key identifier derived from the same secret.
///
/// Derive once per key and reuse for any number of packets.
#[derive(Clone, Debug)]
pub struct KeyMaterial {
    value: KeyValue,
    id: KeyId,
}

impl KeyMaterial {
    /// Run both derivations over `key`.
    pub fn derive(key: &[u8]) -> Self {
        Self {
            value: KeyValue::derive(key),
            id: KeyId::derive(key),
        }
    }

    /// Assemble key material from separately derived parts.
    pub fn from_parts(value: KeyValue, id: KeyId) -> Self {
        Self { value, id }
    }

    /// The 64-byte key value.
    pub fn value(&self) -> &KeyValue {
        &self.value
    }

    /// The 32-byte key identifier.
    pub fn id(&self) -> &KeyId {
        &self.id
    }
}

/// Derive the 64-byte key value from a raw shared secret.
pub fn derive_key_value(key: &[u8]) -> KeyValue {
    KeyValue::derive(key)
}

/// Derive the 32-byte key identifier from a raw shared secret.
pub fn derive_key_id(key: &[u8]) -> KeyId {
    KeyId::derive(key)
}
