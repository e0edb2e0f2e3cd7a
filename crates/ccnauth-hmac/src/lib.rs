// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 signing with secure memory handling
//!
//! Implementation per RFC 2104 (HMAC) over FIPS 180-4 SHA-256, with the key
//! material conventions used to sign CCNx content objects:
//!
//! - [`KeyValue`]: the 64-byte block XORed with the pads,
//! - [`KeyId`]: the 32-byte public identifier of the shared secret,
//! - [`hmac_sha256`]: the inner/outer construction, truncatable to any
//!   length up to 32 bytes.
//!
//! All intermediate values are zeroized.
//!
//! ```
//! use ccnauth_hmac::{KeyMaterial, hmac_sha256, verify_hmac_sha256};
//!
//! let key = KeyMaterial::derive(b"shared secret");
//! let tag = hmac_sha256(key.value().as_ref(), b"message", 32);
//!
//! assert!(verify_hmac_sha256(key.value().as_ref(), b"message", tag.as_bytes()));
//! ```
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-256
//!   <https://datatracker.ietf.org/doc/html/rfc4231>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod hmac;
mod key;
mod sha256;

pub use consts::{BLOCK_LEN, HASH_LEN, KEY_ID_LEN, KEY_VALUE_LEN, TAG_LEN};
pub use hmac::{Tag, hmac_sha256, hmac_sha256_into, verify_hmac_sha256};
pub use key::{KeyId, KeyMaterial, KeyValue, derive_key_id, derive_key_value};
pub use sha256::{Sha256State, sha256};
