// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>HMAC-SHA256 authenticated CCNx content objects.</em></p>
//!
//! ---
//!
//! Ccnauth lets a producer and a consumer that share a secret sign and check
//! CCNx 1.0 content packets. Keys are normalized to a 64-byte HMAC key value
//! and a 32-byte key identifier, packets are assembled back to front into a
//! caller-owned buffer, and the tag is verified in constant time.
//!
//! # Features
//!
//! - **Allocation-free signing**: packets are written in place, tail first
//! - **Secret hygiene**: key values and hash state are zeroized on drop
//! - **`no_std` compatible**: only `alloc` is needed, for decoded names
//! - **Optional tracing**: enable `tracing-integration` for debug events
//!
//! # Quick Start
//!
//! ```rust
//! use ccnauth::hmac::KeyMaterial;
//! use ccnauth::packet::{Prefix, SignedContent, sign_content_packet};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Both ends derive the same material from the shared secret
//!     let key = KeyMaterial::derive(b"shared secret");
//!
//!     // Producer
//!     let name = Prefix::from_uri("ccnx:/campus/lab/temp").with_chunk(0);
//!     let mut buf = [0u8; 1024];
//!     let mut offset = buf.len();
//!     let written = sign_content_packet(&name, b"21.5", Some(0), &key, &mut offset, &mut buf)?.len;
//!     let packet = &buf[offset..offset + written];
//!
//!     // Consumer: pick the key by id, then check the tag
//!     let content = SignedContent::decode(packet)?;
//!     assert_eq!(content.key_id(), key.id());
//!     content.verify(key.value())?;
//!
//!     assert_eq!(content.payload(), b"21.5");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Key derivation
//!
//! ```rust
//! use ccnauth::hmac::{KeyId, KeyValue};
//!
//! let value = KeyValue::derive(b"Jefe");
//! assert_eq!(&value.as_bytes()[..4], b"Jefe");
//! assert!(value.as_bytes()[4..].iter().all(|&b| b == 0));
//!
//! // Keys longer than the block are hashed first
//! let id = KeyId::derive(&[0xaa; 131]);
//! assert_eq!(id.as_bytes().len(), 32);
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`hmac`] | `ccnauth-hmac` | SHA-256, HMAC-SHA256, key value and key id derivation |
//! | [`packet`] | `ccnauth-packet` | TLV writers and readers, signing, verification |
//! | [`util`] | `ccnauth-util` | Constant-time comparison and slice helpers |

#![cfg_attr(not(test), no_std)]

pub use ccnauth_hmac as hmac;
pub use ccnauth_packet as packet;
pub use ccnauth_util as util;
