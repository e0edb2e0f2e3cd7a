// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 signed CCNx content packets.
//!
//! A producer assembles a content object back to front into a buffer it
//! owns, embeds the key identifier of its shared secret and an HMAC-SHA256
//! tag over the object and validation algorithm. A consumer holding the same
//! secret decodes the packet, selects the key by identifier and verifies the
//! tag.
//!
//! # Example
//!
//! ```
//! use ccnauth_hmac::KeyMaterial;
//! use ccnauth_packet::{Prefix, sign_content_packet, verify_content_packet};
//!
//! let key = KeyMaterial::derive(b"shared secret");
//! let name = Prefix::from_uri("/building/3/temp");
//!
//! let mut buf = [0u8; 512];
//! let mut offset = buf.len();
//! let written = sign_content_packet(&name, b"21.5", None, &key, &mut offset, &mut buf)
//!     .expect("Failed to sign_content_packet(..)")
//!     .len;
//!
//! let packet = &buf[offset..offset + written];
//! let content = verify_content_packet(packet, &key).expect("Failed to verify_content_packet(..)");
//!
//! assert_eq!(content.name(), &name);
//! assert_eq!(content.payload(), b"21.5");
//! ```
//!
//! # Features
//!
//! - `tracing-integration`: debug-level `tracing` events for packet
//!   assembly and verification failures.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod content;
mod error;
mod header;
mod prefix;
mod sign;
mod tlv;
mod verify;

pub use consts::*;
pub use content::{content_len, prepend_content, prepend_name};
pub use error::{DecodeError, SignError, VerifyError};
pub use header::{FixedHeader, prepend_fixed_header};
pub use prefix::Prefix;
pub use sign::{SignedPacket, sign_content_packet, signed_content_len};
pub use tlv::{
    Tlv, TlvReader, decode_var_uint, prepend_blob, prepend_bytes, prepend_tl, prepend_var_uint,
    var_uint_len,
};
pub use verify::{SignedContent, verify_content_packet};
