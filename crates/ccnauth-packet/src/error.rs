// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ccnauth-packet.

use thiserror::Error;

/// Packet signing error.
///
/// The buffer contents are unspecified after any error and must be
/// discarded. Retrying with a larger buffer is the only recovery.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignError {
    /// Not enough room before the cursor to prepend the next field
    #[error("insufficient buffer space before the write cursor")]
    InsufficientBuffer,

    /// Assembled length does not fit the 16-bit packet length field
    #[error("assembled length exceeds the representable packet length")]
    LengthOverflow,
}

/// Error decoding a signed content packet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ends inside a header or TLV
    #[error("packet truncated")]
    Truncated,

    /// Fixed header carries an unknown version
    #[error("unsupported packet version {0}")]
    UnsupportedVersion(u8),

    /// Fixed header announces something other than a content object
    #[error("unexpected packet type {0}")]
    UnexpectedPacketType(u8),

    /// Header length other than the fixed 8 bytes
    #[error("unsupported header length {0}")]
    UnsupportedHeaderLength(u8),

    /// Declared packet length differs from the input length
    #[error("packet length {declared} does not match input length {actual}")]
    LengthMismatch {
        /// Length from the fixed header
        declared: usize,
        /// Length of the input slice
        actual: usize,
    },

    /// A TLV of the wrong type where a specific one is required
    #[error("expected TLV type {expected:#06x}, found {found:#06x}")]
    UnexpectedTlv {
        /// Required type
        expected: u16,
        /// Type on the wire
        found: u16,
    },

    /// Validation algorithm other than HMAC-SHA256
    #[error("unsupported validation algorithm {0:#06x}")]
    UnsupportedAlgorithm(u16),

    /// Key identifier is not 32 bytes
    #[error("key identifier has length {0}, expected 32")]
    BadKeyIdLength(usize),

    /// Validation payload is not a 32-byte tag
    #[error("validation payload has length {0}, expected 32")]
    BadTagLength(usize),

    /// Chunk number is empty, wider than 32 bits or has leading zeros
    #[error("invalid variable-length integer")]
    InvalidVarUint,

    /// A TLV that may appear once shows up again
    #[error("duplicate TLV type {0:#06x}")]
    DuplicateTlv(u16),

    /// Content object without a name
    #[error("content object has no name")]
    MissingName,

    /// Bytes left after the validation payload
    #[error("trailing bytes after the validation payload")]
    TrailingBytes,
}

/// Error verifying a signed content packet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// The packet could not be decoded
    #[error("DecodeError: {0}")]
    Decode(#[from] DecodeError),

    /// The packet was signed with a different key
    #[error("key identifier does not match")]
    KeyIdMismatch,

    /// The recomputed tag differs from the embedded one
    #[error("authentication tag mismatch")]
    TagMismatch,
}
