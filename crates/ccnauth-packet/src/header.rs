// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{CCNX_TLV_V1, FIXED_HEADER_LEN};
use crate::error::{DecodeError, SignError};
use crate::tlv::prepend_bytes;

/// CCNx 1.0 fixed header.
///
/// Wire layout: `version | packet_type | packet_len (be16) | hop_limit |
/// reserved (2) | header_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeader {
    /// Format version, always [`CCNX_TLV_V1`]
    pub version: u8,
    /// Packet type, e.g. [`PT_DATA`](crate::PT_DATA)
    pub packet_type: u8,
    /// Total packet length including this header
    pub packet_len: u16,
    /// Remaining hop count
    pub hop_limit: u8,
    /// Header length, [`FIXED_HEADER_LEN`] without optional headers
    pub header_len: u8,
}

impl FixedHeader {
    /// Encode to the 8 wire bytes.
    pub fn to_bytes(&self) -> [u8; FIXED_HEADER_LEN] {
        let len = self.packet_len.to_be_bytes();
        [
            self.version,
            self.packet_type,
            len[0],
            len[1],
            self.hop_limit,
            0,
            0,
            self.header_len,
        ]
    }

    /// Decode and sanity check the header at the front of `packet`.
    pub fn decode(packet: &[u8]) -> Result<Self, DecodeError> {
        let bytes = packet
            .get(..FIXED_HEADER_LEN)
            .ok_or(DecodeError::Truncated)?;

        let header = Self {
            version: bytes[0],
            packet_type: bytes[1],
            packet_len: u16::from_be_bytes([bytes[2], bytes[3]]),
            hop_limit: bytes[4],
            header_len: bytes[7],
        };

        if header.version != CCNX_TLV_V1 {
            return Err(DecodeError::UnsupportedVersion(header.version));
        }
        if usize::from(header.header_len) != FIXED_HEADER_LEN {
            return Err(DecodeError::UnsupportedHeaderLength(header.header_len));
        }

        Ok(header)
    }
}

/// Prepend a fixed header for a packet whose body is `payload_len` bytes.
///
/// Returns the bytes written ([`FIXED_HEADER_LEN`]).
pub fn prepend_fixed_header(
    version: u8,
    packet_type: u8,
    payload_len: usize,
    hop_limit: u8,
    offset: &mut usize,
    buf: &mut [u8],
) -> Result<usize, SignError> {
    let packet_len =
        u16::try_from(FIXED_HEADER_LEN + payload_len).map_err(|_| SignError::LengthOverflow)?;

    let header = FixedHeader {
        version,
        packet_type,
        packet_len,
        hop_limit,
        header_len: FIXED_HEADER_LEN as u8,
    };

    prepend_bytes(&header.to_bytes(), offset, buf)
}
