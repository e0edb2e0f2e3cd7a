// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CCNx 1.0 wire constants

use ccnauth_hmac::{KEY_ID_LEN, TAG_LEN};

/// Fixed header version
pub const CCNX_TLV_V1: u8 = 1;

/// Packet type: Interest
pub const PT_INTEREST: u8 = 0;

/// Packet type: Content object (Data)
pub const PT_DATA: u8 = 1;

/// Fixed header size; optional hop-by-hop headers are not produced
pub const FIXED_HEADER_LEN: usize = 8;

/// Type (2 bytes) plus length (2 bytes), both big-endian
pub const TL_LEN: usize = 4;

/// Hop limit written on content objects
pub const MAX_HOP_LIMIT: u8 = 255;

/// Everything after the fixed header must stay below this many bytes
pub const MAX_BODY_LEN: usize = (1 << 16) - FIXED_HEADER_LEN;

// Top-level TLVs
/// Content object message
pub const TLV_TL_OBJECT: u16 = 0x0002;
/// Validation algorithm section
pub const TLV_TL_VALIDATION_ALGO: u16 = 0x0003;
/// Validation payload (the tag)
pub const TLV_TL_VALIDATION_PAYLOAD: u16 = 0x0004;

// Message TLVs
/// Name
pub const TLV_M_NAME: u16 = 0x0000;
/// Payload
pub const TLV_M_PAYLOAD: u16 = 0x0001;
/// Last chunk number of a chunked object
pub const TLV_M_END_CHUNK: u16 = 0x0019;

// Name segment TLVs
/// Generic name segment
pub const TLV_N_NAME_SEGMENT: u16 = 0x0001;
/// Chunk number segment
pub const TLV_N_CHUNK: u16 = 0x0010;

// Validation algorithm TLVs
/// HMAC-SHA256 validation algorithm
pub const VALIDALGO_HMAC_SHA256: u16 = 0x0004;
/// Key identifier inside the validation algorithm
pub const VALIDALGO_KEYID: u16 = 0x0009;

/// `ValidationAlgo{HMAC_SHA256{KeyId}}`, all headers included
pub const VALIDATION_ALGO_LEN: usize = 3 * TL_LEN + KEY_ID_LEN;

/// `ValidationPayload` header plus the tag
pub const VALIDATION_PAYLOAD_LEN: usize = TL_LEN + TAG_LEN;

/// Whole validation section appended after the content object
pub const VALIDATION_LEN: usize = VALIDATION_ALGO_LEN + VALIDATION_PAYLOAD_LEN;
