// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Content object serialization.
//!
//! `Object{ Name{ Segment* Chunk? } ENDChunk? Payload }`, written back to
//! front like every other writer in this crate.

use crate::consts::{
    TL_LEN, TLV_M_END_CHUNK, TLV_M_NAME, TLV_M_PAYLOAD, TLV_N_CHUNK, TLV_N_NAME_SEGMENT,
    TLV_TL_OBJECT,
};
use crate::error::SignError;
use crate::prefix::Prefix;
use crate::tlv::{prepend_blob, prepend_tl, prepend_var_uint, var_uint_len};

/// Prepend the name TLV.
pub fn prepend_name(name: &Prefix, offset: &mut usize, buf: &mut [u8]) -> Result<usize, SignError> {
    let end = *offset;

    if let Some(chunk) = name.chunk() {
        prepend_var_uint(TLV_N_CHUNK, u64::from(chunk), offset, buf)?;
    }
    for component in name.components().iter().rev() {
        prepend_blob(TLV_N_NAME_SEGMENT, component, offset, buf)?;
    }
    prepend_tl(TLV_M_NAME, end - *offset, offset, buf)?;

    Ok(end - *offset)
}

/// Prepend a complete content object TLV.
///
/// `last_chunk` adds the end-chunk metadata of a chunked object. On success
/// `payload_offset` holds the index of the first payload byte in `buf`.
pub fn prepend_content(
    name: &Prefix,
    payload: &[u8],
    last_chunk: Option<u32>,
    payload_offset: &mut usize,
    offset: &mut usize,
    buf: &mut [u8],
) -> Result<usize, SignError> {
    let end = *offset;

    prepend_blob(TLV_M_PAYLOAD, payload, offset, buf)?;
    *payload_offset = *offset + TL_LEN;
    if let Some(last) = last_chunk {
        prepend_var_uint(TLV_M_END_CHUNK, u64::from(last), offset, buf)?;
    }
    prepend_name(name, offset, buf)?;
    prepend_tl(TLV_TL_OBJECT, end - *offset, offset, buf)?;

    Ok(end - *offset)
}

/// Exact size [`prepend_content`] writes for these inputs.
pub fn content_len(name: &Prefix, payload_len: usize, last_chunk: Option<u32>) -> usize {
    let end_chunk = last_chunk.map_or(0, |last| TL_LEN + var_uint_len(u64::from(last)));

    TL_LEN + name.encoded_len() + end_chunk + TL_LEN + payload_len
}
