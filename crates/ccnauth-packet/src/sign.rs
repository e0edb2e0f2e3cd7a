// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 signed content packets.
//!
//! Layout, front to back:
//!
//! ```text
//! [FixedHeader][Object][ValidationAlgo{HMAC_SHA256{KeyId}}][ValidationPayload TL][Tag]
//!              |<------------------- covered by Tag ------------------------->|
//! ```
//!
//! The packet is built tail first: the tag slot is reserved, the validation
//! section and the content object are prepended, the tag is computed over
//! everything between the object start and the slot, and the fixed header
//! goes in last.

use ccnauth_hmac::{KEY_ID_LEN, KeyMaterial, TAG_LEN, hmac_sha256_into};
use ccnauth_util::try_split_at_mut;

use crate::consts::{
    CCNX_TLV_V1, FIXED_HEADER_LEN, MAX_BODY_LEN, MAX_HOP_LIMIT, PT_DATA, TL_LEN,
    TLV_TL_VALIDATION_ALGO, TLV_TL_VALIDATION_PAYLOAD, VALIDALGO_HMAC_SHA256, VALIDALGO_KEYID,
    VALIDATION_LEN,
};
use crate::content::{content_len, prepend_content};
use crate::error::SignError;
use crate::header::prepend_fixed_header;
use crate::prefix::Prefix;
use crate::tlv::{prepend_bytes, prepend_tl};

/// Where [`sign_content_packet`] put the packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedPacket {
    /// Bytes written, fixed header included
    pub len: usize,
    /// Index into the caller's buffer of the first payload byte
    pub payload_offset: usize,
}

/// Assemble and sign a content packet in front of `buf[*offset..]`.
///
/// On success `*offset` points at the first header byte and the returned
/// [`SignedPacket`] holds the packet length and the payload position, so
/// the payload can be located without decoding. On error the buffer must
/// be discarded.
///
/// # Errors
///
/// - [`SignError::InsufficientBuffer`] if the packet does not fit between the
///   buffer start and `*offset`.
/// - [`SignError::LengthOverflow`] if the packet length does not fit the
///   16-bit length field.
///
/// # Example
///
/// ```
/// use ccnauth_hmac::KeyMaterial;
/// use ccnauth_packet::{Prefix, sign_content_packet, signed_content_len};
///
/// let key = KeyMaterial::derive(b"shared secret");
/// let name = Prefix::from_uri("/sensor/temp");
/// let mut buf = [0u8; 256];
/// let mut offset = buf.len();
///
/// let signed = sign_content_packet(&name, b"21.5", None, &key, &mut offset, &mut buf)?;
///
/// assert_eq!(signed.len, signed_content_len(&name, 4, None));
/// assert_eq!(offset, buf.len() - signed.len);
/// assert_eq!(&buf[signed.payload_offset..signed.payload_offset + 4], b"21.5");
/// # Ok::<(), ccnauth_packet::SignError>(())
/// ```
pub fn sign_content_packet(
    name: &Prefix,
    payload: &[u8],
    last_chunk: Option<u32>,
    key: &KeyMaterial,
    offset: &mut usize,
    buf: &mut [u8],
) -> Result<SignedPacket, SignError> {
    let result = assemble(name, payload, last_chunk, key, offset, buf);

    #[cfg(feature = "tracing-integration")]
    match &result {
        Ok(signed) => tracing::debug!(
            written = signed.len,
            payload_len = payload.len(),
            "signed content packet assembled"
        ),
        Err(err) => tracing::debug!(
            error = %err,
            payload_len = payload.len(),
            "signed content packet rejected"
        ),
    }

    result
}

fn assemble(
    name: &Prefix,
    payload: &[u8],
    last_chunk: Option<u32>,
    key: &KeyMaterial,
    offset: &mut usize,
    buf: &mut [u8],
) -> Result<SignedPacket, SignError> {
    if *offset < FIXED_HEADER_LEN + payload.len() + VALIDATION_LEN {
        return Err(SignError::InsufficientBuffer);
    }

    let old_offset = *offset;

    // Tag slot, filled once the covered bytes are in place
    prepend_bytes(&[0u8; TAG_LEN], offset, buf)?;
    let tag_offset = *offset;

    prepend_tl(TLV_TL_VALIDATION_PAYLOAD, TAG_LEN, offset, buf)?;
    prepend_bytes(key.id().as_bytes(), offset, buf)?;
    prepend_tl(VALIDALGO_KEYID, KEY_ID_LEN, offset, buf)?;
    prepend_tl(VALIDALGO_HMAC_SHA256, TL_LEN + KEY_ID_LEN, offset, buf)?;
    prepend_tl(TLV_TL_VALIDATION_ALGO, 2 * TL_LEN + KEY_ID_LEN, offset, buf)?;

    let mut payload_offset = 0;
    prepend_content(name, payload, last_chunk, &mut payload_offset, offset, buf)?;

    let len = old_offset - *offset;
    if len >= MAX_BODY_LEN {
        return Err(SignError::LengthOverflow);
    }

    // Every writer above succeeded, so *offset <= tag_offset <= old_offset <= buf.len()
    debug_assert!(*offset <= tag_offset && tag_offset <= old_offset && old_offset <= buf.len());
    let packet = buf
        .get_mut(*offset..old_offset)
        .ok_or(SignError::InsufficientBuffer)?;
    let (covered, slot) =
        try_split_at_mut(packet, tag_offset - *offset).ok_or(SignError::InsufficientBuffer)?;
    hmac_sha256_into(key.value().as_ref(), covered, slot);

    prepend_fixed_header(CCNX_TLV_V1, PT_DATA, len, MAX_HOP_LIMIT, offset, buf)?;

    Ok(SignedPacket {
        len: old_offset - *offset,
        payload_offset,
    })
}

/// Exact number of bytes [`sign_content_packet`] writes for these inputs.
pub fn signed_content_len(name: &Prefix, payload_len: usize, last_chunk: Option<u32>) -> usize {
    FIXED_HEADER_LEN + content_len(name, payload_len, last_chunk) + VALIDATION_LEN
}
