// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Decoding and verification of HMAC-SHA256 signed content packets.

use ccnauth_hmac::{KEY_ID_LEN, KeyId, KeyMaterial, KeyValue, TAG_LEN, verify_hmac_sha256};

use crate::consts::{
    PT_DATA, TL_LEN, TLV_M_END_CHUNK, TLV_M_NAME, TLV_M_PAYLOAD, TLV_N_CHUNK, TLV_N_NAME_SEGMENT,
    TLV_TL_OBJECT, TLV_TL_VALIDATION_ALGO, TLV_TL_VALIDATION_PAYLOAD, VALIDALGO_HMAC_SHA256,
    VALIDALGO_KEYID,
};
use crate::error::{DecodeError, VerifyError};
use crate::header::FixedHeader;
use crate::prefix::Prefix;
use crate::tlv::{TlvReader, decode_var_uint};

/// A decoded signed content packet borrowing from the wire bytes.
///
/// Decoding checks structure only; call [`verify`](Self::verify) or use
/// [`verify_content_packet`] before trusting the contents.
#[derive(Debug, Clone)]
pub struct SignedContent<'a> {
    header: FixedHeader,
    name: Prefix,
    last_chunk: Option<u32>,
    payload: &'a [u8],
    key_id: KeyId,
    covered: &'a [u8],
    tag: &'a [u8],
}

impl<'a> SignedContent<'a> {
    /// Decode exactly one packet from `packet`.
    pub fn decode(packet: &'a [u8]) -> Result<Self, DecodeError> {
        let header = FixedHeader::decode(packet)?;

        if header.packet_type != PT_DATA {
            return Err(DecodeError::UnexpectedPacketType(header.packet_type));
        }
        if usize::from(header.packet_len) != packet.len() {
            return Err(DecodeError::LengthMismatch {
                declared: usize::from(header.packet_len),
                actual: packet.len(),
            });
        }

        let body = packet
            .get(usize::from(header.header_len)..)
            .ok_or(DecodeError::Truncated)?;
        let mut reader = TlvReader::new(body);

        let object = reader.expect(TLV_TL_OBJECT)?;
        let algo = reader.expect(TLV_TL_VALIDATION_ALGO)?;
        let validation = reader.expect(TLV_TL_VALIDATION_PAYLOAD)?;
        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes);
        }

        let (name, last_chunk, payload) = decode_object(object.value)?;
        let key_id = decode_hmac_algo(algo.value)?;

        if validation.value.len() != TAG_LEN {
            return Err(DecodeError::BadTagLength(validation.value.len()));
        }

        Ok(Self {
            header,
            name,
            last_chunk,
            payload,
            key_id,
            covered: &body[object.offset..validation.offset + TL_LEN],
            tag: validation.value,
        })
    }

    /// Recompute the tag with `key_value` and compare it in constant time.
    pub fn verify(&self, key_value: &KeyValue) -> Result<(), VerifyError> {
        if verify_hmac_sha256(key_value.as_ref(), self.covered, self.tag) {
            Ok(())
        } else {
            #[cfg(feature = "tracing-integration")]
            tracing::debug!(name = %self.name, "content packet tag mismatch");

            Err(VerifyError::TagMismatch)
        }
    }

    /// The fixed header.
    pub fn header(&self) -> &FixedHeader {
        &self.header
    }

    /// The content name.
    pub fn name(&self) -> &Prefix {
        &self.name
    }

    /// The end-chunk metadata, if present.
    pub fn last_chunk(&self) -> Option<u32> {
        self.last_chunk
    }

    /// The content payload.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Identifier of the key the producer claims to have signed with.
    pub fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    /// The bytes the tag authenticates.
    pub fn covered(&self) -> &'a [u8] {
        self.covered
    }

    /// The embedded tag.
    pub fn tag(&self) -> &'a [u8] {
        self.tag
    }
}

/// Decode `packet`, check it names `key` and verify its tag.
///
/// # Errors
///
/// - [`VerifyError::Decode`] if the packet is malformed.
/// - [`VerifyError::KeyIdMismatch`] if it was signed under another key id.
/// - [`VerifyError::TagMismatch`] if the tag does not authenticate the bytes.
pub fn verify_content_packet<'a>(
    packet: &'a [u8],
    key: &KeyMaterial,
) -> Result<SignedContent<'a>, VerifyError> {
    let content = SignedContent::decode(packet)?;

    if content.key_id() != key.id() {
        #[cfg(feature = "tracing-integration")]
        tracing::debug!(name = %content.name(), "content packet key id mismatch");

        return Err(VerifyError::KeyIdMismatch);
    }

    content.verify(key.value())?;

    Ok(content)
}

fn decode_object(value: &[u8]) -> Result<(Prefix, Option<u32>, &[u8]), DecodeError> {
    let mut reader = TlvReader::new(value);
    let mut name = None;
    let mut last_chunk = None;
    let mut payload = None;

    while !reader.is_empty() {
        let tlv = reader.read()?;
        match tlv.typ {
            TLV_M_NAME => set_once(&mut name, decode_name(tlv.value)?, tlv.typ)?,
            TLV_M_PAYLOAD => set_once(&mut payload, tlv.value, tlv.typ)?,
            TLV_M_END_CHUNK => set_once(&mut last_chunk, decode_var_uint(tlv.value)?, tlv.typ)?,
            // Unknown metadata (expiry, payload type...) is covered but not interpreted
            _ => {}
        }
    }

    let name = name.ok_or(DecodeError::MissingName)?;

    Ok((name, last_chunk, payload.unwrap_or_default()))
}

fn set_once<T>(slot: &mut Option<T>, value: T, typ: u16) -> Result<(), DecodeError> {
    if slot.is_some() {
        return Err(DecodeError::DuplicateTlv(typ));
    }

    *slot = Some(value);

    Ok(())
}

fn decode_name(value: &[u8]) -> Result<Prefix, DecodeError> {
    let mut reader = TlvReader::new(value);
    let mut name = Prefix::new();

    while !reader.is_empty() {
        let tlv = reader.read()?;
        match tlv.typ {
            TLV_N_NAME_SEGMENT => name.push(tlv.value),
            TLV_N_CHUNK if name.chunk().is_some() => {
                return Err(DecodeError::DuplicateTlv(TLV_N_CHUNK));
            }
            TLV_N_CHUNK => name = name.with_chunk(decode_var_uint(tlv.value)?),
            found => {
                return Err(DecodeError::UnexpectedTlv {
                    expected: TLV_N_NAME_SEGMENT,
                    found,
                });
            }
        }
    }

    Ok(name)
}

fn decode_hmac_algo(value: &[u8]) -> Result<KeyId, DecodeError> {
    let mut reader = TlvReader::new(value);

    let algo = reader.read()?;
    if algo.typ != VALIDALGO_HMAC_SHA256 {
        return Err(DecodeError::UnsupportedAlgorithm(algo.typ));
    }
    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes);
    }

    let mut reader = TlvReader::new(algo.value);
    let key_id = reader.expect(VALIDALGO_KEYID)?;
    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes);
    }

    let bytes: [u8; KEY_ID_LEN] = key_id
        .value
        .try_into()
        .map_err(|_| DecodeError::BadKeyIdLength(key_id.value.len()))?;

    Ok(KeyId::from_bytes(bytes))
}
