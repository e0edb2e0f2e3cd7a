// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CCNx TLV prepend writers and a forward reader.
//!
//! Writers fill a buffer back to front. Each takes the cursor explicitly:
//! the field is written into `buf[*offset - n..*offset]`, the cursor moves
//! down by `n` and `n` is returned. A writer that does not fit leaves the
//! cursor untouched and fails with [`SignError::InsufficientBuffer`].

use crate::consts::TL_LEN;
use crate::error::{DecodeError, SignError};

/// Prepend raw bytes before the cursor.
pub fn prepend_bytes(data: &[u8], offset: &mut usize, buf: &mut [u8]) -> Result<usize, SignError> {
    let start = offset
        .checked_sub(data.len())
        .ok_or(SignError::InsufficientBuffer)?;

    buf.get_mut(start..*offset)
        .ok_or(SignError::InsufficientBuffer)?
        .copy_from_slice(data);
    *offset = start;

    Ok(data.len())
}

/// Prepend a type/length header.
///
/// Fails with [`SignError::LengthOverflow`] if `len` does not fit 16 bits.
pub fn prepend_tl(
    typ: u16,
    len: usize,
    offset: &mut usize,
    buf: &mut [u8],
) -> Result<usize, SignError> {
    let len = u16::try_from(len).map_err(|_| SignError::LengthOverflow)?;

    let mut tl = [0u8; TL_LEN];
    tl[..2].copy_from_slice(&typ.to_be_bytes());
    tl[2..].copy_from_slice(&len.to_be_bytes());

    prepend_bytes(&tl, offset, buf)
}

/// Prepend a complete TLV carrying `value`.
pub fn prepend_blob(
    typ: u16,
    value: &[u8],
    offset: &mut usize,
    buf: &mut [u8],
) -> Result<usize, SignError> {
    if value.len() > usize::from(u16::MAX) {
        return Err(SignError::LengthOverflow);
    }

    prepend_bytes(value, offset, buf)?;
    prepend_tl(typ, value.len(), offset, buf)?;

    Ok(TL_LEN + value.len())
}

/// Number of bytes of the minimal big-endian encoding of `value` (at least 1).
pub fn var_uint_len(value: u64) -> usize {
    let significant = (u64::BITS - value.leading_zeros()) as usize;
    core::cmp::max(1, significant.div_ceil(8))
}

/// Prepend a TLV carrying `value` as a minimal big-endian integer.
pub fn prepend_var_uint(
    typ: u16,
    value: u64,
    offset: &mut usize,
    buf: &mut [u8],
) -> Result<usize, SignError> {
    let bytes = value.to_be_bytes();
    let len = var_uint_len(value);

    prepend_bytes(&bytes[bytes.len() - len..], offset, buf)?;
    prepend_tl(typ, len, offset, buf)?;

    Ok(TL_LEN + len)
}

/// Decode a minimal big-endian integer of at most 4 bytes.
///
/// Leading zero bytes are rejected; zero itself is the single byte `00`.
pub fn decode_var_uint(value: &[u8]) -> Result<u32, DecodeError> {
    if value.is_empty() || value.len() > 4 {
        return Err(DecodeError::InvalidVarUint);
    }
    if value.len() > 1 && value[0] == 0 {
        return Err(DecodeError::InvalidVarUint);
    }

    Ok(value
        .iter()
        .fold(0u32, |acc, b| (acc << 8) | u32::from(*b)))
}

/// One decoded TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    /// Type code
    pub typ: u16,
    /// Value bytes
    pub value: &'a [u8],
    /// Position of the type field within the reader's input
    pub offset: usize,
}

impl Tlv<'_> {
    /// Position one past the end of the value within the reader's input
    pub fn end(&self) -> usize {
        self.offset + TL_LEN + self.value.len()
    }
}

/// Reads consecutive TLVs front to back.
#[derive(Debug, Clone)]
pub struct TlvReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> TlvReader<'a> {
    /// Start reading at the beginning of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Read the next TLV.
    pub fn read(&mut self) -> Result<Tlv<'a>, DecodeError> {
        let rest = self.buf.get(self.pos..).ok_or(DecodeError::Truncated)?;
        if rest.len() < TL_LEN {
            return Err(DecodeError::Truncated);
        }

        let typ = u16::from_be_bytes([rest[0], rest[1]]);
        let len = usize::from(u16::from_be_bytes([rest[2], rest[3]]));
        let value = rest
            .get(TL_LEN..TL_LEN + len)
            .ok_or(DecodeError::Truncated)?;

        let tlv = Tlv {
            typ,
            value,
            offset: self.pos,
        };
        self.pos = tlv.end();

        Ok(tlv)
    }

    /// Read the next TLV and require it to be of type `typ`.
    pub fn expect(&mut self, typ: u16) -> Result<Tlv<'a>, DecodeError> {
        let tlv = self.read()?;
        if tlv.typ != typ {
            return Err(DecodeError::UnexpectedTlv {
                expected: typ,
                found: tlv.typ,
            });
        }

        Ok(tlv)
    }
}
