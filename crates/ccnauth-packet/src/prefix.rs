// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::consts::TL_LEN;
use crate::tlv::var_uint_len;

/// A CCNx name: opaque segments plus an optional chunk number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prefix {
    components: Vec<Vec<u8>>,
    chunk: Option<u32>,
}

impl Prefix {
    /// Empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name from a list of segments.
    pub fn from_components<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
            chunk: None,
        }
    }

    /// Parse `/a/b/c`, with or without a leading `ccnx:` scheme.
    ///
    /// Empty segments are skipped. `%XX` escapes are decoded, any other `%`
    /// is taken literally. A last segment of the form `chunk=N` sets the
    /// chunk number. What [`Display`](core::fmt::Display) prints parses
    /// back into an equal name unless the name has empty segments.
    pub fn from_uri(uri: &str) -> Self {
        let path = uri.strip_prefix("ccnx:").unwrap_or(uri);
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let chunk = segments
            .last()
            .and_then(|last| last.strip_prefix(CHUNK_MARKER))
            .and_then(|n| n.parse::<u32>().ok());
        if chunk.is_some() {
            segments.pop();
        }

        Self {
            components: segments.into_iter().map(unescape).collect(),
            chunk,
        }
    }

    /// Append a segment.
    pub fn push(&mut self, component: impl Into<Vec<u8>>) {
        self.components.push(component.into());
    }

    /// Same name with a chunk number segment.
    pub fn with_chunk(mut self, chunk: u32) -> Self {
        self.chunk = Some(chunk);
        self
    }

    /// The segments, in order.
    pub fn components(&self) -> &[Vec<u8>] {
        &self.components
    }

    /// The chunk number, if any.
    pub fn chunk(&self) -> Option<u32> {
        self.chunk
    }

    /// Encoded size of the name TLV, header included.
    pub fn encoded_len(&self) -> usize {
        let segments: usize = self.components.iter().map(|c| TL_LEN + c.len()).sum();
        let chunk = self
            .chunk
            .map_or(0, |chunk| TL_LEN + var_uint_len(u64::from(chunk)));

        TL_LEN + segments + chunk
    }
}

/// Prints `/seg/seg[/chunk=N]`.
///
/// Bytes outside `A-Z a-z 0-9 - . _ ~` are written as `%XX`, so the output
/// parses back with [`Prefix::from_uri`]. Empty segments print as nothing
/// and are lost on reparse.
impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.components.is_empty() && self.chunk.is_none() {
            return f.write_str("/");
        }

        for component in &self.components {
            f.write_str("/")?;
            for &b in component {
                if is_unreserved(b) {
                    write!(f, "{}", b as char)?;
                } else {
                    write!(f, "%{:02X}", b)?;
                }
            }
        }

        if let Some(chunk) = self.chunk {
            write!(f, "/{}{}", CHUNK_MARKER, chunk)?;
        }

        Ok(())
    }
}

const CHUNK_MARKER: &str = "chunk=";

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn unescape(segment: &str) -> Vec<u8> {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let escaped = match bytes.get(i..i + 3) {
            Some([b'%', hi, lo]) => hex_value(*hi).zip(hex_value(*lo)),
            _ => None,
        };

        match escaped {
            Some((hi, lo)) => {
                out.push((hi << 4) | lo);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }

    out
}
