// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::TL_LEN;
use crate::content::{content_len, prepend_content, prepend_name};
use crate::error::SignError;
use crate::prefix::Prefix;

#[test]
fn test_prepend_name_segments_in_order() {
    let name = Prefix::from_uri("/a/bc");
    let mut buf = [0u8; 32];
    let mut offset = buf.len();

    let written = prepend_name(&name, &mut offset, &mut buf).expect("Failed to prepend_name(..)");

    assert_eq!(written, name.encoded_len());
    assert_eq!(
        &buf[offset..],
        &[
            0x00, 0x00, 0x00, 0x0b, // Name
            0x00, 0x01, 0x00, 0x01, b'a', // Segment
            0x00, 0x01, 0x00, 0x02, b'b', b'c', // Segment
        ]
    );
}

#[test]
fn test_prepend_name_with_chunk_last() {
    let name = Prefix::from_uri("/a").with_chunk(3);
    let mut buf = [0u8; 32];
    let mut offset = buf.len();

    prepend_name(&name, &mut offset, &mut buf).expect("Failed to prepend_name(..)");

    assert_eq!(
        &buf[offset..],
        &[
            0x00, 0x00, 0x00, 0x0a, // Name
            0x00, 0x01, 0x00, 0x01, b'a', // Segment
            0x00, 0x10, 0x00, 0x01, 0x03, // Chunk
        ]
    );
}

#[test]
fn test_prepend_content_layout() {
    let name = Prefix::from_uri("/a");
    let mut buf = [0u8; 32];
    let mut offset = buf.len();
    let mut payload_offset = 0;

    let written = prepend_content(&name, b"hi", None, &mut payload_offset, &mut offset, &mut buf)
        .expect("Failed to prepend_content(..)");

    assert_eq!(written, 19);
    assert_eq!(written, content_len(&name, 2, None));
    assert_eq!(payload_offset, buf.len() - 2);
    assert_eq!(
        &buf[offset..],
        &[
            0x00, 0x02, 0x00, 0x0f, // Object
            0x00, 0x00, 0x00, 0x05, // Name
            0x00, 0x01, 0x00, 0x01, b'a', // Segment
            0x00, 0x01, 0x00, 0x02, b'h', b'i', // Payload
        ]
    );
}

#[test]
fn test_prepend_content_end_chunk_between_name_and_payload() {
    let name = Prefix::from_uri("/a").with_chunk(0);
    let mut buf = [0u8; 64];
    let mut offset = buf.len();
    let mut payload_offset = 0;

    let written = prepend_content(&name, b"x", Some(9), &mut payload_offset, &mut offset, &mut buf)
        .expect("Failed to prepend_content(..)");

    assert_eq!(written, content_len(&name, 1, Some(9)));
    assert_eq!(&buf[payload_offset..], b"x");

    let object = &buf[offset..];
    let name_end = TL_LEN + name.encoded_len();
    assert_eq!(
        &object[name_end..],
        &[
            0x00, 0x19, 0x00, 0x01, 0x09, // ENDChunk
            0x00, 0x01, 0x00, 0x01, b'x', // Payload
        ]
    );
}

#[test]
fn test_prepend_content_insufficient() {
    let name = Prefix::from_uri("/a");
    let mut buf = [0u8; 18];
    let mut offset = buf.len();
    let mut payload_offset = 0;

    let result = prepend_content(&name, b"hi", None, &mut payload_offset, &mut offset, &mut buf);

    assert_eq!(result, Err(SignError::InsufficientBuffer));
}
