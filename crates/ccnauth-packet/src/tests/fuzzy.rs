// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use ccnauth_hmac::KeyMaterial;

use crate::error::SignError;
use crate::prefix::Prefix;
use crate::sign::{sign_content_packet, signed_content_len};
use crate::verify::verify_content_packet;

fn prefix_strategy() -> impl Strategy<Value = Prefix> {
    (
        proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..=16), 0..=4),
        proptest::option::of(any::<u32>()),
    )
        .prop_map(|(components, chunk)| {
            let name = Prefix::from_components(components);
            match chunk {
                Some(chunk) => name.with_chunk(chunk),
                None => name,
            }
        })
}

proptest! {
    #[test]
    fn sign_then_verify_round_trip(
        key in proptest::collection::vec(any::<u8>(), 0..=100),
        name in prefix_strategy(),
        payload in proptest::collection::vec(any::<u8>(), 0..=512),
        last_chunk in proptest::option::of(any::<u32>()),
        slack in 0..=64usize
    ) {
        let key = KeyMaterial::derive(&key);
        let needed = signed_content_len(&name, payload.len(), last_chunk);
        let mut buf = vec![0u8; needed + slack];
        let mut offset = buf.len();

        let written = sign_content_packet(&name, &payload, last_chunk, &key, &mut offset, &mut buf)
            .expect("Failed to sign_content_packet(..)")
            .len;

        prop_assert_eq!(written, needed);
        prop_assert_eq!(offset, slack);

        let content = verify_content_packet(&buf[offset..], &key)
            .expect("Failed to verify_content_packet(..)");

        prop_assert_eq!(content.name(), &name);
        prop_assert_eq!(content.payload(), payload.as_slice());
        prop_assert_eq!(content.last_chunk(), last_chunk);
    }

    #[test]
    fn short_buffer_always_rejected(
        name in prefix_strategy(),
        payload in proptest::collection::vec(any::<u8>(), 0..=128),
        missing in 1..=32usize
    ) {
        let key = KeyMaterial::derive(b"k");
        let needed = signed_content_len(&name, payload.len(), None);
        let mut buf = vec![0u8; needed.saturating_sub(missing)];
        let mut offset = buf.len();

        let result = sign_content_packet(&name, &payload, None, &key, &mut offset, &mut buf);

        prop_assert_eq!(result, Err(SignError::InsufficientBuffer));
    }
}
