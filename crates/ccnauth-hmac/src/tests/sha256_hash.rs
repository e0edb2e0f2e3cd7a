// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for SHA-256 (full hash with padding)
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS), Section 6.2
// [2] RFC 6234, Section 8.5 (TEST1, TEST2_1, TEST3)

use ccnauth_util::hex_to_bytes;

use crate::sha256::{Sha256State, sha256};

fn assert_digest(msg: &[u8], expected_hex: &str) {
    let digest = sha256(msg);
    assert_eq!(
        digest.as_slice(),
        hex_to_bytes(expected_hex).as_slice(),
        "SHA-256 mismatch for {} byte message",
        msg.len()
    );
}

#[test]
fn test_sha256_hash_empty() {
    assert_digest(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn test_sha256_hash_abc() {
    assert_digest(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn test_sha256_hash_56_bytes() {
    // Exactly 56 bytes forces a second block with only padding + length
    assert_digest(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn test_sha256_hash_55_bytes() {
    // Largest message that still fits padding + length in one block
    assert_digest(
        &[b'a'; 55],
        "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
    );
}

#[test]
fn test_sha256_hash_one_block() {
    assert_digest(
        &[b'a'; 64],
        "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
    );
}

#[test]
fn test_sha256_hash_million_a() {
    let mut state = Sha256State::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        state.update(&chunk);
    }

    let mut digest = [0u8; 32];
    state.finalize(&mut digest);

    assert_eq!(
        digest.as_slice(),
        hex_to_bytes("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
            .as_slice()
    );
}

#[test]
fn test_sha256_incremental_matches_one_shot() {
    let msg: Vec<u8> = (0..=255u8).cycle().take(300).collect();
    let expected = sha256(&msg);

    // Split points around block boundaries
    for split in [0, 1, 55, 56, 63, 64, 65, 128, 299, 300] {
        let mut state = Sha256State::new();
        let mut digest = [0u8; 32];

        state.update(&msg[..split]);
        state.update(&msg[split..]);
        state.finalize(&mut digest);

        assert_eq!(digest, expected, "split at {}", split);
    }
}

#[test]
fn test_sha256_byte_by_byte() {
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    let mut state = Sha256State::new();
    let mut digest = [0u8; 32];

    for b in msg.iter() {
        state.update(core::slice::from_ref(b));
    }
    state.finalize(&mut digest);

    assert_eq!(digest, sha256(msg));
}

#[test]
fn test_sha256_reset_reuses_state() {
    let mut state = Sha256State::new();
    let mut first = [0u8; 32];
    let mut second = [0u8; 32];

    state.update(b"something else entirely");
    state.finalize(&mut first);

    state.reset();
    state.update(b"abc");
    state.finalize(&mut second);

    assert_eq!(second, sha256(b"abc"));
    assert_ne!(first, second);
}
