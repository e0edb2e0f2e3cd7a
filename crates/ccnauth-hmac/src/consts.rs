// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-256 output size in bytes
pub const HASH_LEN: usize = 32;

/// SHA-256 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// Key-value block size (one SHA-256 block)
pub const KEY_VALUE_LEN: usize = BLOCK_LEN;

/// Key identifier size (one SHA-256 digest)
pub const KEY_ID_LEN: usize = HASH_LEN;

/// Maximum HMAC-SHA256 tag size
pub const TAG_LEN: usize = HASH_LEN;

/// Inner pad byte per RFC 2104
pub(crate) const IPAD: u8 = 0x36;

/// Outer pad byte per RFC 2104
pub(crate) const OPAD: u8 = 0x5c;
