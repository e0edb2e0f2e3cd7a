// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per FIPS 180-4 / RFC 6234 Section 6.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN};

/// SHA-256 constants K per RFC 6234 Section 5.1
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) per RFC 6234 Section 6.2.1
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 streaming state (init / update / final).
///
/// Message schedule, working variables and the partial block live in the
/// struct so they are wiped on drop and on [`reset`](Self::reset).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha256State {
    // Hash state H(i)
    h: [u32; 8],

    // Message schedule W[0..63]
    w: [u32; 64],

    // Working variables a..h
    wv: [u32; 8],

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sha256State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha256State")
            .field("total_len", &self.total_len)
            .finish_non_exhaustive()
    }
}

impl Sha256State {
    /// Create new SHA-256 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: H0,
            w: [0u32; 64],
            wv: [0u32; 8],
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Compress one 64-byte block into H per RFC 6234 Section 6.2.2
    fn compress(&mut self, block: &[u8; BLOCK_LEN]) {
        for (t, chunk) in block.chunks_exact(4).enumerate() {
            self.w[t] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            let s0 = self.w[t - 15].rotate_right(7)
                ^ self.w[t - 15].rotate_right(18)
                ^ (self.w[t - 15] >> 3);
            let s1 = self.w[t - 2].rotate_right(17)
                ^ self.w[t - 2].rotate_right(19)
                ^ (self.w[t - 2] >> 10);
            self.w[t] = s1
                .wrapping_add(self.w[t - 7])
                .wrapping_add(s0)
                .wrapping_add(self.w[t - 16]);
        }

        self.wv = self.h;

        for (k, wt) in K256.iter().zip(self.w.iter()) {
            let [a, b, c, d, e, f, g, h] = self.wv;

            let bsig1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
            let ch = (e & f) ^ (!e & g);
            let t1 = h
                .wrapping_add(bsig1)
                .wrapping_add(ch)
                .wrapping_add(*k)
                .wrapping_add(*wt);

            let bsig0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let t2 = bsig0.wrapping_add(maj);

            self.wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
        }

        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.w.zeroize();
        self.wv.zeroize();
    }

    /// Compress the internal buffer
    fn compress_buffer(&mut self) {
        let mut block = self.buffer;
        self.compress(&block);
        block.zeroize();
        self.buffer.zeroize();
        self.buffer_len = 0;
    }

    /// Update state with data
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                self.compress_buffer();
            }
        }

        // Process full blocks straight from the input
        let mut blocks = data[offset..].chunks_exact(BLOCK_LEN);
        for block in blocks.by_ref() {
            let mut tmp = [0u8; BLOCK_LEN];
            tmp.copy_from_slice(block);
            self.compress(&tmp);
            tmp.zeroize();
        }

        // Buffer remaining
        let rest = blocks.remainder();
        if !rest.is_empty() {
            self.buffer[..rest.len()].copy_from_slice(rest);
            self.buffer_len = rest.len();
        }
    }

    /// Finalize and write the digest.
    ///
    /// The state must be [`reset`](Self::reset) before it is fed again.
    pub fn finalize(&mut self, out: &mut [u8; HASH_LEN]) {
        // Padding per RFC 6234 Section 4.1
        let bit_len = self.total_len.wrapping_mul(8);

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the 64-bit length
        if self.buffer_len > BLOCK_LEN - 8 {
            self.buffer[self.buffer_len..].fill(0);
            self.compress_buffer();
        }

        self.buffer[self.buffer_len..BLOCK_LEN - 8].fill(0);
        self.buffer[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
        self.compress_buffer();

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
    }

    /// Reset to H(0) for reuse
    pub fn reset(&mut self) {
        self.zeroize();
        self.h = H0;
    }
}

/// One-shot SHA-256 of `data`.
///
/// # Example
///
/// ```
/// use ccnauth_hmac::sha256;
///
/// let digest = sha256(b"abc");
/// assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
/// ```
pub fn sha256(data: &[u8]) -> [u8; HASH_LEN] {
    let mut state = Sha256State::new();
    let mut out = [0u8; HASH_LEN];

    state.update(data);
    state.finalize(&mut out);

    out
}
