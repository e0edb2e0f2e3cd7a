// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use ccnauth_hmac::{KeyMaterial, hmac_sha256_into, sha256};

fn benchmark_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for len in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(format!("{} bytes", len), len, |b, &len| {
            let data = vec![0x5au8; len];

            b.iter(|| sha256(black_box(&data)));
        });
    }
    group.finish();
}

fn benchmark_hmac_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha256");
    let key = KeyMaterial::derive(b"benchmark-shared-secret");

    for len in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(format!("{} bytes", len), len, |b, &len| {
            let data = vec![0x5au8; len];
            let mut tag = [0u8; 32];

            b.iter(|| {
                hmac_sha256_into(
                    black_box(key.value().as_ref()),
                    black_box(&data),
                    black_box(&mut tag),
                )
            });
        });
    }
    group.finish();
}

fn benchmark_key_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_derivation");

    // Short keys are padded, long keys are hashed
    for len in [16, 64, 131].iter() {
        group.bench_with_input(format!("{} byte key", len), len, |b, &len| {
            let secret = vec![0xaau8; len];

            b.iter(|| KeyMaterial::derive(black_box(&secret)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_sha256,
    benchmark_hmac_sha256,
    benchmark_key_derivation
);
criterion_main!(benches);
