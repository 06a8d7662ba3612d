// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use keyforge_hash::{HashType, MAX_DIGEST_SIZE};
use keyforge_hmac::{Hmac, HmacBinding};

fn benchmark_hmac(c: &mut Criterion) {
    let key = b"benchmark-hmac-key-material";

    for hash_type in [
        HashType::Sha1,
        HashType::Sha256,
        HashType::Sha512,
        HashType::Sha3_256,
    ] {
        let mut group = c.benchmark_group(format!("hmac_{}", hash_type.name()));

        for msg_len in [64, 1024, 16384].iter() {
            group.throughput(Throughput::Bytes(*msg_len as u64));
            group.bench_with_input(format!("{} bytes", msg_len), msg_len, |b, &msg_len| {
                let msg = vec![0xa5u8; msg_len];
                let mut out = [0u8; MAX_DIGEST_SIZE];

                // Keyed once; every iteration reuses the context
                let mut ctx = Hmac::new(HmacBinding::software());
                ctx.set_key(hash_type, key).expect("set_key failed");

                b.iter(|| {
                    ctx.update(black_box(&msg)).expect("update failed");
                    ctx.finalize(black_box(&mut out)).expect("finalize failed");
                });
            });
        }
        group.finish();
    }
}

fn benchmark_hmac_set_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_set_key");

    // Short keys are padded, long ones hashed down first
    for key_len in [16, 64, 200].iter() {
        group.bench_with_input(format!("{} byte key", key_len), key_len, |b, &key_len| {
            let key = vec![0x0bu8; key_len];
            let mut ctx = Hmac::new(HmacBinding::software());

            b.iter(|| {
                ctx.set_key(HashType::Sha256, black_box(&key))
                    .expect("set_key failed");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_hmac, benchmark_hmac_set_key);
criterion_main!(benches);
