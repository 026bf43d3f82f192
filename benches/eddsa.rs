use edmont::keys::derive_public_key;
use edmont::signature::{sign, verify};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SEED: [u8; 32] = [0x42u8; 32];

pub fn bench_sign(c: &mut Criterion) {
    let message = [0u8; 64];

    c.bench_function("sign 64 bytes", |b| {
        b.iter(|| sign(black_box(&message), black_box(&SEED)))
    });
}

pub fn bench_verify(c: &mut Criterion) {
    let message = [0u8; 64];
    let public = derive_public_key(&SEED, false).unwrap();
    let signature = sign(&message, &SEED).unwrap();

    c.bench_function("verify 64 bytes", |b| {
        b.iter(|| {
            verify(
                black_box(&signature),
                black_box(&message),
                black_box(&public),
            )
        })
    });
}

pub fn bench_derive(c: &mut Criterion) {
    c.bench_function("derive public key", |b| {
        b.iter(|| derive_public_key(black_box(&SEED), false))
    });
}

criterion_group!(benches, bench_sign, bench_verify, bench_derive);
criterion_main!(benches);
