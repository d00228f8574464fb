use brine::hash::sha512;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha512(c: &mut Criterion) {
    c.bench_function("sha512 64 bytes", |b| {
        b.iter(|| sha512(black_box(&[0u8; 64])))
    });

    let data = vec![0u8; 16 * 1024];
    c.bench_function("sha512 16 KiB", |b| b.iter(|| sha512(black_box(&data))));
}

criterion_group!(benches, bench_sha512);
criterion_main!(benches);
