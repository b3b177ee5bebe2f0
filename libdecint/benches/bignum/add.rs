#[macro_use]
extern crate criterion;
extern crate libdecint;
extern crate lazy_static;

use criterion::{black_box, Criterion};
use lazy_static::lazy_static;
use libdecint::BigInt;

lazy_static! {
    static ref INPUT: [(BigInt, BigInt); 4] = [
        (BigInt::new("99999999999999999999999999999999").unwrap(),
            BigInt::new("999999999999999999999").unwrap()),
        (BigInt::new("555555555555555555555555555").unwrap(),
            BigInt::new("-555555555555555555").unwrap()),
        (BigInt::new("-99999999999999999999999999").unwrap(),
            BigInt::new("99999999999999999").unwrap()),
        (BigInt::new(&"7".repeat(512)).unwrap(),
            BigInt::new(&"3".repeat(256)).unwrap()),
    ];
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                black_box(black_box(u) + black_box(v));
            }
        })
    });
}

criterion_group!(add_benches, bench_add);
criterion_main!(add_benches);
