#[macro_use]
extern crate criterion;
extern crate libdecint;
extern crate lazy_static;

use criterion::{black_box, Criterion};
use lazy_static::lazy_static;
use libdecint::{math, BigInt};

lazy_static! {
    static ref INPUT: [(BigInt, BigInt); 3] = [
        (BigInt::from(288_481), BigInt::from(22_783)),
        (BigInt::from(939_841_321), BigInt::from(28_847_717)),
        (BigInt::new("18446744073709551616").unwrap(),
            BigInt::new("100000000000000000000").unwrap()),
    ];
}

fn bench_gcd(c: &mut Criterion) {
    c.bench_function("euclidean_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                math::gcd(black_box(u), black_box(v));
            }
        })
    });
}

fn bench_lcm(c: &mut Criterion) {
    c.bench_function("lcm", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                math::lcm(black_box(u), black_box(v));
            }
        })
    });
}

criterion_group!(gcd_benches, bench_gcd, bench_lcm);
criterion_main!(gcd_benches);
