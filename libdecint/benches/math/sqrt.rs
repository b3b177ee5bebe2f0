#[macro_use]
extern crate criterion;
extern crate libdecint;

use criterion::{black_box, Criterion};
use libdecint::{math, BigInt};

macro_rules! bench_bigint_sqrt {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let n = BigInt::new(&"9".repeat($size)).unwrap();
            c.bench_function(concat!("BigInt_", $size, "_sqrt"), |b| {
                b.iter(|| math::sqrt(black_box(&n)).unwrap())
            });
        }
    )*
    }
}

bench_bigint_sqrt! {
    size_16: 16
    size_64: 64
    size_256: 256
}

criterion_group!(sqrt_benches, size_16, size_64, size_256);
criterion_main!(sqrt_benches);
