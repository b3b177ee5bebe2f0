#[macro_use]
extern crate criterion;
extern crate libdecint;

use criterion::{black_box, Criterion};
use libdecint::{BigInt, _compare};

const CASES: [&str; 5] = ["eq", "lte", "lt", "gte", "gt"];

macro_rules! bench_bigint_cmp {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u = BigInt::new(&"9".repeat($size)).unwrap();
            let v = BigInt::new(&"5".repeat($size)).unwrap();
            for item in CASES.iter() {
                c.bench_function(&(concat!("BigInt_", $size, "_cmp_").to_string() + (*item)), |b| {
                    b.iter(|| _compare(black_box(&u), black_box(&v), item))
                });
            }
        }
    )*
    }
}

bench_bigint_cmp! {
    size_1024: 1024
    size_2048: 2048
    size_4096: 4096
}

criterion_group!(bigint_cmp_benches, size_1024, size_2048, size_4096);
criterion_main!(bigint_cmp_benches);
