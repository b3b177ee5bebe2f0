#[macro_use]
extern crate criterion;
extern crate libdecint;

use criterion::Criterion;
use libdecint::BigInt;

macro_rules! bench_bigint_constructor {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let literal = format!("-{}", "9".repeat($size));
            c.bench_function(concat!("BigInt_", $size, "_constructor"), |b| {
                b.iter(|| BigInt::new(&literal).unwrap())
            });
        }
    )*
    }
}

bench_bigint_constructor! {
    size_1024: 1024
    size_2048: 2048
    size_4096: 4096
}

criterion_group!(ctor_benches, size_1024, size_2048, size_4096);
criterion_main!(ctor_benches);
