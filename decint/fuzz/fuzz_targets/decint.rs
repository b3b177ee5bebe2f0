#![no_main]
use libfuzzer_sys::fuzz_target;

use libdecint::BigInt;

// Input is two literals separated by a space. Parsing must never panic, and valid pairs must
// satisfy the division identity.
fuzz_target!(|input: String| {
    let mut literals = input.splitn(2, ' ');
    let lhs = literals.next().map(BigInt::new);
    let rhs = literals.next().map(BigInt::new);

    if let (Some(Ok(a)), Some(Ok(b))) = (lhs, rhs) {
        assert_eq!(BigInt::new(&a.to_string()).as_ref(), Ok(&a));
        if let Ok((q, r)) = a.div_rem(&b) {
            assert_eq!(&q * &b + &r, a);
            assert!(r.abs() < b.abs());
        }
    }
});
