//! Property-based tests checking `BigInt` arithmetic against native `i128` arithmetic.

use num_traits::ToPrimitive;
use proptest::prelude::*;

use crate::{math, BigInt};

fn big(n: i128) -> BigInt {
    BigInt::from(n)
}

fn any_i64() -> impl Strategy<Value = i128> {
    any::<i64>().prop_map(i128::from)
}

fn non_zero_i64() -> impl Strategy<Value = i128> {
    any::<i64>()
        .prop_filter("divisor must be nonzero", |n| *n != 0)
        .prop_map(i128::from)
}

fn small_int() -> impl Strategy<Value = i128> {
    -100_000i128..100_000i128
}

proptest! {
    #[test]
    fn add_matches_native(a in any_i64(), b in any_i64()) {
        prop_assert_eq!(big(a) + big(b), big(a + b));
    }

    #[test]
    fn sub_matches_native(a in any_i64(), b in any_i64()) {
        prop_assert_eq!(big(a) - big(b), big(a - b));
    }

    #[test]
    fn mul_matches_native(a in any_i64(), b in any_i64()) {
        prop_assert_eq!(big(a) * big(b), big(a * b));
    }

    #[test]
    fn div_rem_matches_native(a in any_i64(), b in non_zero_i64()) {
        let (q, r) = big(a).div_rem(&big(b)).unwrap();
        prop_assert_eq!(q, big(a / b));
        prop_assert_eq!(r, big(a % b));
    }

    #[test]
    fn cmp_matches_native(a in any_i64(), b in any_i64()) {
        prop_assert_eq!(big(a).cmp(&big(b)), a.cmp(&b));
    }

    #[test]
    fn add_commutative(a in any::<i128>(), b in any_i64()) {
        prop_assert_eq!(big(a) + big(b), big(b) + big(a));
    }

    #[test]
    fn add_associative(a in any::<i128>(), b in any::<i128>(), c in any::<i128>()) {
        prop_assert_eq!((big(a) + big(b)) + big(c), big(a) + (big(b) + big(c)));
    }

    #[test]
    fn additive_inverse(a in any::<i128>()) {
        let a = big(a);
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn distributive(a in any::<i128>(), b in any::<i128>(), c in any::<i128>()) {
        let (a, b, c) = (big(a), big(b), big(c));
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn division_identity(a in any::<i128>(), b in any::<i128>().prop_filter("nonzero", |n| *n != 0)) {
        let (a, b) = (big(a) * big(a), big(b));
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.is_zero() || r.sign() == a.sign());
        prop_assert!(r.abs() < b.abs());
    }

    #[test]
    fn render_parse_round_trip(a in any::<i128>()) {
        let rendered = big(a).to_string();
        prop_assert_eq!(&rendered, &a.to_string());
        prop_assert_eq!(rendered.parse::<BigInt>().unwrap(), big(a));
    }

    #[test]
    fn leading_zeros_and_plus(zeros in 0usize..8, a in any::<u64>()) {
        let literal = format!("+{}{}", "0".repeat(zeros), a);
        prop_assert_eq!(BigInt::new(&literal).unwrap(), BigInt::from(a));
    }

    #[test]
    fn native_round_trip(a in any::<i128>(), b in any::<i64>(), c in any::<u64>()) {
        prop_assert_eq!(big(a).to_i128(), Some(a));
        prop_assert_eq!(BigInt::from(b).to_i64(), Some(b));
        prop_assert_eq!(BigInt::from(c).to_u64(), Some(c));
    }

    #[test]
    fn inc_dec_identity(a in any::<i128>()) {
        let mut n = big(a);
        n.inc();
        prop_assert_eq!(&n, &(big(a) + big(1)));
        n.dec();
        prop_assert_eq!(n, big(a));
    }

    #[test]
    fn gcd_lcm(a in small_int(), b in small_int()) {
        let (a, b) = (big(a), big(b));
        let gcd = math::gcd(&a, &b);
        let lcm = math::lcm(&a, &b);
        if !gcd.is_zero() {
            prop_assert!((&a % &gcd).is_zero());
            prop_assert!((&b % &gcd).is_zero());
        }
        if !a.is_zero() && !b.is_zero() {
            prop_assert_eq!(&lcm * &gcd, (&a * &b).abs());
        }
    }

    #[test]
    fn next_prime_is_next(a in -10i128..2_000i128) {
        let a = big(a);
        let prime = a.next_prime();
        prop_assert!(prime > a);
        prop_assert!(prime.is_prime());
        let mut between = a.clone();
        between.inc();
        while between < prime {
            prop_assert!(!between.is_prime());
            between.inc();
        }
    }

    #[test]
    fn sqrt_is_floor(a in 0i128..i128::from(i64::MAX)) {
        let n = big(a);
        let root = n.sqrt().unwrap();
        let mut next = root.clone();
        next.inc();
        prop_assert!(&root * &root <= n);
        prop_assert!(&next * &next > n);
    }

    #[test]
    fn pow_mod_matches_pow(base in -50i128..50i128, exp in 0u32..20, modulus in 2i128..1_000i128) {
        let (b, e, m) = (big(base), BigInt::from(exp), big(modulus));
        let full = b.pow(&e).unwrap();
        prop_assert_eq!(full.clone(), big(base.pow(exp)));
        prop_assert_eq!(b.pow_mod(&e, &m).unwrap(), full % m);
    }
}
