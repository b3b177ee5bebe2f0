use crate::bignum::BigInt;

/// Calculates the GCD for (u, v) ∈ (Z, Z) with the [Euclidean GCD] algorithm.
///
/// The result is never negative, and `gcd(0, 0)` is `0`.
///
/// ```
/// use libdecint::{math, BigInt};
///
/// let gcd = math::gcd(&BigInt::from(-624_129), &BigInt::from(2_061_517));
/// assert_eq!(gcd, BigInt::from(18_913));
/// ```
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
pub fn gcd(u: &BigInt, v: &BigInt) -> BigInt {
    let mut u = u.abs();
    let mut v = v.abs();
    while !v.is_zero() {
        let t = &u % &v;
        u = std::mem::replace(&mut v, t);
    }
    u
}

/// Calculates the LCM for (u, v) ∈ (Z, Z) as `|u * v| / gcd(u, v)`.
///
/// The result is never negative, and is `0` if either operand is `0`.
pub fn lcm(u: &BigInt, v: &BigInt) -> BigInt {
    if u.is_zero() || v.is_zero() {
        return BigInt::default();
    }
    (u * v).abs() / gcd(u, v)
}

impl BigInt {
    /// The greatest common divisor of `self` and `other`. See [math::gcd](crate::math::gcd).
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        gcd(self, other)
    }

    /// The least common multiple of `self` and `other`. See [math::lcm](crate::math::lcm).
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        lcm(self, other)
    }
}
