use crate::bignum::BigInt;
use log::debug;

/// Whether `n` is prime, by trial division with odd divisors up to `√n`. Values below 2 are not
/// prime.
pub fn is_prime(n: &BigInt) -> bool {
    let two = BigInt::from(2);
    if *n < two {
        return false;
    }
    if n.is_even() {
        return *n == two;
    }

    let mut divisor = BigInt::from(3);
    while &divisor * &divisor <= *n {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += &two;
    }
    true
}

/// Finds the smallest prime strictly greater than `n`.
///
/// Inputs below 2 give 2. Otherwise the search starts at the largest odd number not exceeding `n`
/// and steps by 2.
///
/// ```
/// use libdecint::{math, BigInt};
///
/// assert_eq!(math::next_prime(&BigInt::from(1000)), BigInt::from(1009));
/// ```
pub fn next_prime(n: &BigInt) -> BigInt {
    if *n < BigInt::from(2) {
        return BigInt::from(2);
    }

    let mut candidate = n.clone();
    if candidate.is_even() {
        candidate.abs_dec();
    }
    let mut tried = 0usize;
    loop {
        candidate.abs_inc();
        candidate.abs_inc();
        tried += 1;
        if is_prime(&candidate) {
            debug!("next prime after {} found after {} candidates", n, tried);
            return candidate;
        }
    }
}

impl BigInt {
    /// Whether `self` is prime. See [math::is_prime](crate::math::is_prime).
    pub fn is_prime(&self) -> bool {
        is_prime(self)
    }

    /// The smallest prime strictly greater than `self`. See
    /// [math::next_prime](crate::math::next_prime).
    pub fn next_prime(&self) -> BigInt {
        next_prime(self)
    }
}
