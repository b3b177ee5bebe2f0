use crate::bignum::BigInt;
use crate::error::{ArithmeticError, Result};

/// Calculates the floor logarithm of `n` in `base`, the largest `k` with `base^k <= n`.
///
/// Base 10 is read off the digit count. Other bases count divisions until the quotient is zero.
pub fn log(n: &BigInt, base: &BigInt) -> Result<BigInt> {
    if !n.is_positive() {
        return Err(ArithmeticError::DomainError(
            "logarithm of a non-positive integer",
        ));
    }
    if *base < BigInt::from(2) {
        return Err(ArithmeticError::DomainError(
            "logarithm in a base less than 2",
        ));
    }

    if *base == BigInt::from(10) {
        return Ok(BigInt::from(n.digits() - 1));
    }

    let mut result = BigInt::default();
    let mut value = n / base;
    while !value.is_zero() {
        result.inc();
        value /= base;
    }
    Ok(result)
}

impl BigInt {
    /// The floor logarithm of `self` in `base`. See [math::log](crate::math::log).
    pub fn log(&self, base: &BigInt) -> Result<BigInt> {
        log(self, base)
    }
}
