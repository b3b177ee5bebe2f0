use crate::bignum::BigInt;
use crate::error::{ArithmeticError, Result};

/// Calculates `n!`, multiplying `n · (n - 1) · … · 1` with in-place decrements.
///
/// ```
/// use libdecint::{math, BigInt};
///
/// assert_eq!(math::factorial(&BigInt::from(5)).unwrap(), BigInt::from(120));
/// ```
pub fn factorial(n: &BigInt) -> Result<BigInt> {
    if n.is_negative() {
        return Err(ArithmeticError::DomainError(
            "factorial of a negative integer",
        ));
    }

    let mut result = BigInt::from(1);
    let mut factor = n.clone();
    while !factor.is_zero() {
        result *= &factor;
        factor.abs_dec();
    }
    Ok(result)
}

impl BigInt {
    /// `self!`. See [math::factorial](crate::math::factorial).
    pub fn factorial(&self) -> Result<BigInt> {
        factorial(self)
    }
}
