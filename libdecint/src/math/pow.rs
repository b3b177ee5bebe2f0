use crate::bignum::BigInt;
use crate::error::{ArithmeticError, Result};
use log::trace;

/// Calculates `base^exp`, reduced modulo `modulus` if one is given.
///
/// - A base of magnitude 1 yields `-1` for a negative base and odd exponent, and `1` otherwise.
/// - A negative exponent yields `0` (truncation of `1 / base^|exp|`), or a domain error if the base
///   is zero.
/// - Otherwise the power is computed by square-and-multiply. With a modulus, every intermediate
///   product is reduced by the truncating `%`, so a negative base can give a negative result.
///
/// ```
/// use libdecint::{math, BigInt};
///
/// let result = math::pow(&BigInt::from(2), &BigInt::from(10), Some(&BigInt::from(1000)));
/// assert_eq!(result.unwrap(), BigInt::from(24));
/// ```
pub fn pow(base: &BigInt, exp: &BigInt, modulus: Option<&BigInt>) -> Result<BigInt> {
    if base.digits() == 1 && base.magnitude()[0] == 1 {
        return Ok(if base.is_negative() && exp.is_odd() {
            BigInt::from(-1)
        } else {
            BigInt::from(1)
        });
    }

    if exp.is_negative() {
        if base.is_zero() {
            return Err(ArithmeticError::DomainError(
                "zero cannot be raised to a negative power",
            ));
        }
        return Ok(BigInt::default());
    }

    if let Some(modulus) = modulus {
        if modulus.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
    }
    let reduce = |n: BigInt| match modulus {
        Some(modulus) => n % modulus,
        None => n,
    };

    let two = BigInt::from(2);
    let mut result = BigInt::from(1);
    let mut square = base.clone();
    let mut exp = exp.clone();
    while !exp.is_zero() {
        trace!("square-and-multiply step, exponent {}", exp);
        if exp.is_odd() {
            result = reduce(&result * &square);
        }
        square = reduce(&square * &square);
        exp /= &two;
    }
    Ok(result)
}

impl BigInt {
    /// `self^exp`. See [math::pow](crate::math::pow).
    pub fn pow(&self, exp: &BigInt) -> Result<BigInt> {
        pow(self, exp, None)
    }

    /// `self^exp % modulus`, reducing every intermediate product. See
    /// [math::pow](crate::math::pow). A zero modulus is a division by zero.
    pub fn pow_mod(&self, exp: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        pow(self, exp, Some(modulus))
    }
}
