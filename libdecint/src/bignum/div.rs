//! Truncating division and remainder.
//!
//! The quotient is rounded toward zero and the remainder takes the sign of the dividend, so that
//! `a == (a / b) * b + a % b` for every nonzero `b`.

#![allow(clippy::suspicious_arithmetic_impl)]
use crate::bignum::utils::{cmp_magnitude, sub_magnitude_assign};
use crate::bignum::BigInt;
use crate::error::{ArithmeticError, Result};
use log::trace;
use std::cmp::Ordering;
use std::ops;

/// Long division of magnitudes. Returns the quotient and remainder digits, both unnormalized.
///
/// For each quotient position `i` from the most significant down, the divisor shifted by `i`
/// digits is subtracted from the running remainder as long as it fits. Because digits are base 10
/// and the divisor has a nonzero leading digit, that happens at most 9 times per position.
fn long_division(dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let size = dividend.len() - divisor.len() + 1;
    let mut quotient = vec![0u8; size];
    let mut remainder = dividend.to_vec();

    // divisor * 10^(size - 1); dropping low zeros from the front of this slice yields smaller
    // powers of ten in O(1)
    let mut padded = vec![0u8; size - 1];
    padded.extend_from_slice(divisor);

    for i in (0..size).rev() {
        // divisor * 10^i
        let shifted = &padded[size - 1 - i..];

        while cmp_magnitude(&remainder, shifted) != Ordering::Less {
            sub_magnitude_assign(&mut remainder, shifted);
            quotient[i] += 1;
        }
        trace!("quotient digit {} at position {}", quotient[i], i);
    }

    (quotient, remainder)
}

impl BigInt {
    /// Divides by `rhs`, returning the truncated quotient and the remainder.
    ///
    /// ```
    /// use libdecint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-100).div_rem(&BigInt::from(7)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-14), BigInt::from(-2)));
    /// ```
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        if self.digits.len() < rhs.digits.len() {
            return Ok((BigInt::default(), self.clone()));
        }

        let (quotient, remainder) = long_division(&self.digits, &rhs.digits);
        Ok((
            BigInt::from_parts(self.sign.mul(rhs.sign), quotient),
            BigInt::from_parts(self.sign, remainder),
        ))
    }

    /// The truncated quotient `self / rhs`.
    pub fn try_div(&self, rhs: &BigInt) -> Result<BigInt> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// The remainder `self % rhs`, with the sign of `self`.
    pub fn try_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        if self.digits.len() < rhs.digits.len() {
            return Ok(self.clone());
        }
        let (_, remainder) = long_division(&self.digits, &rhs.digits);
        Ok(BigInt::from_parts(self.sign, remainder))
    }
}

/// Panics if `rhs` is zero, like division of primitive integers. Use [BigInt::try_div] to handle
/// a zero divisor.
impl<'a> ops::Div<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn div(self, rhs: &'a BigInt) -> BigInt {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("attempt to divide {} by zero: {}", self, err),
        }
    }
}

/// Panics if `rhs` is zero, like remainder of primitive integers. Use [BigInt::try_rem] to handle
/// a zero divisor.
impl<'a> ops::Rem<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &'a BigInt) -> BigInt {
        match self.try_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!(
                "attempt to calculate the remainder of {} with a divisor of zero: {}",
                self, err
            ),
        }
    }
}

forward_binop!(impl Div, div, DivAssign, div_assign);
forward_binop!(impl Rem, rem, RemAssign, rem_assign);
