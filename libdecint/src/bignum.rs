//! The arbitrary-precision integer type.
//!
//! A [BigInt] is a sign-magnitude number whose magnitude is a vector of decimal digits, least
//! significant digit first. Storing base-10 digits makes parsing and printing trivial at the cost of
//! density; every operator lives in its own submodule.

use std::fmt;

/// Implements an operator trait for every combination of owned and borrowed operands, and the
/// matching assignment trait, in terms of `impl $imp<&BigInt> for &BigInt`.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl std::ops::$imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl<'a> std::ops::$imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &'a BigInt) -> BigInt {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl<'a> std::ops::$imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                std::ops::$imp::$method(self, &rhs)
            }
        }

        impl std::ops::$imp_assign<BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: BigInt) {
                *self = std::ops::$imp::$method(&*self, &rhs);
            }
        }

        impl<'a> std::ops::$imp_assign<&'a BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: &'a BigInt) {
                *self = std::ops::$imp::$method(&*self, rhs);
            }
        }
    };
}

mod add;
mod compare;
mod convert;
mod div;
mod mul;
mod negate;
mod parse;
mod step;
mod sub;
pub(crate) mod utils;

#[cfg(feature = "benchmark-internals")]
pub use compare::_compare;

/// The sign of a [BigInt].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly less than zero.
    Negative,
    /// Exactly zero. A [BigInt] has this sign iff it has no digits.
    Zero,
    /// Strictly greater than zero.
    Positive,
}

impl Sign {
    /// The sign of a product or quotient of two nonzero numbers with signs `self` and `other`.
    pub(crate) fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub(crate) fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// An integer of unbounded magnitude.
///
/// The representation is always normalized: there are no most-significant zero digits, and zero is
/// the empty digit vector with [Sign::Zero]. Hence two `BigInt`s are equal exactly when their signs
/// and digits are, and `PartialEq`/`Hash` can be structural.
///
/// ```
/// use libdecint::BigInt;
///
/// let a = BigInt::new("123456789123456789").unwrap();
/// let b = BigInt::from(2);
/// assert_eq!((a * b).to_string(), "246913578246913578");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    // we use a vector since most numbers are small, LSB first, e.g. digits of 123 are [3, 2, 1].
    digits: Vec<u8>,
}

impl BigInt {
    /// Creates a `BigInt` from a sign and little-endian digits, normalizing the result.
    pub(crate) fn from_parts(sign: Sign, digits: Vec<u8>) -> BigInt {
        let mut int = BigInt { sign, digits };
        int.normalize();
        int
    }

    /// Creates a positive `BigInt` from little-endian digits, normalizing the result.
    pub(crate) fn from_magnitude(digits: Vec<u8>) -> BigInt {
        Self::from_parts(Sign::Positive, digits)
    }

    /// `10^exp`, built directly from its digits.
    pub(crate) fn power_of_ten(exp: usize) -> BigInt {
        let mut digits = vec![0; exp + 1];
        digits[exp] = 1;
        BigInt {
            sign: Sign::Positive,
            digits,
        }
    }

    /// Strips most-significant zeros and resets the sign if nothing is left.
    pub(crate) fn normalize(&mut self) {
        utils::trim_leading_zeros(&mut self.digits);
        if self.digits.is_empty() {
            self.sign = Sign::Zero;
        }
    }

    /// Appends `n` most-significant zeros. The caller must [normalize](Self::normalize) afterwards.
    pub(crate) fn pad(&mut self, n: usize) {
        self.digits.resize(self.digits.len() + n, 0);
    }

    pub(crate) fn magnitude(&self) -> &[u8] {
        &self.digits
    }

    /// The sign of this integer.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The number of decimal digits in this integer. Zero has no digits.
    pub fn digits(&self) -> usize {
        self.digits.len()
    }

    /// Whether this integer is zero.
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Whether this integer is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    /// Whether this integer is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Whether this integer is even. Zero is even.
    pub fn is_even(&self) -> bool {
        self.digits.first().map_or(true, |d| d % 2 == 0)
    }

    /// Whether this integer is odd.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt {
            sign: Sign::Zero,
            digits: Vec::new(),
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut result = String::with_capacity(self.digits.len() + 1);
        if self.is_negative() {
            result.push('-');
        }
        for d in self.digits.iter().rev() {
            result.push(char::from(b'0' + d));
        }
        f.write_str(&result)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
