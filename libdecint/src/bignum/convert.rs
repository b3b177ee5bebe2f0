//! Conversions between [BigInt] and native integers, and the `num-traits` number traits.

use crate::bignum::{BigInt, Sign};
use crate::error::{ArithmeticError, Result};
use num_traits::{FromPrimitive, Num, One, ToPrimitive, Zero};
use std::convert::TryFrom;

impl BigInt {
    fn from_u128_with_sign(mut n: u128, sign: Sign) -> BigInt {
        let mut digits = Vec::with_capacity(39);
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        BigInt::from_parts(sign, digits)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                BigInt::from_u128_with_sign(n as u128, Sign::Positive)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                BigInt::from_u128_with_sign(n.unsigned_abs() as u128, sign)
            }
        }
    )*};
}

impl_from_unsigned! { u8 u16 u32 u64 u128 usize }
impl_from_signed! { i8 i16 i32 i64 i128 isize }

/// Conversions to native integers accumulate digits from the most significant one and apply the
/// sign last. They return `None` when the value does not fit the target type.
impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        match self.sign {
            // -2^127 has a magnitude one past i128::MAX
            Sign::Negative if magnitude == i128::MIN.unsigned_abs() => Some(i128::MIN),
            Sign::Negative => i128::try_from(magnitude).ok().map(|n| -n),
            _ => i128::try_from(magnitude).ok(),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }
        self.magnitude_u128()
    }
}

impl BigInt {
    fn magnitude_u128(&self) -> Option<u128> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u128, |acc, &d| acc.checked_mul(10)?.checked_add(d as u128))
    }
}

impl FromPrimitive for BigInt {
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

impl Zero for BigInt {
    fn zero() -> BigInt {
        BigInt::default()
    }

    fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }
}

impl One for BigInt {
    fn one() -> BigInt {
        BigInt::from(1u8)
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ArithmeticError;

    /// Only radix 10 is supported, since digits are stored in base 10.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        if radix != 10 {
            return Err(ArithmeticError::InvalidArgument(format!(
                "cannot parse in radix {}, only radix 10 is supported",
                radix
            )));
        }
        BigInt::new(s)
    }
}
