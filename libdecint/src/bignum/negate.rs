use crate::bignum::{BigInt, Sign};
use std::ops;

impl ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt {
            sign: self.sign.flip(),
            digits: self.digits,
        }
    }
}

impl<'a> ops::Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl BigInt {
    /// The absolute value of this integer.
    pub fn abs(&self) -> BigInt {
        match self.sign {
            Sign::Negative => -self,
            _ => self.clone(),
        }
    }
}
