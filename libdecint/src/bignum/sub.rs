#![allow(clippy::suspicious_arithmetic_impl)]
use crate::bignum::utils::{cmp_magnitude, sub_magnitude_assign};
use crate::bignum::BigInt;
use std::cmp::Ordering;
use std::ops;

impl<'a> ops::Sub<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &'a BigInt) -> BigInt {
        if self.is_zero() {
            return -rhs;
        } else if rhs.is_zero() {
            return self.clone();
        }

        // opposite signs become an addition of magnitudes
        if self.sign != rhs.sign {
            return self + &(-rhs);
        }

        // same nonzero sign: subtract the smaller magnitude from the larger one, flipping the sign
        // if the operands had to be swapped
        let (mut larger, smaller, sign) = match cmp_magnitude(&self.digits, &rhs.digits) {
            Ordering::Equal => return BigInt::default(),
            Ordering::Greater => (self.digits.clone(), &rhs.digits, self.sign),
            Ordering::Less => (rhs.digits.clone(), &self.digits, self.sign.flip()),
        };
        sub_magnitude_assign(&mut larger, smaller);

        BigInt::from_parts(sign, larger)
    }
}

forward_binop!(impl Sub, sub, SubAssign, sub_assign);
