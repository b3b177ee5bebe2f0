#![allow(clippy::suspicious_arithmetic_impl)]
use crate::bignum::BigInt;
use std::ops;

impl<'a> ops::Add<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &'a BigInt) -> BigInt {
        // if one of the operands is zero, just return the other one
        if self.is_zero() {
            return rhs.clone();
        } else if rhs.is_zero() {
            return self.clone();
        }

        // opposite signs become a subtraction of magnitudes
        if self.sign != rhs.sign {
            return self - &(-rhs);
        }

        // both operands have the same nonzero sign; leave room for one more digit of carry
        let size = self.digits.len().max(rhs.digits.len()) + 1;
        let mut lhs = self.clone();
        lhs.pad(size - lhs.digits.len());

        let mut carry: u8 = 0;
        for i in 0..size {
            let sum = lhs.digits[i] + rhs.digits.get(i).copied().unwrap_or(0) + carry;
            carry = sum / 10;
            lhs.digits[i] = sum % 10;
            if carry == 0 && i >= rhs.digits.len() {
                // the rest of lhs is unchanged
                break;
            }
        }

        lhs.normalize();
        lhs
    }
}

forward_binop!(impl Add, add, AddAssign, add_assign);
