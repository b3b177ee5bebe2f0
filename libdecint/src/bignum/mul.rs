#![allow(clippy::suspicious_arithmetic_impl)]
use crate::bignum::BigInt;
use std::ops;

impl<'a> ops::Mul<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &'a BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::default();
        }

        // schoolbook multiplication: the product has at most len(a) + len(b) digits
        let a = &self.digits;
        let b = &rhs.digits;
        let mut c = vec![0u8; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            let mut carry: u8 = 0;
            for (j, &y) in b.iter().enumerate() {
                // at most 9 + 9 * 9 + 9 = 99, so a u8 suffices
                let t = c[i + j] + x * y + carry;
                c[i + j] = t % 10;
                carry = t / 10;
            }
            c[i + b.len()] += carry;
        }

        BigInt::from_parts(self.sign.mul(rhs.sign), c)
    }
}

forward_binop!(impl Mul, mul, MulAssign, mul_assign);
