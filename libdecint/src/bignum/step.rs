//! Fast increment and decrement, without going through full addition.

use crate::bignum::{BigInt, Sign};

impl BigInt {
    /// Adds one to this integer in place, in amortized O(1).
    pub fn inc(&mut self) {
        match self.sign {
            Sign::Zero => *self = BigInt::from_parts(Sign::Positive, vec![1]),
            Sign::Positive => self.abs_inc(),
            Sign::Negative => self.abs_dec(),
        }
    }

    /// Subtracts one from this integer in place, in amortized O(1).
    pub fn dec(&mut self) {
        match self.sign {
            Sign::Zero => *self = BigInt::from_parts(Sign::Negative, vec![1]),
            Sign::Positive => self.abs_dec(),
            Sign::Negative => self.abs_inc(),
        }
    }

    /// Increments the magnitude, keeping the sign. Requires `self != 0`.
    pub(crate) fn abs_inc(&mut self) {
        debug_assert!(!self.is_zero());
        // a trailing run of 9s rolls over to 0s
        match self.digits.iter().position(|&d| d != 9) {
            Some(i) => {
                self.digits[i] += 1;
                self.digits[..i].iter_mut().for_each(|d| *d = 0);
            }
            None => {
                self.digits.iter_mut().for_each(|d| *d = 0);
                self.digits.push(1);
            }
        }
    }

    /// Decrements the magnitude, keeping the sign unless the result is zero. Requires `self != 0`.
    pub(crate) fn abs_dec(&mut self) {
        debug_assert!(!self.is_zero());
        // a trailing run of 0s rolls under to 9s; a normalized nonzero value has a nonzero digit
        if let Some(i) = self.digits.iter().position(|&d| d != 0) {
            self.digits[i] -= 1;
            self.digits[..i].iter_mut().for_each(|d| *d = 9);
        }
        self.normalize();
    }
}
