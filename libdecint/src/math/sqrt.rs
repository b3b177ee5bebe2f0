use crate::bignum::BigInt;
use crate::error::{ArithmeticError, Result};
use log::debug;

/// Calculates the integer square root, `⌊√n⌋`.
///
/// Values below 16 are looked up. Larger values use Newton's iteration `x = (x + n / x) / 2`
/// seeded at `10^(digits / 2 - 1)`, which is at most `√n`. After the first step the iterate is at
/// least `⌊√n⌋` and strictly decreases until it reaches it, so the iteration stops as soon as it
/// would not decrease.
///
/// ```
/// use libdecint::{math, BigInt};
///
/// assert_eq!(math::sqrt(&BigInt::from(1_000_000)).unwrap(), BigInt::from(1000));
/// ```
pub fn sqrt(n: &BigInt) -> Result<BigInt> {
    if n.is_negative() {
        return Err(ArithmeticError::DomainError(
            "cannot take the square root of a negative integer",
        ));
    }

    if n.digits() <= 2 {
        match n.magnitude().iter().rev().fold(0, |acc, d| acc * 10 + d) {
            0 => return Ok(BigInt::default()),
            1..=3 => return Ok(BigInt::from(1)),
            4..=8 => return Ok(BigInt::from(2)),
            9..=15 => return Ok(BigInt::from(3)),
            _ => {}
        }
    }

    let two = BigInt::from(2);
    let seed = BigInt::power_of_ten(n.digits() / 2 - 1);
    let mut x = (&seed + &(n / &seed)) / &two;
    let mut iterations = 1;
    loop {
        let next = (&x + &(n / &x)) / &two;
        if next >= x {
            break;
        }
        x = next;
        iterations += 1;
    }
    debug!(
        "newton square root of a {}-digit integer took {} iterations",
        n.digits(),
        iterations
    );
    Ok(x)
}

impl BigInt {
    /// The integer square root of `self`. See [math::sqrt](crate::math::sqrt).
    pub fn sqrt(&self) -> Result<BigInt> {
        sqrt(self)
    }
}
