use crate::bignum::BigInt;
use crate::error::{ArithmeticError, Result};
use log::debug;
use rand::Rng;
use std::convert::TryFrom;

/// The largest digit count [random] picks when none is requested, matching the default limit
/// on integer string conversion in Python.
pub const MAX_RANDOM_DIGITS: usize = 4300;

/// Generates a non-negative integer with uniformly random digits drawn from `rng`.
///
/// With `Some(n)` the result has exactly `n` digits; with `None` the digit count is chosen
/// uniformly from `[0, MAX_RANDOM_DIGITS]`. A zero most-significant digit is redrawn from `[1, 9]`.
///
/// The digits are allocated up front, one byte each, so callers taking `n` from untrusted input
/// should bound it; an allocation that large aborts the process.
///
/// ```
/// use libdecint::BigInt;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let n = BigInt::random(&mut rng, Some(30)).unwrap();
/// assert_eq!(n.digits(), 30);
/// ```
pub fn random<R: Rng + ?Sized>(rng: &mut R, digits: Option<i64>) -> Result<BigInt> {
    let len = match digits {
        None => rng.gen_range(0..=MAX_RANDOM_DIGITS),
        Some(n) => usize::try_from(n).map_err(|_| {
            ArithmeticError::InvalidArgument(format!(
                "cannot generate an integer with {} digits",
                n
            ))
        })?,
    };
    debug!("generating a random integer with {} digits", len);

    let mut magnitude: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=9)).collect();
    if let Some(top) = magnitude.last_mut() {
        if *top == 0 {
            *top = rng.gen_range(1..=9);
        }
    }
    Ok(BigInt::from_magnitude(magnitude))
}

impl BigInt {
    /// A random non-negative integer. See [math::random](crate::math::random).
    pub fn random<R: Rng + ?Sized>(rng: &mut R, digits: Option<i64>) -> Result<BigInt> {
        random(rng, digits)
    }
}
