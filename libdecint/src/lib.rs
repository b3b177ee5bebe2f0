//! Arbitrary-precision signed integers stored as decimal digits.
//!
//! ```
//! use libdecint::BigInt;
//!
//! let n: BigInt = "-12345678901234567890".parse().unwrap();
//! assert_eq!((&n * &n).to_string(), "152415787532388367501905199875019052100");
//! assert_eq!(BigInt::from(100).sqrt().unwrap(), BigInt::from(10));
//! ```

pub mod common;

mod error;
pub use error::{ArithmeticError, LiteralIssue, Result};

mod bignum;
pub use bignum::{BigInt, Sign};

#[cfg(feature = "benchmark-internals")]
pub use bignum::_compare;

pub mod math;

#[cfg(test)]
mod proptests;
