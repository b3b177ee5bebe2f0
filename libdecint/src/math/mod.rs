//! Number-theoretic algorithms over [BigInt][crate::BigInt].
//!
//! Each algorithm is a free function in this module and is also exposed as a method on `BigInt`,
//! so `math::gcd(&a, &b)` and `a.gcd(&b)` are the same computation. The algorithms only use the
//! public arithmetic of `BigInt` plus its in-place digit steps.

mod factorial;
pub use factorial::factorial;

mod gcd;
pub use gcd::{gcd, lcm};

mod log;
pub use log::log;

mod pow;
pub use pow::pow;

mod prime;
pub use prime::{is_prime, next_prime};

mod random;
pub use random::{random, MAX_RANDOM_DIGITS};

mod sqrt;
pub use sqrt::sqrt;
