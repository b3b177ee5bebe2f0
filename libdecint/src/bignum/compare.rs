use crate::bignum::utils::cmp_magnitude;
use crate::bignum::{BigInt, Sign};
use std::cmp::Ordering;

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Positive) => cmp_magnitude(&self.digits, &other.digits),
            // for negatives the longer (or larger) magnitude is the smaller number
            (Sign::Negative, Sign::Negative) => cmp_magnitude(&other.digits, &self.digits),
            (Sign::Zero, Sign::Zero) => Ordering::Equal,
            (Sign::Positive, _) | (Sign::Zero, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, _) | (Sign::Zero, Sign::Positive) => Ordering::Less,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "benchmark-internals")]
pub fn _compare(u: &BigInt, v: &BigInt, s: &str) -> bool {
    match s {
        "eq" => u == v,
        "lte" => u <= v,
        "lt" => u < v,
        "gte" => u >= v,
        "gt" => u > v,
        _ => unreachable!(),
    }
}
