//! Helpers over raw little-endian digit vectors (magnitudes).

use std::cmp::Ordering;

/// Removes most-significant zero digits. A vector of only zeros becomes empty.
pub fn trim_leading_zeros(digits: &mut Vec<u8>) {
    let len = digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
    digits.truncate(len);
}

/// Compares two normalized magnitudes.
pub fn cmp_magnitude(lhs: &[u8], rhs: &[u8]) -> Ordering {
    match lhs.len().cmp(&rhs.len()) {
        Ordering::Equal => (),
        ord => return ord,
    }
    for i in (0..lhs.len()).rev() {
        match lhs[i].cmp(&rhs[i]) {
            Ordering::Equal => (),
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Subtracts `rhs` from `lhs` in place with borrow propagation, then trims `lhs`.
///
/// Requires `lhs >= rhs` as magnitudes.
pub fn sub_magnitude_assign(lhs: &mut Vec<u8>, rhs: &[u8]) {
    debug_assert!(cmp_magnitude(lhs, rhs) != Ordering::Less);

    let mut borrow: u8 = 0;
    for i in 0..lhs.len() {
        let sub = rhs.get(i).copied().unwrap_or(0) + borrow;
        if i >= rhs.len() && borrow == 0 {
            break;
        }
        if lhs[i] < sub {
            lhs[i] = lhs[i] + 10 - sub;
            borrow = 1;
        } else {
            lhs[i] -= sub;
            borrow = 0;
        }
    }
    trim_leading_zeros(lhs);
}
