use crate::bignum::{BigInt, Sign};
use crate::error::{ArithmeticError, LiteralIssue, Result};
use std::str::FromStr;

impl BigInt {
    /// Parses an integer literal: an optional `+` or `-` followed by one or more decimal digits.
    /// Leading zeros are accepted and dropped.
    ///
    /// ```
    /// use libdecint::BigInt;
    ///
    /// assert_eq!(BigInt::new("+007").unwrap().to_string(), "7");
    /// assert!(BigInt::new("-").is_err());
    /// ```
    pub fn new(literal: &str) -> Result<BigInt> {
        let invalid = |span: (usize, usize), reason| ArithmeticError::InvalidLiteral {
            literal: literal.to_owned(),
            span: span.into(),
            reason,
        };

        let bytes = literal.as_bytes();
        let (sign, skip) = match bytes.first() {
            None => return Err(invalid((0, 0), LiteralIssue::Empty)),
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::Positive, 1),
            Some(_) => (Sign::Positive, 0),
        };
        if skip == bytes.len() {
            return Err(invalid((0, 1), LiteralIssue::MissingDigits));
        }

        if let Some((i, c)) = literal
            .char_indices()
            .skip(skip)
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(invalid((i, i + c.len_utf8()), LiteralIssue::UnexpectedChar(c)));
        }

        let digits = bytes[skip..].iter().rev().map(|b| b - b'0').collect();
        Ok(BigInt::from_parts(sign, digits))
    }
}

impl FromStr for BigInt {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::new(s)
    }
}
