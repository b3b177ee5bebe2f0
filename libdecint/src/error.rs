//! Errors produced by [BigInt](crate::BigInt) operations.
//!
//! Every error kind has a stable code (`D0001`, ...) and a long-form explanation so that front ends
//! can render them as diagnostics and explain them on request.

use crate::common::Span;
use thiserror::Error;

/// Why a textual literal was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralIssue {
    /// The literal has no characters at all.
    #[error("expected a sign or a digit, found nothing")]
    Empty,
    /// The literal is a lone `+` or `-`.
    #[error("expected digits after the sign")]
    MissingDigits,
    /// The literal contains something other than a leading sign and decimal digits.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

/// An error raised by an arithmetic operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The text is not an integer literal.
    #[error("invalid integer literal {literal:?}: {reason}")]
    InvalidLiteral {
        /// The rejected text.
        literal: String,
        /// Where in `literal` the problem is.
        span: Span,
        /// What the problem is.
        reason: LiteralIssue,
    },
    /// A division, remainder or modular reduction by zero.
    #[error("division by zero")]
    DivideByZero,
    /// The operation is undefined for its operands.
    #[error("math domain error: {0}")]
    DomainError(&'static str),
    /// An argument is outside the range the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand for results of fallible [BigInt](crate::BigInt) operations.
pub type Result<T> = std::result::Result<T, ArithmeticError>;

macro_rules! define_error_codes {
    ($($(#[doc = $doc:expr])+ $code:ident: $variant:ident, $title:expr)*) => {
        impl ArithmeticError {
            /// The stable code of this error, like `D0002`.
            pub fn code(&self) -> &'static str {
                match self {
                    $(ArithmeticError::$variant { .. } => stringify!($code),)*
                }
            }

            /// A short title for this kind of error, without operand details.
            pub fn title(&self) -> &'static str {
                match self {
                    $(ArithmeticError::$variant { .. } => $title,)*
                }
            }

            /// Every error code paired with its long-form explanation.
            pub fn all_codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                vec![$((stringify!($code), concat!($($doc, "\n"),+)),)*]
            }
        }
    };
}

define_error_codes! {
    ///An integer literal is an optional leading `+` or `-` followed by one or more decimal digits.
    ///Nothing else is accepted: no whitespace, no digit separators, no radix prefixes and no
    ///fractional part.
    ///
    ///Leading zeros are fine and are dropped, so `+007` is the literal for 7 and `-0` is zero.
    ///
    ///Examples of invalid literals are ``, `-`, `1_000`, `0x1f` and `12.5`.
    D0001: InvalidLiteral, "invalid integer literal"

    ///Division, remainder and modular exponentiation are undefined for a zero divisor or modulus.
    ///
    ///Division truncates toward zero and the remainder takes the sign of the dividend, so for any
    ///nonzero `b`, `a == (a / b) * b + a % b`.
    D0002: DivideByZero, "division by zero"

    ///The operation has no integer result for these operands. This error is fired for
    ///
    ///  - the factorial of a negative integer,
    ///  - the square root of a negative integer,
    ///  - the logarithm of a non-positive integer, or in a base smaller than 2,
    ///  - zero raised to a negative power.
    ///
    ///Note that a nonzero base raised to a negative power is not an error: the result is
    ///truncated to 0, except for bases 1 and -1.
    D0003: DomainError, "math domain error"

    ///An argument that is not itself an integer operand is out of range. For example, the digit
    ///count of a random integer cannot be negative, and literals can only be parsed in radix 10.
    D0004: InvalidArgument, "invalid argument"
}

impl ArithmeticError {
    /// Looks up the long-form explanation of an error code.
    pub fn explain(code: &str) -> Option<&'static str> {
        Self::all_codes_with_explanations()
            .into_iter()
            .find(|(c, _)| *c == code)
            .map(|(_, explanation)| explanation)
    }
}
