//! The operations decint can perform, and how their failures are attributed to operands.

use libdecint::{math, ArithmeticError, BigInt, Result};
use rand::Rng;
use std::cmp::Ordering;
use std::str::FromStr;

/// What a failed operation is blamed on, for pointing a diagnostic at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blame {
    /// The operand at this index.
    Operand(usize),
    /// All operands together.
    Operands,
    /// The `--mod` value.
    Modulus,
    /// The `--digits` value.
    Digits,
}

macro_rules! define_operations {
    ($($(#[doc = $doc:expr])+ $variant:ident: $name:expr, $arity:expr)*) => {
        /// An operation on integer operands.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum Operation {
            $($(#[doc = $doc])+ $variant,)*
        }

        impl Operation {
            /// The command-line names of all operations.
            pub const NAMES: &'static [&'static str] = &[$($name,)*];

            /// The command-line name of this operation.
            pub fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            /// How many operands this operation takes.
            pub fn arity(self) -> usize {
                match self {
                    $(Operation::$variant => $arity,)*
                }
            }
        }

        impl FromStr for Operation {
            type Err = String;

            fn from_str(name: &str) -> std::result::Result<Self, String> {
                match name {
                    $($name => Ok(Operation::$variant),)*
                    _ => Err(format!("`{}` is not an operation", name)),
                }
            }
        }
    };
}

define_operations! {
    /// `a + b`
    Add: "add", 2
    /// `a - b`
    Sub: "sub", 2
    /// `a * b`
    Mul: "mul", 2
    /// `a / b`, truncated toward zero.
    Div: "div", 2
    /// `a % b`, with the sign of `a`.
    Rem: "rem", 2
    /// `a / b` and `a % b`.
    DivRem: "divrem", 2
    /// Three-way comparison of `a` and `b`.
    Cmp: "cmp", 2
    /// `-a`
    Neg: "neg", 1
    /// `|a|`
    Abs: "abs", 1
    /// `a + 1`
    Inc: "inc", 1
    /// `a - 1`
    Dec: "dec", 1
    /// `a^b`, optionally modulo `--mod`.
    Pow: "pow", 2
    /// `⌊√a⌋`
    Sqrt: "sqrt", 1
    /// `a!`
    Factorial: "factorial", 1
    /// The smallest prime greater than `a`.
    NextPrime: "next-prime", 1
    /// Whether `a` is prime.
    IsPrime: "is-prime", 1
    /// The floor logarithm of `a` in base `b`.
    Log: "log", 2
    /// The greatest common divisor of `a` and `b`.
    Gcd: "gcd", 2
    /// The least common multiple of `a` and `b`.
    Lcm: "lcm", 2
    /// A random non-negative integer, with `--digits` digits if given.
    Random: "random", 0
}

impl Operation {
    /// Performs the operation and renders its result.
    ///
    /// `operands` must hold exactly [arity](Self::arity) integers.
    pub fn eval<R: Rng + ?Sized>(
        self,
        operands: &[BigInt],
        modulus: Option<&BigInt>,
        digits: Option<i64>,
        rng: &mut R,
    ) -> Result<String> {
        let a = || &operands[0];
        let b = || &operands[1];
        let result = match self {
            Operation::Add => a() + b(),
            Operation::Sub => a() - b(),
            Operation::Mul => a() * b(),
            Operation::Div => a().try_div(b())?,
            Operation::Rem => a().try_rem(b())?,
            Operation::DivRem => {
                let (quotient, remainder) = a().div_rem(b())?;
                return Ok(format!("{} {}", quotient, remainder));
            }
            Operation::Cmp => {
                return Ok(match a().cmp(b()) {
                    Ordering::Less => "less",
                    Ordering::Equal => "equal",
                    Ordering::Greater => "greater",
                }
                .to_owned())
            }
            Operation::Neg => -a(),
            Operation::Abs => a().abs(),
            Operation::Inc => {
                let mut n = a().clone();
                n.inc();
                n
            }
            Operation::Dec => {
                let mut n = a().clone();
                n.dec();
                n
            }
            Operation::Pow => math::pow(a(), b(), modulus)?,
            Operation::Sqrt => a().sqrt()?,
            Operation::Factorial => a().factorial()?,
            Operation::NextPrime => a().next_prime(),
            Operation::IsPrime => return Ok(a().is_prime().to_string()),
            Operation::Log => a().log(b())?,
            Operation::Gcd => a().gcd(b()),
            Operation::Lcm => a().lcm(b()),
            Operation::Random => BigInt::random(rng, digits)?,
        };
        Ok(result.to_string())
    }

    /// Decides what `err`, raised by this operation on `operands`, should be blamed on.
    pub fn blame(self, err: &ArithmeticError, operands: &[BigInt]) -> Blame {
        match (self, err) {
            (Operation::Pow, ArithmeticError::DivideByZero) => Blame::Modulus,
            (_, ArithmeticError::DivideByZero) => Blame::Operand(1),
            (Operation::Log, ArithmeticError::DomainError(_)) if operands[0].is_positive() => {
                Blame::Operand(1)
            }
            (_, ArithmeticError::DomainError(_)) if self.arity() == 1 => Blame::Operand(0),
            (Operation::Log, ArithmeticError::DomainError(_)) => Blame::Operand(0),
            (Operation::Random, ArithmeticError::InvalidArgument(_)) => Blame::Digits,
            _ => Blame::Operands,
        }
    }
}
