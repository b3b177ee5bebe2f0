//! The decint app, a calculator for arbitrary-precision integers. The arithmetic itself lives in
//! [libdecint].

#![deny(missing_docs)]

mod diagnostics;
use diagnostics::{
    emit_decint_diagnostics, emit_usage_error, sanitize_source_for_diagnostics, Diagnostic,
};

mod operation;
pub use operation::{Blame, Operation};

use libdecint::common::Span;
use libdecint::{ArithmeticError, BigInt};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;

/// Options to run decint with.
pub struct Opts {
    /// Name of the operation to perform, like `add`. Only [None](Option::None) when explaining an
    /// error code.
    pub operation: Option<String>,
    /// Integer literals the operation acts on.
    pub operands: Vec<String>,
    /// Modulus literal for `pow`.
    pub modulus: Option<String>,
    /// Digit count for `random`.
    pub digits: Option<i64>,
    /// Seed for `random`. When [None](Option::None), the generator is seeded from system entropy.
    pub seed: Option<u64>,
    /// When is [Some](Option::Some) error code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, decint diagnostics will be colored.
    pub color: bool,
}

fn is_integer<T: FromStr>(value: String) -> Result<(), String> {
    value
        .parse::<T>()
        .map(|_| ())
        .map_err(|_| format!("`{}` is not a valid integer", value))
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .usage("decint <operation> [OPTIONS] -- [operands]...")
        .arg(
            clap::Arg::with_name("operation")
                .help(
                    "Operation to perform. Possible values:\n\
                    \tadd sub mul div rem divrem cmp log gcd lcm pow: two operands\n\
                    \tneg abs inc dec sqrt factorial next-prime is-prime: one operand\n\
                    \trandom: no operands\n\
                    ",
                )
                .next_line_help(true)
                .hide_possible_values(true)
                .possible_values(Operation::NAMES)
                .required_unless("explain"),
        )
        .arg(
            clap::Arg::with_name("operands")
                .help("Integer operands, like 12 or -0034")
                .multiple(true)
                .last(true),
        )
        .arg(
            clap::Arg::with_name("mod")
                .long("mod")
                .value_name("modulus")
                .help("Reduce the result of `pow` modulo this integer")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::with_name("digits")
                .long("digits")
                .value_name("count")
                .help("Number of digits of a `random` integer")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(is_integer::<i64>),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("seed")
                .help("Seed for `random`, for reproducible output")
                .takes_value(true)
                .validator(is_integer::<u64>),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("explain")
                .value_name("code")
                .help("Provide a detailed explanation for an error code.")
                .takes_value(true),
        );
    let matches = parser(matches)?;

    Ok(Opts {
        operation: matches.value_of("operation").map(str::to_owned),
        operands: matches
            .values_of("operands")
            .map(|operands| operands.map(str::to_owned).collect())
            .unwrap_or_default(),
        modulus: matches.value_of("mod").map(str::to_owned),
        digits: matches.value_of("digits").and_then(|d| d.parse().ok()),
        seed: matches.value_of("seed").and_then(|s| s.parse().ok()),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        color,
    })
}

/// Output of a decint execution.
#[derive(Default)]
pub struct DecintResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// The operands and flag values of a run laid out on one line, which diagnostics point into.
///
/// For `decint pow --mod 0 -- 2 10` the line is `2 10 --mod 0`.
struct Invocation {
    line: String,
    operands: Vec<Span>,
    modulus: Option<Span>,
    digits: Option<Span>,
}

impl Invocation {
    fn new(opts: &Opts) -> Self {
        let mut invocation = Self {
            line: String::new(),
            operands: Vec::with_capacity(opts.operands.len()),
            modulus: None,
            digits: None,
        };
        for operand in opts.operands.iter() {
            let span = invocation.push("", operand);
            invocation.operands.push(span);
        }
        if let Some(modulus) = &opts.modulus {
            invocation.modulus = Some(invocation.push("--mod ", modulus));
        }
        if let Some(digits) = opts.digits {
            invocation.digits = Some(invocation.push("--digits ", &digits.to_string()));
        }
        invocation
    }

    /// Appends `flag` and `value`, returning the span of `value`.
    fn push(&mut self, flag: &str, value: &str) -> Span {
        if !self.line.is_empty() {
            self.line.push(' ');
        }
        self.line.push_str(flag);
        let lo = self.line.len();
        self.line.push_str(value);
        Span::from(lo..self.line.len())
    }

    fn span_of(&self, blame: Blame) -> Span {
        let whole = match (self.operands.first(), self.operands.last()) {
            (Some(first), Some(last)) => Span::from(first.lo..last.hi),
            _ => Span::from(0..self.line.len()),
        };
        match blame {
            Blame::Operand(i) => self.operands.get(i).copied().unwrap_or(whole),
            Blame::Operands => whole,
            Blame::Modulus => self.modulus.unwrap_or(whole),
            Blame::Digits => self.digits.unwrap_or(whole),
        }
    }
}

/// Builds a [DecintResult](self::DecintResult).
struct DecintResultBuilder {
    /// Operand line sanitized for diagnostic emission.
    sanitized_source: String,
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
}

impl DecintResultBuilder {
    fn new(source: &str, color: bool) -> Self {
        Self {
            sanitized_source: sanitize_source_for_diagnostics(source),
            color,
            page: false,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn emit(&mut self, result: &str) {
        self.stdout.push_str(result);
    }

    fn err(&mut self, diagnostics: &[Diagnostic]) {
        self.stderr.push_str(&emit_decint_diagnostics(
            &self.sanitized_source,
            diagnostics,
            self.color,
        ));
    }

    fn usage_err(&mut self, msg: &str) {
        self.stderr.push_str(&emit_usage_error(msg, self.color));
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn ok(self) -> DecintResult {
        DecintResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn failed(self) -> DecintResult {
        DecintResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }
}

/// Parses `literal`, locating a failure at `span` of the operand line.
fn parse_operand(literal: &str, span: Span) -> Result<BigInt, Diagnostic> {
    BigInt::new(literal).map_err(|error| {
        let span = match &error {
            ArithmeticError::InvalidLiteral { span: at, .. } => at.shift(span.lo),
            _ => span,
        };
        Diagnostic { error, span }
    })
}

/// Runs decint end-to-end.
pub fn run_decint(opts: Opts) -> DecintResult {
    let invocation = Invocation::new(&opts);
    let mut result = DecintResultBuilder::new(&invocation.line, opts.color);

    if let Some(code) = opts.explain_diagnostic {
        return match ArithmeticError::explain(&code) {
            Some(explanation) => {
                result.emit(explanation);
                result.page(true);
                result.ok()
            }
            None => {
                result.usage_err(&format!("{} is not an error code", code));
                result.failed()
            }
        };
    }

    let operation = match opts.operation.as_deref().map(Operation::from_str) {
        Some(Ok(operation)) => operation,
        Some(Err(msg)) => {
            result.usage_err(&msg);
            return result.failed();
        }
        None => {
            result.usage_err("no operation given");
            return result.failed();
        }
    };

    if let Some(msg) = check_usage(operation, &opts) {
        result.usage_err(&msg);
        return result.failed();
    }

    let mut diagnostics = Vec::new();
    let mut operands = Vec::with_capacity(opts.operands.len());
    for (literal, span) in opts.operands.iter().zip(invocation.operands.iter()) {
        match parse_operand(literal, *span) {
            Ok(operand) => operands.push(operand),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }
    let modulus = match (&opts.modulus, invocation.modulus) {
        (Some(literal), Some(span)) => match parse_operand(literal, span) {
            Ok(modulus) => Some(modulus),
            Err(diagnostic) => {
                diagnostics.push(diagnostic);
                None
            }
        },
        _ => None,
    };
    if !diagnostics.is_empty() {
        result.err(&diagnostics);
        return result.failed();
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    debug!(
        "evaluating `{}` on {} operands",
        operation.name(),
        operands.len()
    );
    match operation.eval(&operands, modulus.as_ref(), opts.digits, &mut rng) {
        Ok(output) => {
            result.emit(&output);
            result.ok()
        }
        Err(error) => {
            let span = invocation.span_of(operation.blame(&error, &operands));
            result.err(&[Diagnostic { error, span }]);
            result.failed()
        }
    }
}

/// Largest `--digits` accepted for `random`.
pub const MAX_DIGITS_FLAG: i64 = 10_000_000;

/// Checks that the operands and flags fit `operation`, describing the problem if they don't.
fn check_usage(operation: Operation, opts: &Opts) -> Option<String> {
    let arity = operation.arity();
    if opts.operands.len() != arity {
        return Some(format!(
            "`{}` takes {} operand{}, but {} {} given",
            operation.name(),
            arity,
            if arity == 1 { "" } else { "s" },
            opts.operands.len(),
            if opts.operands.len() == 1 {
                "was"
            } else {
                "were"
            },
        ));
    }
    if opts.modulus.is_some() && operation != Operation::Pow {
        return Some(format!("`--mod` does not apply to `{}`", operation.name()));
    }
    if operation != Operation::Random {
        if opts.digits.is_some() {
            return Some(format!("`--digits` does not apply to `{}`", operation.name()));
        }
        if opts.seed.is_some() {
            return Some(format!("`--seed` does not apply to `{}`", operation.name()));
        }
    }
    match opts.digits {
        Some(digits) if digits > MAX_DIGITS_FLAG => Some(format!(
            "`--digits` is at most {}, but {} was given",
            MAX_DIGITS_FLAG, digits
        )),
        _ => None,
    }
}
