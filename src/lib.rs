//! # exprcalc
//!
//! exprcalc evaluates a single line of integer arithmetic. It supports the
//! four basic operators `+ - * /` with standard precedence and
//! left-to-right associativity, and parentheses for grouping to arbitrary
//! nesting depth.
//!
//! The expression is evaluated while it is parsed: the recursive-descent
//! productions fold each operand into a running value as soon as it is
//! available, so no syntax tree and no token list are ever built.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalError, interpreter::evaluator::Evaluator};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or computing an expression. Every error carries the byte offset of the
/// offending input so the driver can point at the exact character that
/// caused the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Unifies both phases behind [`EvalError`] so the single-pass pipeline
///   can propagate either kind through one result type.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the lexing and evaluation of an expression.
///
/// This module ties together the lexer and the combined parser/evaluator.
/// Because evaluation happens during parsing, there is no separate analysis
/// or execution phase: one pass over the input produces the final value or
/// the first error.
///
/// # Responsibilities
/// - Declares the lexer and the parser/evaluator.
/// - Manages the flow of tokens between the two on demand.
pub mod interpreter;

/// Evaluates one arithmetic expression and returns its integer value.
///
/// This is the public entry point of the crate. It constructs a fresh
/// [`Evaluator`] over the input, so concurrent evaluations of independent
/// expressions never interfere with each other.
///
/// Division truncates toward zero, matching Rust's integer division. The
/// whole input must be consumed: any non-whitespace content after a
/// complete expression is an error rather than being silently ignored.
///
/// # Errors
/// Returns an [`EvalError`] if the input fails to parse (an invalid factor,
/// a missing closing parenthesis, trailing input) or fails to compute
/// (division by zero).
///
/// # Examples
/// ```
/// use exprcalc::evaluate;
///
/// assert_eq!(evaluate("3 + 4 * 2").unwrap(), 11);
/// assert_eq!(evaluate("(3 + 4) * 2").unwrap(), 14);
///
/// // Dividing by zero is reported rather than computed.
/// assert!(evaluate("10 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, EvalError> {
    Evaluator::new(source).evaluate()
}
