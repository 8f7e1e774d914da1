//! # linecalc
//!
//! linecalc is an interactive command-line calculator written in Rust.
//! It reads one line of arithmetic at a time, tokenizes it, evaluates it,
//! and produces a signed 64-bit integer result.
//!
//! The defining trait of the language is that binary operators apply
//! strictly left to right: `*` and `/` bind exactly as tightly as `+` and
//! `-`, and there are no parentheses. `7-3*2` is `8`, not `1`.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::evaluator::Evaluator};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// line of input. It standardizes error reporting and carries detailed
/// information about failures, including the offending characters and their
/// positions for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Aggregates them into one crate-level [`error::Error`] type so callers
///   can propagate any phase's failure with `?`.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the interpretation of one line of input.
///
/// This module ties together the lexer and the evaluator to provide a
/// complete runtime for line evaluation. The two components are consumed in
/// order per input line: the lexer turns text into tokens on demand, and the
/// evaluator folds those tokens into a single integer result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and evaluator.
/// - Provides the entry points for tokenizing and evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one line of arithmetic input and returns the result.
///
/// This is the main entry point of the crate. A fresh lexer/evaluator pair
/// is constructed over `line`, used once, and discarded; nothing is shared
/// between calls, so evaluating the same line twice always yields the same
/// result or the same error kind.
///
/// # Errors
/// Returns an error if the line contains an unrecognized character, does not
/// match the grammar, or fails arithmetically (division by zero, overflow).
///
/// # Examples
/// ```
/// use linecalc::evaluate;
///
/// assert_eq!(evaluate("3+5").unwrap(), 8);
///
/// // Operators apply left to right, with no precedence:
/// // (7 - 3) * 2, not 7 - (3 * 2).
/// assert_eq!(evaluate("7-3*2").unwrap(), 8);
///
/// // Division by zero is an error, not a crash.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<i64, Error> {
    let mut evaluator = Evaluator::new(line)?;
    evaluator.expr()
}
