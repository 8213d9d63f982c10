//! # calc
//!
//! calc is a four-function arithmetic calculator written in Rust.
//! It scans, parses, and evaluates a single expression made of floating-point
//! literals, `+ - * /` and parentheses, honoring the usual precedence and
//! left-associativity.

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

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{evaluator::evaluate, parser::core::parse, scanner::Scanner},
    util::num::format_general,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` it carries.
/// The AST is built by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Models literals and binary operations as a closed sum type.
/// - Renders trees fully parenthesized for debugging and tests.
pub mod ast;
/// Provides the error types for scanning and parsing.
///
/// Every failure that can stop an evaluation is defined here, together with
/// the byte offset at which it was detected.
///
/// # Responsibilities
/// - Defines `ScanError`, `SyntaxError` and the `ParseError` wrapping both.
/// - Implements `Display` and `std::error::Error` for user-facing messages.
pub mod error;
/// Orchestrates turning text into a number.
///
/// This module ties together the lexer, scanner, parser and evaluator.
///
/// # Responsibilities
/// - Tokenizes the input on demand.
/// - Builds the AST through recursive descent.
/// - Reduces the AST to a floating-point result.
pub mod interpreter;
/// General utilities for presenting results.
pub mod util;

/// An evaluated expression paired with the text it came from.
///
/// Displays as `<expression> = <value>`, with the value printed like
/// `%g`.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// The source text, as given.
    pub expression: String,
    /// The evaluated result.
    pub value:      f64,
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, format_general(self.value))
    }
}

/// Parses source text into an expression tree.
///
/// # Errors
/// Returns the first scan or syntax error encountered.
///
/// # Examples
/// ```
/// use calc::parse_source;
///
/// let expr = parse_source("8 - 3 - 2").unwrap();
/// assert_eq!(expr.to_string(), "((8 - 3) - 2)");
///
/// assert!(parse_source("(1 + 2").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Expr, ParseError> {
    let mut scanner = Scanner::new(source);
    parse(&mut scanner)
}

/// Parses and evaluates source text.
///
/// # Errors
/// Returns an error if the text is not a well-formed expression. Evaluation
/// itself never fails.
///
/// # Examples
/// ```
/// use calc::evaluate_source;
///
/// assert_eq!(evaluate_source("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_source("(2 + 3) * 4").unwrap(), 20.0);
/// assert!(evaluate_source("* 3").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<f64, ParseError> {
    let expr = parse_source(source)?;
    let value = evaluate(&expr);
    debug!(source, value, "evaluated");
    Ok(value)
}

/// Evaluates source text and keeps the text alongside the result.
///
/// # Errors
/// Returns an error if the text is not a well-formed expression.
///
/// # Examples
/// ```
/// use calc::calculate;
///
/// let calculation = calculate("1 / 4").unwrap();
/// assert_eq!(calculation.value, 0.25);
/// assert_eq!(calculation.to_string(), "1 / 4 = 0.25");
/// ```
pub fn calculate(source: &str) -> Result<Calculation, ParseError> {
    let value = evaluate_source(source)?;
    Ok(Calculation { expression: source.to_string(),
                     value })
}
