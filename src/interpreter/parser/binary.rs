use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Operator, Token},
        parser::{core::ParseResult, factor::parse_factor},
        scanner::Scanner,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative operators `+` and `-`, so `8 - 3 - 2`
/// becomes `(8 - 3) - 2`. The first token that is neither is pushed back.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `scanner`: Token source.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_expression(scanner: &mut Scanner<'_>, depth: usize) -> ParseResult<Expr> {
    let mut left = parse_term(scanner, depth)?;
    loop {
        if let Token::Operator(op) = scanner.next_token()
           && let Some(op) = operator_to_binary_operator(op)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let right = parse_term(scanner, depth)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    scanner.push_back()?;
    debug!(%left, "expression result");
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative operators `*` and `/`. Because
/// [`parse_expression`] only ever sees whole terms, these bind tighter than
/// `+` and `-`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `scanner`: Token source.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term(scanner: &mut Scanner<'_>, depth: usize) -> ParseResult<Expr> {
    let mut left = parse_factor(scanner, depth)?;
    loop {
        if let Token::Operator(op) = scanner.next_token()
           && let Some(op) = operator_to_binary_operator(op)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let right = parse_factor(scanner, depth)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    scanner.push_back()?;
    debug!(%left, "term result");
    Ok(left)
}

/// Maps an operator token to its corresponding binary operator.
///
/// Returns `None` for the parentheses, which group but do not compute.
///
/// # Example
/// ```
/// use calc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Operator, parser::binary::operator_to_binary_operator},
/// };
///
/// assert_eq!(operator_to_binary_operator(Operator::Add),
///            Some(BinaryOperator::Add));
/// assert_eq!(operator_to_binary_operator(Operator::LeftParen), None);
/// ```
#[must_use]
pub const fn operator_to_binary_operator(op: Operator) -> Option<BinaryOperator> {
    match op {
        Operator::Add => Some(BinaryOperator::Add),
        Operator::Sub => Some(BinaryOperator::Sub),
        Operator::Mul => Some(BinaryOperator::Mul),
        Operator::Div => Some(BinaryOperator::Div),
        Operator::LeftParen | Operator::RightParen => None,
    }
}
