use tracing::debug;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Operator, Token},
        parser::{
            binary::parse_expression,
            core::{MAX_NESTING_DEPTH, ParseResult},
        },
        scanner::Scanner,
    },
};

/// Parses a factor, the atom of the grammar.
///
/// Grammar:
/// ```text
///     factor := number
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `scanner`: Scanner positioned at the start of a factor.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// A literal or the expression inside the parentheses.
///
/// # Errors
/// - `SyntaxError::ExpectedNumberOrParen` for any other token, including the
///   end of input.
/// - `SyntaxError::MissingClosingParen` if a group is not closed.
/// - `SyntaxError::NestingTooDeep` if the group would exceed
///   [`MAX_NESTING_DEPTH`].
pub fn parse_factor(scanner: &mut Scanner<'_>, depth: usize) -> ParseResult<Expr> {
    match scanner.next_token() {
        Token::Operator(Operator::LeftParen) => parse_grouping(scanner, depth),
        Token::Number(value) => {
            debug!(value, "factor result (number)");
            Ok(Expr::Literal { value })
        },
        token => Err(SyntaxError::ExpectedNumberOrParen { found:  token.to_string(),
                                                          offset: scanner.token_start(), }.into()),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// The grouping produces no node of its own; the inner tree is returned as
/// is.
fn parse_grouping(scanner: &mut Scanner<'_>, depth: usize) -> ParseResult<Expr> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                 offset: scanner.token_start(), }.into());
    }

    let expr = parse_expression(scanner, depth + 1)?;
    match scanner.next_token() {
        Token::Operator(Operator::RightParen) => {
            debug!(%expr, "factor result");
            Ok(expr)
        },
        _ => Err(SyntaxError::MissingClosingParen { offset: scanner.token_start() }.into()),
    }
}
