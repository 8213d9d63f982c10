use tracing::debug;

use crate::{
    ast::Expr,
    error::{ParseError, SyntaxError},
    interpreter::{parser::binary::parse_expression, scanner::Scanner},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting accepted before parsing gives up.
///
/// Each group costs a few native stack frames; past this the input is
/// rejected with `SyntaxError::NestingTooDeep` instead.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete input.
///
/// This is the entry point for parsing. It parses one `Expression` and then
/// requires that nothing but whitespace remains in the scanner.
///
/// Grammar: `input := expression <end>`
///
/// # Parameters
/// - `scanner`: Scanner positioned at the start of the source.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - `SyntaxError::UnexpectedTrailingInput` if text follows the expression.
/// - `SyntaxError::NestingTooDeep` past [`MAX_NESTING_DEPTH`] parentheses.
/// - Propagates any errors from the grammar rules.
///
/// # Example
/// ```
/// use calc::interpreter::{parser::core::parse, scanner::Scanner};
///
/// let mut scanner = Scanner::new("(2 + 3) * 4");
/// let expr = parse(&mut scanner).unwrap();
///
/// assert_eq!(expr.to_string(), "((2 + 3) * 4)");
/// ```
pub fn parse(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(scanner, 0)?;

    if !scanner.is_exhausted() {
        return Err(SyntaxError::UnexpectedTrailingInput { input:  scanner.remainder()
                                                                         .to_string(),
                                                          offset: scanner.remainder_offset(), }.into());
    }

    debug!(%expr, "parse result");
    Ok(expr)
}
