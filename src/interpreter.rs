/// The evaluator module reduces AST nodes to numbers.
///
/// The evaluator walks a finished tree bottom-up and combines operands with
/// floating-point arithmetic. It holds no state and cannot fail.
pub mod evaluator;
/// The lexer module declares the token vocabulary.
///
/// It holds the `logos` pattern table for numbers, operators and whitespace,
/// and the `Token` values the parser consumes.
///
/// # Responsibilities
/// - Recognizes floating-point literals and the six operator characters.
/// - Skips whitespace between tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the scanner and follows a three-level grammar
/// (expression, term, factor). Operator precedence comes entirely from that
/// stratification.
///
/// # Responsibilities
/// - Converts tokens into `Expr` trees with left-associative folding.
/// - Reports the first syntax error with its byte offset.
pub mod parser;
/// The scanner module hands tokens to the parser on demand.
///
/// It tracks a cursor into the source and supports pushing back exactly one
/// token, which is all the lookahead the grammar needs.
pub mod scanner;
