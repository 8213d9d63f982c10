/// Entry point and shared parser types.
///
/// Declares `ParseResult` and the top-level `parse` rule, which parses one
/// expression and rejects anything left over.
pub mod core;

/// Binary operator levels of the grammar.
///
/// Implements `Expression` (`+`, `-`) and `Term` (`*`, `/`) as
/// left-associative folds. Precedence comes from which level calls which.
pub mod binary;

/// Factor parsing.
///
/// Handles the atoms of the grammar: numeric literals and parenthesized
/// sub-expressions.
pub mod factor;
