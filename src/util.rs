/// Number formatting helpers.
///
/// This module renders results the way C's `%g` conversion does, which is
/// how the calculator prints `expression = value` lines.
pub mod num;
