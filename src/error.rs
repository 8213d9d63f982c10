/// Scanner errors.
///
/// Raised when the one-token push-back contract of the scanner is violated.
/// Malformed characters are not scan errors; they end the token stream and
/// surface later as syntax errors.
pub mod scan_error;
/// Syntax errors.
///
/// Defines every way the token stream can fail to match the grammar: a
/// missing `)`, a factor position holding something other than a number or
/// `(`, and input left over after a complete expression.
pub mod syntax_error;

pub use scan_error::ScanError;
pub use syntax_error::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure that aborts turning source text into an AST.
///
/// Every error is fatal to the single evaluation attempt; the caller decides
/// what to do with the process.
pub enum ParseError {
    /// The scanner was driven outside its contract.
    Scan(ScanError),
    /// The token stream does not match the grammar.
    Syntax(SyntaxError),
}

impl From<ScanError> for ParseError {
    fn from(error: ScanError) -> Self {
        Self::Scan(error)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Syntax(e) => Some(e),
        }
    }
}
