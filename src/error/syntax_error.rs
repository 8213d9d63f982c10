#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all ways a token stream can fail to match the grammar.
pub enum SyntaxError {
    /// A parenthesized expression was not closed with `)`.
    MissingClosingParen {
        /// Byte offset where `)` was expected.
        offset: usize,
    },
    /// A factor position held neither a number nor `(`.
    ExpectedNumberOrParen {
        /// Description of what was found instead.
        found:  String,
        /// Byte offset of the offending token.
        offset: usize,
    },
    /// Parentheses were nested deeper than the parser accepts.
    NestingTooDeep {
        /// The deepest nesting allowed.
        limit:  usize,
        /// Byte offset of the `(` that went over the limit.
        offset: usize,
    },
    /// A complete expression was followed by more text.
    UnexpectedTrailingInput {
        /// The unconsumed text.
        input:  String,
        /// Byte offset where the leftover text begins.
        offset: usize,
    },
}

impl SyntaxError {
    /// Gets the byte offset at which the error was detected.
    /// ## Example
    /// ```
    /// use calc::error::SyntaxError;
    ///
    /// let error = SyntaxError::MissingClosingParen { offset: 6 };
    ///
    /// assert_eq!(error.offset(), 6);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::MissingClosingParen { offset }
            | Self::ExpectedNumberOrParen { offset, .. }
            | Self::NestingTooDeep { offset, .. }
            | Self::UnexpectedTrailingInput { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingClosingParen { offset } => {
                write!(f, "Syntax error at offset {offset}: missing closing parenthesis ')'.")
            },
            Self::ExpectedNumberOrParen { found, offset } => write!(f,
                                                                    "Syntax error at offset {offset}: expected number or '(' but found {found}."),
            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Syntax error at offset {offset}: parentheses nested deeper than {limit} levels."),
            Self::UnexpectedTrailingInput { input, offset } => write!(f,
                                                                      "Syntax error at offset {offset}: unexpected input after expression: {input}"),
        }
    }
}

impl std::error::Error for SyntaxError {}
