use logos::Logos;

/// A raw lexeme matched by the pattern table.
///
/// This is the character-level view of the input. Spaces, tabs, newlines
/// and feeds are skipped. The scanner wraps each lexeme into a [`Token`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Lexeme {
    /// Numeric literals such as `3`, `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_float)]
    #[regex(r"\.[0-9]+", parse_float)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// The operator tags a [`Token`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::LeftParen => "(",
            Self::RightParen => ")",
        };
        write!(f, "'{symbol}'")
    }
}

/// A token handed from the scanner to the parser.
///
/// Tokens are immutable values; `EndOfInput` is produced both at the real end
/// of the text and wherever no pattern matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A floating-point literal.
    Number(f64),
    /// One of the six single-character operators.
    Operator(Operator),
    /// Nothing more could be scanned.
    EndOfInput,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(value) => Self::Number(value),
            Lexeme::Plus => Self::Operator(Operator::Add),
            Lexeme::Minus => Self::Operator(Operator::Sub),
            Lexeme::Star => Self::Operator(Operator::Mul),
            Lexeme::Slash => Self::Operator(Operator::Div),
            Lexeme::LParen => Self::Operator(Operator::LeftParen),
            Lexeme::RParen => Self::Operator(Operator::RightParen),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}
