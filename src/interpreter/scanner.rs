use logos::Logos;
use tracing::debug;

use crate::{
    error::ScanError,
    interpreter::lexer::{Lexeme, Token},
};

/// Pull-based tokenizer over a single expression.
///
/// The scanner owns nothing but a cursor into the source text and the offset
/// at which the most recent token began. That one offset is the whole
/// history, so at most one token can be pushed back between two calls to
/// [`Scanner::next_token`].
///
/// ## Example
/// ```
/// use calc::interpreter::{
///     lexer::{Operator, Token},
///     scanner::Scanner,
/// };
///
/// let mut scanner = Scanner::new("2 * 4");
///
/// assert_eq!(scanner.next_token(), Token::Number(2.0));
/// assert_eq!(scanner.next_token(), Token::Operator(Operator::Mul));
/// scanner.push_back().unwrap();
/// assert_eq!(scanner.next_token(), Token::Operator(Operator::Mul));
/// assert_eq!(scanner.next_token(), Token::Number(4.0));
/// assert_eq!(scanner.next_token(), Token::EndOfInput);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    /// The whole expression; never modified.
    source:   &'src str,
    /// Byte offset of the next unconsumed character.
    cursor:   usize,
    /// Cursor position before the last token, if it may still be pushed back.
    previous: Option<usize>,
    /// Whether any token has been produced yet.
    started:  bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source,
               cursor: 0,
               previous: None,
               started: false }
    }

    /// Produces the next token and advances past it.
    ///
    /// Leading whitespace is skipped. When the text at the cursor matches
    /// neither a number nor an operator, `EndOfInput` is returned and the
    /// cursor stays put, so repeated calls keep returning `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        self.previous = Some(self.cursor);
        self.started = true;

        let rest = &self.source[self.cursor..];
        let mut lexer = Lexeme::lexer(rest);

        match lexer.next() {
            Some(Ok(lexeme)) => {
                let span = lexer.span();
                debug!(lexeme = lexer.slice(), offset = self.cursor + span.start, "matched");
                self.cursor += span.end;
                Token::from(lexeme)
            },
            Some(Err(())) => {
                debug!(offset = self.cursor, rest, "no pattern matched");
                Token::EndOfInput
            },
            None => Token::EndOfInput,
        }
    }

    /// Rewinds the cursor to where it was before the last token.
    ///
    /// # Errors
    /// - `ScanError::NothingToPushBack` if no token has been produced yet.
    /// - `ScanError::DoublePushBack` if the last call was also a push-back.
    pub fn push_back(&mut self) -> Result<(), ScanError> {
        match self.previous.take() {
            Some(previous) => {
                debug!(from = self.cursor, to = previous, "push back");
                self.cursor = previous;
                Ok(())
            },
            None if self.started => Err(ScanError::DoublePushBack { offset: self.cursor }),
            None => Err(ScanError::NothingToPushBack),
        }
    }

    /// Byte offset at which the most recently produced token starts.
    ///
    /// Whitespace before the token is not counted as part of it.
    #[must_use]
    pub fn token_start(&self) -> usize {
        let start = self.previous.unwrap_or(self.cursor);
        self.source.len() - skip_blank(&self.source[start..]).len()
    }

    /// The unconsumed text, without leading whitespace.
    #[must_use]
    pub fn remainder(&self) -> &'src str {
        skip_blank(&self.source[self.cursor..])
    }

    /// Byte offset where [`Scanner::remainder`] begins.
    #[must_use]
    pub fn remainder_offset(&self) -> usize {
        self.source.len() - self.remainder().len()
    }

    /// Whether nothing but whitespace is left to scan.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remainder().is_empty()
    }
}

/// Drops the leading characters the lexer treats as whitespace.
fn skip_blank(text: &str) -> &str {
    text.trim_start_matches([' ', '\t', '\r', '\n', '\x0C'])
}
