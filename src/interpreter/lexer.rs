use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in an input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. The scan consumes the maximal
    /// run of decimal digits; a leading `+` or `-` is never part of the
    /// number, it is always its own operator token.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// A line terminator. Running off the end of the text maps to the same
    /// token, so both terminal conditions look identical to the evaluator.
    #[token("\n")]
    #[token("\r\n")]
    EndOfInput,
}

/// The kind of a [`Token`], with any payload stripped.
///
/// The evaluator checks grammar conformance by comparing kinds; the value of
/// an integer token is only read once its kind has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// The end of the input line.
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(12).kind(), TokenKind::Integer);
    /// assert_eq!(Token::Plus.kind(), TokenKind::Plus);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// The scan itself guarantees the slice is a non-empty digit run, so the
/// only failure mode is a run that does not fit in an `i64`.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value.
/// - `Err(LexError::IntegerOverflow)`: If the digit run overflows.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice()
       .parse()
       .map_err(|_| LexError::IntegerOverflow { literal:  lex.slice().to_string(),
                                                position: lex.span().start, })
}

/// The pull-based tokenizer for one line of input.
///
/// A `Lexer` borrows its line for its whole lifetime and owns a cursor that
/// only ever moves forward. It is created per input line and discarded once
/// the line is fully consumed; it is not restartable mid-stream.
pub struct Lexer<'src> {
    tokens:   logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over one line of input.
    #[must_use]
    pub fn new(line: &'src str) -> Self {
        Self { tokens:   Token::lexer(line),
               finished: false, }
    }

    /// Produces the next token of the line.
    ///
    /// Whitespace between tokens is skipped transparently and produces no
    /// token. The first [`Token::EndOfInput`], whether from a line
    /// terminator or from running off the end of the text, latches the
    /// lexer, and every call after that returns [`Token::EndOfInput`] again
    /// without advancing.
    ///
    /// # Errors
    /// - [`LexError::UnrecognizedCharacter`]: For a character that matches
    ///   no token rule. The error carries the character and its byte offset.
    /// - [`LexError::IntegerOverflow`]: For a digit run that does not fit in
    ///   an `i64`.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12+7");
    ///
    /// assert_eq!(lexer.next_token().unwrap(), Token::Integer(12));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Plus);
    /// assert_eq!(lexer.next_token().unwrap(), Token::Integer(7));
    /// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
    ///
    /// // Terminal state is sticky.
    /// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.finished {
            return Ok(Token::EndOfInput);
        }

        match self.tokens.next() {
            None | Some(Ok(Token::EndOfInput)) => {
                self.finished = true;
                Ok(Token::EndOfInput)
            },
            Some(Ok(token)) => Ok(token),
            Some(Err(LexError::UnrecognizedCharacter { .. })) => {
                Err(LexError::UnrecognizedCharacter { found:    self.tokens.slice().to_string(),
                                                      position: self.tokens.span().start, })
            },
            Some(Err(error)) => Err(error),
        }
    }
}
