use std::mem;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Error`] describing which phase failed and why.
pub type EvalResult<T> = Result<T, Error>;

/// Represents a binary operator.
///
/// All four operators bind equally tightly and associate to the left; there
/// is no precedence hierarchy in this language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// The token kind this operator is written as.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Multiply,
            Self::Div => TokenKind::Divide,
        }
    }

    /// Applies the operator to two integer operands.
    ///
    /// Division truncates toward zero with native `i64` semantics. All four
    /// operations are checked, so a result outside the `i64` range is
    /// reported instead of wrapping.
    ///
    /// # Parameters
    /// - `left`: The running result accumulated so far.
    /// - `right`: The factor to fold in.
    ///
    /// # Returns
    /// The new running result.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero`: If this is `Div` and `right` is
    ///   zero.
    /// - `RuntimeError::Overflow`: If the result does not fit in an `i64`
    ///   (including `i64::MIN / -1`).
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::evaluator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.apply(10, 3).unwrap(), 3);
    /// assert!(BinaryOperator::Div.apply(1, 0).is_err());
    /// ```
    pub fn apply(self, left: i64, right: i64) -> Result<i64, RuntimeError> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the kind represents one of the four
/// operator characters, and `None` for all other kinds.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     evaluator::{BinaryOperator, token_to_binary_operator},
///     lexer::TokenKind,
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::EndOfInput), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Integer | TokenKind::EndOfInput => None,
    }
}

/// Evaluates one line of input with a fused parse-and-reduce loop.
///
/// An `Evaluator` owns the line's [`Lexer`] and a single token of lookahead.
/// It never builds a syntax tree: each operator application is folded into
/// the running result as soon as both of its operands are known, in source
/// order. Created per input line and discarded after producing a result or
/// failing.
pub struct Evaluator<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator over one line of input and pulls the first
    /// token of lookahead.
    ///
    /// # Errors
    /// Returns a lexical error if the line starts with an unrecognized
    /// character or an overlong integer literal.
    pub fn new(line: &'src str) -> EvalResult<Self> {
        let mut lexer = Lexer::new(line);
        let current = lexer.next_token()?;

        Ok(Self { lexer, current })
    }

    /// Consumes the lookahead token after verifying its kind.
    ///
    /// This is the sole point where grammar conformance is checked: if the
    /// lookahead has the expected kind it is replaced with the next token
    /// from the lexer and the consumed token is returned, otherwise the line
    /// fails with a [`ParseError`].
    fn eat(&mut self, expected: TokenKind) -> EvalResult<Token> {
        if self.current.kind() == expected {
            let next = self.lexer.next_token()?;
            Ok(mem::replace(&mut self.current, next))
        } else {
            Err(Error::Parse(ParseError::UnexpectedToken { expected,
                                                           found: self.current.kind(), }))
        }
    }

    /// Consumes one integer factor and returns its value.
    ///
    /// Grammar: `factor := INTEGER`
    fn factor(&mut self) -> EvalResult<i64> {
        match self.eat(TokenKind::Integer)? {
            Token::Integer(value) => Ok(value),
            _ => unreachable!(),
        }
    }

    /// Parses and evaluates the whole line.
    ///
    /// Grammar: `expr := factor (op factor)* EndOfInput`
    ///
    /// The line must start with an integer, which initializes the running
    /// result. Each following operator is consumed together with the integer
    /// after it and applied immediately, strictly left to right. The final
    /// `eat` of the end-of-input token is what rejects trailing input after
    /// a well-formed prefix.
    ///
    /// # Errors
    /// - [`ParseError`]: If the token stream does not match the grammar.
    /// - [`crate::error::LexError`]: If the lexer fails while the lookahead
    ///   advances.
    /// - [`RuntimeError`]: If an operator application fails.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::evaluator::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new("10/2/5").unwrap();
    /// assert_eq!(evaluator.expr().unwrap(), 1);
    /// ```
    pub fn expr(&mut self) -> EvalResult<i64> {
        let mut result = self.factor()?;

        while let Some(op) = token_to_binary_operator(self.current.kind()) {
            self.eat(op.token_kind())?;
            let right = self.factor()?;
            result = op.apply(result, right)?;
        }

        self.eat(TokenKind::EndOfInput)?;

        Ok(result)
    }
}
