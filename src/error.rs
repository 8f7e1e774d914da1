/// Lexical errors.
///
/// Defines all error types that can occur while breaking a line of input
/// into tokens, such as unrecognized characters or integer literals that do
/// not fit the native integer size.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching the token stream
/// against the grammar: a line that does not start with an integer, a
/// missing operand, or trailing input after a well-formed expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while applying operators to
/// their operands, such as division by zero or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents any failure the interpreter can surface for a line of input.
///
/// Each variant wraps the error type of one interpretation phase. All three
/// are unrecoverable for the current line: evaluation aborts immediately and
/// no partial result is returned. Whether the host loop continues with the
/// next line or terminates is its own decision.
pub enum Error {
    /// The line contained text the lexer does not recognize.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Parse(ParseError),
    /// Parsing succeeded but an operator application failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
