use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while matching the token stream
/// against the grammar.
pub enum ParseError {
    /// The lookahead token did not have the kind the grammar required.
    ///
    /// This single variant covers every way a line can fail to parse: a
    /// first token that is not an integer, an operator with no integer after
    /// it, and trailing input where the end of the line was expected.
    UnexpectedToken {
        /// The kind the grammar required at this point.
        expected: TokenKind,
        /// The kind that was actually found.
        found:    TokenKind,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { .. } => write!(f, "Error parsing input"),
        }
    }
}

impl std::error::Error for ParseError {}
