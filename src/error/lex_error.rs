#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// Found a character that is not a digit, an operator, whitespace, or a
    /// line terminator.
    UnrecognizedCharacter {
        /// The offending text.
        found:    String,
        /// Byte offset of the character within the line.
        position: usize,
    },
    /// A digit run does not fit in an `i64`. The literal is rejected rather
    /// than silently truncated.
    IntegerOverflow {
        /// The digit run as written.
        literal:  String,
        /// Byte offset of the literal within the line.
        position: usize,
    },
}

impl Default for LexError {
    /// The error produced when no token rule matches. The lexer fills in the
    /// offending slice and its offset before surfacing the error.
    fn default() -> Self {
        Self::UnrecognizedCharacter { found:    String::new(),
                                      position: 0, }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { .. } | Self::IntegerOverflow { .. } => {
                write!(f, "Syntax Error")
            },
        }
    }
}

impl std::error::Error for LexError {}
