#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A string literal was opened but never closed before the end of the
    /// line or input.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character that does not belong to any token was encountered.
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "LexError: unterminated string literal (line {line})")
            },
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "LexError: unexpected character '{found}' (line {line})")
            },
        }
    }
}

impl std::error::Error for LexError {}
