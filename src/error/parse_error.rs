#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token that does not fit the grammar at the current position.
    UnexpectedToken {
        /// A description of what the parser was looking for.
        expected: String,
        /// A description of the token that was actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "ParseError: expected {expected}, found {found} (line {line})")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "ParseError: unexpected end of input (line {line})")
            },
        }
    }
}

impl std::error::Error for ParseError {}
