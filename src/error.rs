/// Lexing errors.
///
/// Defines the error types that can occur while converting source text into
/// tokens: unterminated string literals and characters that belong to no
/// token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the error types that can occur while building the AST from tokens:
/// unexpected tokens and premature end of input. Every error carries the
/// source line it was raised on.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// names, type mismatches, wrong argument counts, array shape mismatches,
/// division by zero, empty reductions, bad indices and integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error a Shark program can fail with, across all pipeline stages.
///
/// The public entry points return this type so that callers can report
/// lexing, parsing and evaluation failures uniformly. Each variant renders as
/// `<ErrorKind>: <message> (line <N>)`.
#[derive(Debug, PartialEq)]
pub enum SharkError {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for SharkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SharkError {}

impl From<LexError> for SharkError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for SharkError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for SharkError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
