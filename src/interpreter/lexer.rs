use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`. A numeric literal is a
    /// float if and only if it contains a decimal point.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_int)]
    Int(i64),
    /// Double-quoted string literal tokens, with `\n`, `\t`, `\\` and `\"`
    /// escapes.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `var`
    #[token("var")]
    Var,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `while`
    #[token("while")]
    While,
    /// `return`
    #[token("return")]
    Return,
    /// `otherwise`
    #[token("otherwise")]
    Otherwise,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens; names such as `x`, `fatorial`, or `μ`. The Greek
    /// letters μ, σ and Σ are ordinary identifier characters.
    #[regex(r"[A-Za-z_μσΣ][A-Za-z0-9_μσΣ]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `**`
    #[token("**")]
    StarStar,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `..`
    #[token("..")]
    DotDot,
    /// `=>`
    #[token("=>")]
    FatArrow,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `?`
    #[token("?")]
    Question,

    /// Newlines advance the line counter and are otherwise discarded.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl Token {
    /// Describes the token the way it appears in source, for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Float(v) => format!("number '{v}'"),
            Self::Int(v) => format!("number '{v}'"),
            Self::Str(_) => "string literal".to_string(),
            Self::Bool(v) => format!("'{v}'"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Var => "'var'".to_string(),
            Self::For => "'for'".to_string(),
            Self::In => "'in'".to_string(),
            Self::While => "'while'".to_string(),
            Self::Return => "'return'".to_string(),
            Self::Otherwise => "'otherwise'".to_string(),
            Self::And => "'and'".to_string(),
            Self::Or => "'or'".to_string(),
            Self::Not => "'not'".to_string(),
            Self::StarStar => "'**'".to_string(),
            Self::EqualEqual => "'=='".to_string(),
            Self::BangEqual => "'!='".to_string(),
            Self::LessEqual => "'<='".to_string(),
            Self::GreaterEqual => "'>='".to_string(),
            Self::DotDot => "'..'".to_string(),
            Self::FatArrow => "'=>'".to_string(),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::Percent => "'%'".to_string(),
            Self::Less => "'<'".to_string(),
            Self::Greater => "'>'".to_string(),
            Self::Equals => "'='".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::LBrace => "'{'".to_string(),
            Self::RBrace => "'}'".to_string(),
            Self::LBracket => "'['".to_string(),
            Self::RBracket => "']'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Semicolon => "';'".to_string(),
            Self::Colon => "':'".to_string(),
            Self::Question => "'?'".to_string(),
            Self::Comment | Self::NewLine | Self::Ignored => "whitespace".to_string(),
        }
    }
}

/// Tokenizes an entire source text into `(token, line)` pairs.
///
/// Whitespace and `//` line comments are discarded. The returned sequence
/// ends at the end of input; there is no explicit EOF marker.
///
/// # Errors
/// - `LexError::UnterminatedString` when a `"` is never closed.
/// - `LexError::UnexpectedCharacter` for any character outside the language.
///
/// # Example
/// ```
/// use shark::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("var x = 1;").unwrap();
/// assert_eq!(tokens[0], (Token::Var, 1));
/// assert_eq!(tokens[2], (Token::Equals, 1));
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => {
                let slice = lexer.slice();
                let line = lexer.extras.line;
                return Err(if slice.starts_with('"') {
                               LexError::UnterminatedString { line }
                           } else {
                               LexError::UnexpectedCharacter { found: slice.chars()
                                                                           .next()
                                                                           .unwrap_or('\u{fffd}'),
                                                               line }
                           });
            },
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_int(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Resolves the escape sequences of a quoted string slice.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let raw = lex.slice();
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                // Unknown escapes keep the escaped character verbatim.
                Some(other) => out.push(other),
                None => return None,
            }
        } else {
            out.push(c);
        }
    }

    Some(out)
}
