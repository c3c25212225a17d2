use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to check.
/// - `expected`: The token that must come next.
/// - `what`: Human-readable description used in the error message.
///
/// # Returns
/// The line number of the consumed token.
///
/// # Errors
/// - `ParseError::UnexpectedToken` if a different token is found.
/// - `ParseError::UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    what: &str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: what.to_string(),
                                                               found:    tok.describe(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Gets the line number of the next token without consuming it.
pub(in crate::interpreter::parser) fn current_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, line)| *line)
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call argument lists and
/// parameter lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either a comma to continue the list or the given closing token
/// to end it. An immediately encountered closing token produces an empty
/// list. The closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]` or `)`).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { expected: format!("',' or {}",
                                                                           closing.describe()),
                                                         found:    tok.describe(),
                                                         line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name with its line.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), line)) => Ok((s.clone(), *line)),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected:
                                                                   "an identifier".to_string(),
                                                               found:    tok.describe(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an optional `: type` annotation and returns the type name.
///
/// Type names are ordinary identifiers; the annotation is carried in the AST
/// and ignored by the evaluator. Returns `None` without consuming anything
/// when no colon is present.
///
/// # Errors
/// Returns a `ParseError` when a colon is not followed by an identifier.
pub(in crate::interpreter::parser) fn parse_type_annotation<'a, I>(tokens: &mut Peekable<I>)
                                                                   -> ParseResult<Option<String>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Colon, _)) = tokens.peek() {
        tokens.next();
        let (name, _) = parse_identifier(tokens)?;
        return Ok(Some(name));
    }
    Ok(None)
}
