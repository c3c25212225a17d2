use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a unary-minus expression.
///
/// Negation binds tighter than `**`, so `-2 ** 2` is `(-2) ** 2`. Negative
/// number literals are produced here, not in the lexer.
///
/// Grammar: `unary := "-" unary | postfix`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let operand = parse_unary(tokens)?;
        return Ok(Expr::Unary { op: UnaryOperator::Negate,
                                operand: Box::new(operand),
                                line });
    }
    parse_postfix(tokens)
}

/// Parses postfix forms: calls and index accesses.
///
/// A primary expression may be followed by any number of `(args)` call
/// suffixes and `[index]` accesses, applied left to right.
///
/// Grammar: `postfix := primary ("(" expr_list ")" | "[" expression "]")*`
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::LParen, line)) => {
                let line = *line;
                tokens.next();

                let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                expr = Expr::Call { callee: Box::new(expr),
                                    args,
                                    line };
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                tokens.next();

                let index = parse_expression(tokens)?;
                expect(tokens, &Token::RBracket, "']'")?;
                expr = Expr::Index { seq: Box::new(expr),
                                     index: Box::new(index),
                                     line };
            },
            _ => break,
        }
    }

    Ok(expr)
}

/// Parses a primary expression.
///
/// Primaries are number, string and boolean literals, identifiers,
/// parenthesized expressions and array literals.
///
/// # Errors
/// Returns a `ParseError` when the next token cannot begin an expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Int(v), line)) => Ok(Expr::Literal { value: LiteralValue::Int(*v),
                                                          line:  *line, }),
        Some((Token::Float(v), line)) => Ok(Expr::Literal { value: LiteralValue::Float(*v),
                                                            line:  *line, }),
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                          line:  *line, }),
        Some((Token::Bool(b), line)) => Ok(Expr::Literal { value: LiteralValue::Bool(*b),
                                                           line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Ident { name: name.clone(),
                                                                  line: *line, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        Some((Token::LBracket, line)) => {
            let line = *line;
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::Array { elements, line })
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected:
                                                                   "an expression".to_string(),
                                                               found:    tok.describe(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
