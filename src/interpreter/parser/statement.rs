use std::iter::Peekable;

use crate::{
    ast::{Param, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                current_line, expect, parse_comma_separated, parse_identifier,
                parse_type_annotation,
            },
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`var x = ...;`),
/// - a conditional (`? cond { ... } otherwise { ... }`),
/// - a `while` or `for` loop,
/// - a `return` statement,
/// - a function declaration (`name(params) => ...`),
/// - an assignment (`x = ...;`),
/// - an expression used as a statement (`print(x);`).
///
/// The function-declaration and assignment forms both start with an
/// identifier; a cloned-iterator lookahead distinguishes them from plain
/// expression statements without consuming input.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Var, _)) => parse_var_decl(tokens),
        Some((Token::Question, _)) => parse_if_stmt(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::For, _)) => parse_for(tokens),
        Some((Token::Return, _)) => parse_return(tokens),
        Some((Token::Identifier(_), _)) => {
            if let Some(stmt) = parse_function_decl(tokens)? {
                return Ok(stmt);
            }
            if let Some(stmt) = parse_assignment(tokens)? {
                return Ok(stmt);
            }
            parse_expression_stmt(tokens)
        },
        _ => parse_expression_stmt(tokens),
    }
}

/// Parses a block: `{ statement* }`.
///
/// # Errors
/// Returns a `ParseError` if the braces are missing or any inner statement
/// fails to parse.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBrace, "'{'")?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: current_line(tokens) }),
        }
    }

    Ok(statements)
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `var <identifier> (":" <type>)? "=" <expr> ";"`.
/// The type annotation is kept in the AST and ignored by the evaluator.
fn parse_var_decl<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Var, "'var'")?;
    let (name, _) = parse_identifier(tokens)?;
    let declared_type = parse_type_annotation(tokens)?;

    expect(tokens, &Token::Equals, "'='")?;
    let init = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';'")?;

    Ok(Stmt::VarDecl { name,
                       declared_type,
                       init,
                       line })
}

/// Parses an assignment statement: `<identifier> "=" <expr> ";"`.
///
/// The function performs a limited lookahead: only when the token after the
/// identifier is `=` is an assignment parsed. Otherwise nothing is consumed
/// and `Ok(None)` is returned so the caller can fall back to an expression
/// statement.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    let (name, line) = parse_identifier(tokens)?;
    tokens.next(); // consume '='

    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';'")?;

    Ok(Some(Stmt::Assign { name, value, line }))
}

/// Parses a function declaration of the form
/// `<name> "(" params ")" (":" <type>)? "=>" <body>`.
///
/// This function identifies a declaration by checking, on a cloned
/// iterator:
/// 1. The next token is an identifier immediately followed by `(`.
/// 2. A matching `)` exists (nested parentheses are allowed).
/// 3. The token after the closing `)` is `=>`, or `:` followed by a type
///    name and then `=>`.
///
/// Only when all three hold does parsing commit; an expression call at
/// statement position (`print(x);`) fails step 3 and is left untouched.
///
/// The body is either a block, or a single expression terminated by `;`
/// which desugars to `{ return <expr>; }`.
///
/// # Returns
/// - `Ok(Some(Stmt::FunctionDecl))` if a declaration is parsed,
/// - `Ok(None)` if no declaration is present (nothing consumed).
fn parse_function_decl<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let start_line = current_line(tokens);

    let mut lookahead = tokens.clone();
    lookahead.next(); // the identifier
    if !matches!(lookahead.peek(), Some((Token::LParen, _))) {
        return Ok(None);
    }
    lookahead.next();

    let mut parens = 1;
    while parens > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => parens += 1,
            Some((Token::RParen, _)) => parens -= 1,
            Some(_) => {},
            None => return Err(ParseError::UnexpectedEndOfInput { line: start_line }),
        }
    }

    let commits = match lookahead.peek() {
        Some((Token::FatArrow, _)) => true,
        Some((Token::Colon, _)) => {
            lookahead.next();
            matches!(lookahead.next(), Some((Token::Identifier(_), _)))
            && matches!(lookahead.peek(), Some((Token::FatArrow, _)))
        },
        _ => false,
    };
    if !commits {
        return Ok(None);
    }

    let (name, line) = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_param, &Token::RParen)?;
    let return_type = parse_type_annotation(tokens)?;
    expect(tokens, &Token::FatArrow, "'=>'")?;

    let body = if matches!(tokens.peek(), Some((Token::LBrace, _))) {
        let block = parse_block(tokens)?;
        consume_optional_semicolon(tokens);
        block
    } else {
        let expr = parse_expression(tokens)?;
        let expr_line = expr.line_number();
        expect(tokens, &Token::Semicolon, "';'")?;
        vec![Stmt::Return { value: Some(expr),
                            line:  expr_line, }]
    };

    Ok(Some(Stmt::FunctionDecl { name,
                                 params,
                                 return_type,
                                 body,
                                 line }))
}

/// Parses one function parameter: `<identifier> (":" <type>)?`.
fn parse_param<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Param>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, _) = parse_identifier(tokens)?;
    let declared_type = parse_type_annotation(tokens)?;
    Ok(Param { name, declared_type })
}

/// Parses a conditional statement.
///
/// Syntax:
/// ```text
///     ? <condition> { <block> }
///     otherwise ? <condition> { <block> }
///     otherwise { <block> }
/// ```
/// There is no `elseif` keyword; chains are written `otherwise ?` and are
/// represented as a nested `If` inside the else block.
fn parse_if_stmt<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Question, "'?'")?;
    let condition = parse_expression(tokens)?;
    let then_block = parse_block(tokens)?;

    let else_block = if matches!(tokens.peek(), Some((Token::Otherwise, _))) {
        tokens.next();
        if matches!(tokens.peek(), Some((Token::Question, _))) {
            Some(vec![parse_if_stmt(tokens)?])
        } else {
            Some(parse_block(tokens)?)
        }
    } else {
        None
    };
    consume_optional_semicolon(tokens);

    Ok(Stmt::If { condition,
                  then_block,
                  else_block,
                  line })
}

/// Parses a `while` loop: `while <condition> { <block> }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::While, "'while'")?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;
    consume_optional_semicolon(tokens);

    Ok(Stmt::While { condition, body, line })
}

/// Parses a `for` loop: `for <identifier> in <iterable> { <block> }`.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::For, "'for'")?;
    let (var, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::In, "'in'")?;
    let iterable = parse_expression(tokens)?;
    let body = parse_block(tokens)?;
    consume_optional_semicolon(tokens);

    Ok(Stmt::For { var,
                   iterable,
                   body,
                   line })
}

/// Parses a `return` statement: `return <expr>? ";"`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Return, "'return'")?;

    let value = if matches!(tokens.peek(), Some((Token::Semicolon, _))) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect(tokens, &Token::Semicolon, "';'")?;

    Ok(Stmt::Return { value, line })
}

/// Parses an expression statement: `<expr> ";"`.
fn parse_expression_stmt<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = current_line(tokens);
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';'")?;

    Ok(Stmt::Expression { expr, line })
}

/// Consumes a stray `;` after a block-form statement, if present.
fn consume_optional_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if matches!(tokens.peek(), Some((Token::Semicolon, _))) {
        tokens.next();
    }
}
