use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`. This is the lowest precedence
/// level.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens)?;

    while let Some((Token::Or, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_logical_and(tokens)?;
        left = Expr::Binary { lhs: Box::new(left),
                              op: BinaryOperator::Or,
                              rhs: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and`. Precedence sits between `or`
/// and `not`.
///
/// Grammar: `logical_and := logical_not ("and" logical_not)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And`.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_not(tokens)?;

    while let Some((Token::And, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_logical_not(tokens)?;
        left = Expr::Binary { lhs: Box::new(left),
                              op: BinaryOperator::And,
                              rhs: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses logical NOT expressions.
///
/// `not` is a right-associative prefix operator sitting between `and` and
/// the comparison operators, so `not a == b` negates the comparison.
///
/// Grammar: `logical_not := "not" logical_not | comparison`
pub fn parse_logical_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let operand = parse_logical_not(tokens)?;
        return Ok(Expr::Unary { op: UnaryOperator::Not,
                                operand: Box::new(operand),
                                line });
    }
    parse_comparison(tokens)
}

/// Parses comparison expressions.
///
/// Handles `== != < > <= >=`. Comparisons are non-associative: at most one
/// operator is consumed at this level, so `a < b < c` is a parse error at
/// the second `<`.
///
/// Grammar: `comparison := range (cmp_op range)?`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_range(tokens)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = comparison_operator(token)
    {
        let line = *line;
        tokens.next();

        let right = parse_range(tokens)?;
        return Ok(Expr::Binary { lhs: Box::new(left),
                                 op,
                                 rhs: Box::new(right),
                                 line });
    }

    Ok(left)
}

/// Parses range expressions.
///
/// `lo..hi` is a non-associative binary form producing a half-open integer
/// range node.
///
/// Grammar: `range := additive (".." additive)?`
pub fn parse_range<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens)?;

    if let Some((Token::DotDot, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_additive(tokens)?;
        return Ok(Expr::Range { lo: Box::new(left),
                                hi: Box::new(right),
                                line });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    while let Some((token, line)) = tokens.peek() {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            _ => break,
        };
        let line = *line;
        tokens.next();

        let right = parse_multiplicative(tokens)?;
        left = Expr::Binary { lhs: Box::new(left),
                              op,
                              rhs: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// Grammar: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_exponent(tokens)?;

    while let Some((token, line)) = tokens.peek() {
        let op = match token {
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            Token::Percent => BinaryOperator::Mod,
            _ => break,
        };
        let line = *line;
        tokens.next();

        let right = parse_exponent(tokens)?;
        left = Expr::Binary { lhs: Box::new(left),
                              op,
                              rhs: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `**` is right-associative: `a ** b ** c` parses as `a ** (b ** c)`.
/// Unary minus binds tighter, so `-2 ** 2` is `(-2) ** 2`.
///
/// Grammar: `exponent := unary ("**" exponent)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_unary(tokens)?;

    if let Some((Token::StarStar, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_exponent(tokens)?;
        return Ok(Expr::Binary { lhs: Box::new(left),
                                 op: BinaryOperator::Pow,
                                 rhs: Box::new(right),
                                 line });
    }

    Ok(left)
}

/// Maps a token to its comparison operator, if it is one.
#[must_use]
const fn comparison_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
