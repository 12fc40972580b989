use std::iter::Peekable;

use crate::{
    ast::{Connective, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_negation},
    },
};

/// Parses equivalence expressions.
///
/// Handles the left-associative binary connective `EQUIVALENT`, the lowest
/// precedence level: `A EQUIVALENT B EQUIVALENT C` parses as
/// `(A EQUIVALENT B) EQUIVALENT C`.
///
/// The rule is: `equivalence := implication (EQUIVALENT implication)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed sentence.
pub fn parse_equivalence<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_implication(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_connective(token)
           && matches!(op, Connective::Equivalent)
        {
            tokens.next();
            let right = parse_implication(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses implication expressions.
///
/// Handles the left-associative binary connective `IMPLIES`:
/// `A IMPLIES B IMPLIES C` parses as `(A IMPLIES B) IMPLIES C`.
///
/// The rule is: `implication := disjunction (IMPLIES disjunction)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree combining disjunction-level nodes.
pub fn parse_implication<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_disjunction(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_connective(token)
           && matches!(op, Connective::Implies)
        {
            tokens.next();
            let right = parse_disjunction(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses disjunction expressions.
///
/// Handles the left-associative binary connective `OR`.
///
/// The rule is: `disjunction := conjunction (OR conjunction)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree combining conjunction-level nodes.
pub fn parse_disjunction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_conjunction(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_connective(token)
           && matches!(op, Connective::Or)
        {
            tokens.next();
            let right = parse_conjunction(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses conjunction expressions.
///
/// Handles the left-associative binary connective `AND`, the highest binary
/// precedence level; only negation binds tighter.
///
/// The rule is: `conjunction := negation (AND negation)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree combining negation-level nodes.
pub fn parse_conjunction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_negation(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_connective(token)
           && matches!(op, Connective::And)
        {
            tokens.next();
            let right = parse_negation(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary connective.
///
/// Returns `Some(Connective)` when the token is one of `AND`, `OR`,
/// `IMPLIES`, or `EQUIVALENT`, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(Connective)` if the token corresponds to a binary connective,
/// otherwise `None`.
///
/// # Example
/// ```
/// use veritab::{
///     ast::Connective,
///     interpreter::{lexer::Token, parser::binary::token_to_connective},
/// };
///
/// assert_eq!(token_to_connective(&Token::And), Some(Connective::And));
/// assert_eq!(token_to_connective(&Token::Not), None);
/// ```
#[must_use]
pub const fn token_to_connective(token: &Token) -> Option<Connective> {
    match token {
        Token::And => Some(Connective::And),
        Token::Or => Some(Connective::Or),
        Token::Implies => Some(Connective::Implies),
        Token::Equivalent => Some(Connective::Equivalent),
        _ => None,
    }
}
