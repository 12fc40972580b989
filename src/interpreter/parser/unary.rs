use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_sentence},
    },
};

/// Parses a negation expression.
///
/// `NOT` binds tighter than every binary connective and is
/// right-associative, so `NOT NOT P` parses as `NOT (NOT P)`.
///
/// If no `NOT` is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     negation := NOT negation
///               | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Not`] or a primary sentence.
pub(crate) fn parse_negation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_negation(tokens)?;
        Ok(Expr::Not(Box::new(operand)))
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) sentence.
///
/// Primary sentences form the base of the grammar and include:
/// - the literals `TRUE` and `FALSE`
/// - single-letter variables
/// - parenthesized sentences
///
/// This function does not handle `NOT` or binary connectives; it dispatches
/// on the leading token and reports anything else as a missing operand. An
/// operator in operand position (`AND P`), a `)` after an operator
/// (`P AND )`), and end of input after an operator (`P AND`) all land here.
///
/// Grammar:
/// ```text
///     primary := TRUE
///              | FALSE
///              | IDENTIFIER
///              | "(" sentence ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary sentence.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::True, _) => {
            tokens.next();
            Ok(Expr::Literal(true))
        },
        (Token::False, _) => {
            tokens.next();
            Ok(Expr::Literal(false))
        },
        (Token::Identifier(name), _) => {
            let name = *name;
            tokens.next();
            Ok(Expr::Variable(name))
        },
        (Token::LeftParen, _) => parse_grouping(tokens),
        (Token::End, line) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        (token, line) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                           line:  *line, }),
    }
}

/// Parses a parenthesized sentence.
///
/// Consumes the `(`, parses a full sentence with precedence reset, and
/// requires the matching `)`. A missing `)` is reported against the line of
/// the opening parenthesis.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner sentence, with the parentheses consumed.
///
/// # Errors
/// Returns `ExpectedClosingParen` if the group is not closed before the end
/// of input.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let sentence = parse_sentence(tokens)?;
    match tokens.next() {
        Some((Token::RightParen, _)) => Ok(sentence),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
