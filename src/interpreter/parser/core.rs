use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_equivalence},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into one complete sentence.
///
/// This is the whole-input entry point: the sequence must contain exactly
/// one sentence followed by the end-of-input token. Empty input and tokens
/// left over after a complete sentence are rejected here, so a well-formed
/// prefix like `P` in `P Q` never silently succeeds.
///
/// # Parameters
/// - `tokens`: The `(Token, line)` sequence produced by
///   [`scan`](crate::interpreter::lexer::scan).
///
/// # Returns
/// The root of the sentence tree.
///
/// # Errors
/// - `EmptyInput` if the sequence holds no sentence at all.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete sentence.
/// - Propagates any error from sentence parsing.
///
/// # Examples
/// ```
/// use veritab::{error::ParseError,
///               interpreter::{lexer::scan, parser::core::parse}};
///
/// let tokens = scan("NOT P OR Q").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = scan("P Q").unwrap();
/// assert!(matches!(parse(&tokens),
///                  Err(ParseError::UnexpectedTrailingTokens { .. })));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    match iter.peek() {
        None | Some((Token::End, _)) => return Err(ParseError::EmptyInput),
        Some(_) => {},
    }

    let sentence = parse_sentence(&mut iter)?;

    match iter.next() {
        None | Some((Token::End, _)) => Ok(sentence),
        Some((token, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                       line:  *line, })
        },
    }
}

/// Parses a full sentence.
///
/// This is the entry point for sentence parsing.
/// It begins at the lowest-precedence level, equivalence, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `sentence := equivalence`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed sentence node.
pub fn parse_sentence<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_equivalence(tokens)
}
