/// Lexical errors.
///
/// Defines the error types raised while scanning raw text into tokens:
/// unrecognized characters and alphabetic runs that are neither keywords nor
/// single-letter identifiers.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence
/// into a sentence tree: missing operands, unmatched parentheses, trailing
/// tokens, and empty input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while evaluating a sentence
/// tree or enumerating its truth table. These signal internal
/// inconsistencies or resource limits rather than mistakes in user input.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
