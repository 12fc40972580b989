use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `TRUE`
    #[token("TRUE")]
    True,
    /// `FALSE`
    #[token("FALSE")]
    False,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `IMPLIES`
    #[token("IMPLIES")]
    Implies,
    /// `EQUIVALENT`
    #[token("EQUIVALENT")]
    Equivalent,
    /// Identifier tokens; a propositional variable written as a single
    /// uppercase letter such as `P`. Any longer alphabetic run that is not a
    /// keyword, and any single lowercase letter, is rejected by the callback
    /// and surfaces as a [`LexError::InvalidWord`].
    #[regex(r"[a-zA-Z]+", parse_identifier)]
    Identifier(char),
    /// End-of-input marker, appended exactly once by [`scan`].
    End,

    #[token("\n", |lex| {
        lex.extras.line       += 1;
        lex.extras.line_start  = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so errors can report both a line and a column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Classifies an alphabetic run as an identifier.
///
/// Keywords never reach this callback; they are matched by their own token
/// patterns. Everything else must be exactly one uppercase letter.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(char)`: The variable name, when the run is a single uppercase
///   letter.
/// - `None`: Otherwise, turning the run into a lexical error.
fn parse_identifier(lex: &logos::Lexer<Token>) -> Option<char> {
    let slice = lex.slice();
    let mut chars = slice.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Some(letter),
        _ => None,
    }
}

/// Scans raw text into a token sequence.
///
/// Performs a single left-to-right pass over `source`: whitespace is
/// skipped (newlines advance the line counter), parentheses and keywords map
/// to their tokens, and any other alphabetic run must be a single uppercase
/// letter naming a variable. On success the sequence always ends with
/// exactly one [`Token::End`], even for empty input.
///
/// The scan fails fast: the first unrecognized character or invalid word
/// stops it and no partial sequence is returned.
///
/// # Parameters
/// - `source`: The sentence text to tokenize.
///
/// # Returns
/// A vector of `(Token, line)` pairs ending in `Token::End`.
///
/// # Errors
/// Returns a [`LexError`] carrying the offending text and its line and
/// column.
///
/// # Examples
/// ```
/// use veritab::interpreter::lexer::{Token, scan};
///
/// let tokens = scan("P AND Q").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].0, Token::End);
///
/// assert!(scan("P $ Q").is_err());
/// ```
pub fn scan(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            let column = lexer.span().start - lexer.extras.line_start + 1;

            let mut chars = slice.chars();
            return Err(match (chars.next(), chars.next()) {
                (Some(character), None) if !character.is_alphabetic() => {
                    LexError::UnrecognizedCharacter { character,
                                                      line,
                                                      column }
                },
                _ => LexError::InvalidWord { lexeme: slice.to_string(),
                                             line,
                                             column },
            });
        }
    }

    tokens.push((Token::End, lexer.extras.line));
    Ok(tokens)
}

/// Renders a token the way it appears in source, for error messages.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::True => write!(f, "TRUE"),
            Self::False => write!(f, "FALSE"),
            Self::Not => write!(f, "NOT"),
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Implies => write!(f, "IMPLIES"),
            Self::Equivalent => write!(f, "EQUIVALENT"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::End => write!(f, "end of input"),
            Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}
