#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while scanning text into tokens.
///
/// The scanner fails fast: the first offending piece of input stops the scan
/// and no partial token sequence is returned.
pub enum LexError {
    /// Found a character that is not part of the language.
    UnrecognizedCharacter {
        /// The character encountered.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The column (1-based) where the character starts.
        column:    usize,
    },
    /// Found an alphabetic run that is neither a keyword nor a single
    /// uppercase letter.
    InvalidWord {
        /// The offending run of letters.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column (1-based) where the run starts.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character,
                                          line,
                                          column, } => {
                write!(f,
                       "Error on line {line}, column {column}: Unrecognized character '{character}'.")
            },

            Self::InvalidWord { lexeme, line, column } => {
                write!(f,
                       "Error on line {line}, column {column}: '{lexeme}' is not a keyword or a single-letter identifier.")
            },
        }
    }
}

impl std::error::Error for LexError {}
