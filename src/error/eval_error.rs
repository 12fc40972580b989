#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and enumeration.
///
/// Unlike [`LexError`](super::LexError) and [`ParseError`](super::ParseError)
/// these do not point at mistakes in the input sentence. `UnboundVariable`
/// guards an internal invariant, and `TooManyVariables` reports a resource
/// limit.
pub enum EvalError {
    /// A variable had no value in the current assignment.
    ///
    /// Unreachable through the public pipeline, which always builds the
    /// assignment from the tree's own variable set.
    UnboundVariable {
        /// The name of the variable.
        name: char,
    },
    /// The sentence has more distinct variables than the enumeration limit.
    ///
    /// A truth table has `2^n` rows for `n` distinct variables, so time and
    /// memory grow exponentially with the variable count.
    TooManyVariables {
        /// The number of distinct variables found.
        count: usize,
        /// The largest supported count.
        limit: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => {
                write!(f, "Error: Variable '{name}' has no assigned value.")
            },

            Self::TooManyVariables { count, limit } => write!(f,
                                                              "Error: Sentence has {count} distinct variables, but at most {limit} are supported."),
        }
    }
}

impl std::error::Error for EvalError {}
