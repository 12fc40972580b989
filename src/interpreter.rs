/// The lexer module tokenizes sentence text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens: parentheses, the connective and literal keywords, and
/// single-letter variables. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Classifies alphabetic runs as keywords or single-letter identifiers.
/// - Reports lexical errors for invalid or malformed input, failing fast.
pub mod lexer;
/// The parser module builds the sentence tree from tokens.
///
/// The parser processes the token sequence produced by the lexer by
/// recursive descent and constructs an expression tree that reflects the
/// precedence and associativity of the connectives.
///
/// # Responsibilities
/// - Converts tokens into an `Expr` tree with exactly one root.
/// - Validates the grammar, reporting errors with line information.
/// - Rejects empty input and tokens left over after a complete sentence.
pub mod parser;
/// The evaluator module computes truth values and truth tables.
///
/// The evaluator walks the sentence tree under one truth assignment,
/// tracking the value of every distinct sub-expression, and enumerates all
/// assignments of the sentence's variables into a truth table with columns
/// ordered from simplest to most complex.
///
/// # Responsibilities
/// - Evaluates sentences under an explicit assignment, with no ambient
///   state.
/// - Records sub-expression values keyed by canonical rendering.
/// - Enumerates assignments and orders table columns deterministically.
pub mod evaluator;
