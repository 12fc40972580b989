//! # veritab
//!
//! veritab is a truth-table generator for propositional logic written in
//! Rust. It lexes, parses, and evaluates a sentence built from `NOT`, `AND`,
//! `OR`, `IMPLIES`, `EQUIVALENT`, the literals `TRUE`/`FALSE`,
//! single-letter variables, and parentheses, then enumerates every truth
//! assignment of the sentence's variables into a table that also shows the
//! value of each distinct sub-expression, ordered from simplest to most
//! complex and ending in the value of the whole sentence.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::table::{TruthTable, generate_table},
    lexer::scan,
    parser::core::parse,
};

/// Defines the structure of parsed sentences.
///
/// This module declares the `Expr` enum and the `Connective` type that
/// represent a propositional sentence as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the four node forms: literals, variables, negation, and binary
///   connectives.
/// - Renders the canonical textual form used to key sub-expression columns.
/// - Collects the distinct variables of a sentence in alphabetical order.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised along the pipeline. It
/// standardizes error reporting and carries detailed information about
/// failures, including offending text and source positions for user
/// feedback. All errors are values; nothing in the pipeline panics on bad
/// input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches lines, columns, and offending lexemes where they exist.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of tabulating a sentence.
///
/// This module ties together lexing, parsing, and evaluation to provide the
/// complete pipeline from sentence text to truth table. Each stage runs to
/// completion before the next begins, and no state survives from one
/// sentence to the next.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides entry points for scanning, parsing, and table generation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the truth table for one sentence.
///
/// This function runs the whole pipeline: it scans `sentence` into tokens,
/// parses them into a tree, and enumerates every assignment of the tree's
/// variables into a [`TruthTable`]. Any stage's failure is returned as the
/// error; no partial table is produced.
///
/// # Errors
/// Returns the underlying [`LexError`](error::LexError),
/// [`ParseError`](error::ParseError), or [`EvalError`](error::EvalError) if
/// scanning, parsing, or enumeration fails.
///
/// # Examples
/// ```
/// use veritab::truth_table;
///
/// // Two variables, so four rows.
/// let table = truth_table("P AND Q").unwrap();
/// assert_eq!(table.rows.len(), 4);
///
/// // Example with an intentional error (unmatched parenthesis).
/// assert!(truth_table("(P AND Q").is_err());
/// ```
pub fn truth_table(sentence: &str) -> Result<TruthTable, Box<dyn std::error::Error>> {
    let tokens = scan(sentence)?;
    let root = parse(&tokens)?;
    let table = generate_table(&root)?;
    Ok(table)
}
