/// Core parsing logic and the whole-input entry point.
///
/// Contains the `parse` entry point that checks for empty input and trailing
/// tokens, and the top of the precedence hierarchy.
pub mod core;

/// Binary connective parsing.
///
/// Implements one left-folding parse function per binary precedence level:
/// equivalence, implication, disjunction, and conjunction.
pub mod binary;

/// Negation and primary parsing.
///
/// Handles the right-recursive `NOT` prefix and the atomic sentences:
/// literals, variables, and parenthesized groups.
pub mod unary;
