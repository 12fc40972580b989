/// Core evaluation logic for sentences under one assignment.
///
/// Contains the pure `evaluate` function, its sub-expression-recording
/// variant, and the assignment and record type aliases.
pub mod core;

/// Truth-table enumeration.
///
/// Enumerates every assignment of a sentence's variables, collects per-row
/// sub-expression values, and orders the table columns from simplest to most
/// complex.
pub mod table;
