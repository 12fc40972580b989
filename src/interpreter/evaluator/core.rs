use std::collections::{BTreeMap, HashMap};

use crate::{
    ast::{Connective, Expr},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// One truth assignment: a mapping from variable name to truth value.
///
/// A `BTreeMap` keeps the keys in alphabetical order, which fixes the
/// enumeration order and the variable column order of a table.
pub type Assignment = BTreeMap<char, bool>;

/// The sub-expression values observed under one assignment, keyed by the
/// canonical rendering of each sub-sentence.
///
/// Built fresh per assignment and never persisted across assignments.
pub type SubExprValues = HashMap<String, bool>;

/// Evaluates a sentence under one assignment.
///
/// A pure function of the tree and the assignment: literals evaluate to
/// themselves, variables look their value up in `assignment`, and the
/// connectives follow the usual truth-functional semantics (`IMPLIES` is
/// `NOT left OR right`, `EQUIVALENT` is equality of the sides). Both
/// operands of a binary node are always evaluated; there is no
/// short-circuiting, so the recording variant observes exactly the same
/// values.
///
/// # Parameters
/// - `expr`: The sentence to evaluate.
/// - `assignment`: Truth values for the sentence's variables.
///
/// # Returns
/// The truth value of the sentence.
///
/// # Errors
/// Returns [`EvalError::UnboundVariable`] if a variable has no entry in
/// `assignment`. This cannot happen when the assignment was built from the
/// tree's own variable set, as
/// [`generate_table`](super::table::generate_table) does.
///
/// # Examples
/// ```
/// use veritab::interpreter::{
///     evaluator::core::{Assignment, evaluate},
///     lexer::scan,
///     parser::core::parse,
/// };
///
/// let root = parse(&scan("P IMPLIES Q").unwrap()).unwrap();
/// let assignment = Assignment::from([('P', true), ('Q', false)]);
/// assert_eq!(evaluate(&root, &assignment), Ok(false));
/// ```
pub fn evaluate(expr: &Expr, assignment: &Assignment) -> EvalResult<bool> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Variable(name) => {
            assignment.get(name)
                      .copied()
                      .ok_or(EvalError::UnboundVariable { name: *name })
        },
        Expr::Not(operand) => Ok(!evaluate(operand, assignment)?),
        Expr::Binary { op, left, right } => {
            let left = evaluate(left, assignment)?;
            let right = evaluate(right, assignment)?;
            Ok(apply_connective(*op, left, right))
        },
    }
}

/// Evaluates a sentence while recording every sub-expression's value.
///
/// Performs the same walk as [`evaluate`], and additionally inserts each
/// non-leaf node's canonical rendering and value into `records`. Duplicate
/// renderings overwrite each other with the same value, since a value is
/// determined by the assignment rather than by node identity.
///
/// Leaves are not recorded here: variables already have their own table
/// columns, and the root's rendering is inserted by the caller so that a
/// bare literal or variable sentence still gets a result column.
///
/// # Parameters
/// - `expr`: The sentence to evaluate.
/// - `assignment`: Truth values for the sentence's variables.
/// - `records`: Receives rendering/value pairs for this assignment.
///
/// # Returns
/// The truth value of the sentence.
///
/// # Errors
/// Returns [`EvalError::UnboundVariable`] under the same condition as
/// [`evaluate`].
pub fn evaluate_recorded(expr: &Expr,
                         assignment: &Assignment,
                         records: &mut SubExprValues)
                         -> EvalResult<bool> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Variable(name) => {
            assignment.get(name)
                      .copied()
                      .ok_or(EvalError::UnboundVariable { name: *name })
        },
        Expr::Not(operand) => {
            let value = !evaluate_recorded(operand, assignment, records)?;
            records.insert(expr.to_string(), value);
            Ok(value)
        },
        Expr::Binary { op, left, right } => {
            let left = evaluate_recorded(left, assignment, records)?;
            let right = evaluate_recorded(right, assignment, records)?;
            let value = apply_connective(*op, left, right);
            records.insert(expr.to_string(), value);
            Ok(value)
        },
    }
}

const fn apply_connective(op: Connective, left: bool, right: bool) -> bool {
    match op {
        Connective::And => left && right,
        Connective::Or => left || right,
        Connective::Implies => !left || right,
        Connective::Equivalent => left == right,
    }
}
