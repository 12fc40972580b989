use std::collections::BTreeSet;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::core::{Assignment, EvalResult, SubExprValues, evaluate_recorded},
};

/// The largest supported number of distinct variables in one sentence.
///
/// A truth table has `2^n` rows for `n` distinct variables, so both time and
/// memory grow exponentially with the variable count. Rather than silently
/// exhausting memory on a pathological sentence, enumeration stops at this
/// limit (65 536 rows) with [`EvalError::TooManyVariables`].
pub const MAX_VARIABLES: usize = 16;

/// A truth-table column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// A variable column, holding that variable's assigned value per row.
    Variable(char),
    /// A sub-expression column, keyed by the canonical rendering. The last
    /// column of a table is always the full sentence's rendering.
    Expression(String),
}

/// One row of a truth table: an assignment and the sub-expression values
/// observed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The truth assignment this row was evaluated under.
    pub assignment: Assignment,
    /// Every sub-expression rendering and its value, including the full
    /// sentence.
    pub values:     SubExprValues,
}

/// A complete truth table: ordered columns and one row per assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Column headers, left to right: variables in alphabetical order, then
    /// sub-expressions from simplest to most complex, then the full
    /// sentence.
    pub columns: Vec<Column>,
    /// Rows in enumeration order. Row `i` assigns variable `j` (0-indexed
    /// alphabetically) the value of bit `j` of `i`, so the all-false row
    /// comes first and the all-true row last.
    pub rows:    Vec<Row>,
}

impl Row {
    /// Looks up this row's value for a column.
    ///
    /// Variable columns read the assignment; expression columns read the
    /// recorded sub-expression values. Returns `None` only for a column
    /// that does not belong to this row's table.
    #[must_use]
    pub fn value_of(&self, column: &Column) -> Option<bool> {
        match column {
            Column::Variable(name) => self.assignment.get(name).copied(),
            Column::Expression(rendering) => self.values.get(rendering).copied(),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Expression(rendering) => write!(f, "{rendering}"),
        }
    }
}

/// Enumerates every truth assignment of a sentence into a table.
///
/// Collects the sentence's distinct variables, sorts them alphabetically,
/// and evaluates the sentence once per assignment in `[0, 2^n)` bit order,
/// recording every sub-expression's value along the way. Columns are the
/// variables in sorted order, then every distinct sub-expression rendering
/// ordered by ascending structural complexity (count of parentheses in the
/// rendering, then rendering length, then lexically), and finally the full
/// sentence's rendering. The complexity order guarantees a sub-expression's
/// column never appears after a column of an expression containing it.
///
/// A sentence with zero variables still produces exactly one row.
///
/// # Parameters
/// - `root`: The sentence to tabulate.
///
/// # Returns
/// The table's ordered columns and rows.
///
/// # Errors
/// Returns [`EvalError::TooManyVariables`] if the sentence has more than
/// [`MAX_VARIABLES`] distinct variables.
///
/// # Examples
/// ```
/// use veritab::interpreter::{evaluator::table::generate_table, lexer::scan,
///                            parser::core::parse};
///
/// let root = parse(&scan("P AND Q").unwrap()).unwrap();
/// let table = generate_table(&root).unwrap();
/// assert_eq!(table.rows.len(), 4);
/// assert_eq!(table.columns.len(), 3);
/// ```
pub fn generate_table(root: &Expr) -> EvalResult<TruthTable> {
    let variables: Vec<char> = root.variables().into_iter().collect();
    if variables.len() > MAX_VARIABLES {
        return Err(EvalError::TooManyVariables { count: variables.len(),
                                                 limit: MAX_VARIABLES, });
    }

    let root_rendering = root.to_string();
    let row_count = 1_usize << variables.len();
    let mut rows = Vec::with_capacity(row_count);
    let mut renderings = BTreeSet::new();

    for i in 0..row_count {
        let mut assignment = Assignment::new();
        for (j, name) in variables.iter().enumerate() {
            assignment.insert(*name, i & (1 << j) != 0);
        }

        let mut values = SubExprValues::new();
        let result = evaluate_recorded(root, &assignment, &mut values)?;
        values.insert(root_rendering.clone(), result);

        for rendering in values.keys() {
            if *rendering != root_rendering {
                renderings.insert(rendering.clone());
            }
        }
        rows.push(Row { assignment, values });
    }

    // BTreeSet iteration is lexical and the sort is stable, so equal
    // complexity keys stay in lexical order.
    let mut sub_columns: Vec<String> = renderings.into_iter().collect();
    sub_columns.sort_by_key(|rendering| complexity(rendering));

    let mut columns: Vec<Column> = variables.into_iter().map(Column::Variable).collect();
    columns.extend(sub_columns.into_iter().map(Column::Expression));
    columns.push(Column::Expression(root_rendering));

    Ok(TruthTable { columns, rows })
}

/// The column-ordering key: parenthesis count, then rendering length.
fn complexity(rendering: &str) -> (usize, usize) {
    let parens = rendering.chars().filter(|&c| c == '(').count();
    (parens, rendering.len())
}
