use std::collections::BTreeSet;

/// Represents a parsed propositional sentence as an expression tree.
///
/// `Expr` covers every form a sentence can take: the literals `TRUE` and
/// `FALSE`, single-letter variables, negation, and the four binary
/// connectives. Each parent exclusively owns its children, so the tree is
/// acyclic and has no shared sub-nodes; two textually identical
/// sub-sentences are distinct nodes.
///
/// Trees are built by the parser, read during evaluation, and dropped once
/// the truth table for one sentence has been produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal truth value: `TRUE` or `FALSE`.
    Literal(bool),
    /// A propositional variable, a single uppercase letter such as `P`.
    Variable(char),
    /// A negated sentence: `NOT <operand>`.
    Not(Box<Expr>),
    /// A binary connective applied to two sentences.
    Binary {
        /// The connective joining the operands.
        op:    Connective,
        /// The left operand.
        left:  Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
}

/// The binary connectives of propositional logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    /// Logical conjunction.
    And,
    /// Logical disjunction.
    Or,
    /// Material implication.
    Implies,
    /// Biconditional.
    Equivalent,
}

impl Expr {
    /// Collects the distinct variable names appearing anywhere in the tree.
    ///
    /// The result is a `BTreeSet`, so iterating it yields the names in
    /// alphabetical order. This fixes both the enumeration bit-order and the
    /// variable column order of a truth table.
    ///
    /// # Examples
    /// ```
    /// use veritab::interpreter::{lexer::scan, parser::core::parse};
    ///
    /// let tokens = scan("Q AND (P OR Q)").unwrap();
    /// let root = parse(&tokens).unwrap();
    /// let names: Vec<char> = root.variables().into_iter().collect();
    /// assert_eq!(names, vec!['P', 'Q']);
    /// ```
    #[must_use]
    pub fn variables(&self) -> BTreeSet<char> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<char>) {
        match self {
            Self::Literal(_) => {},
            Self::Variable(name) => {
                names.insert(*name);
            },
            Self::Not(operand) => operand.collect_variables(names),
            Self::Binary { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
        }
    }

    const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary { .. })
    }
}

/// Renders the canonical textual form of a sentence.
///
/// This rendering is the key under which sub-expression values are recorded
/// and the header text of truth-table columns. An operand is parenthesized
/// only where leaving the parentheses out would read ambiguously: the
/// operand of `NOT` when it is a binary node, the left operand of a binary
/// node when it is itself binary, and the right operand when it is binary or
/// a `NOT`. Leaves are never parenthesized.
///
/// The rendering is a display key, not an inverse of the tree: two distinct
/// trees with the same textual shape render identically on purpose, since
/// the table is keyed by textual sub-expression.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(true) => write!(f, "TRUE"),
            Self::Literal(false) => write!(f, "FALSE"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Not(operand) => {
                if operand.is_binary() {
                    write!(f, "NOT ({operand})")
                } else {
                    write!(f, "NOT {operand}")
                }
            },
            Self::Binary { op, left, right } => {
                if left.is_binary() {
                    write!(f, "({left}) {op}")?;
                } else {
                    write!(f, "{left} {op}")?;
                }
                if right.is_binary() || matches!(**right, Self::Not(_)) {
                    write!(f, " ({right})")
                } else {
                    write!(f, " {right}")
                }
            },
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Implies => "IMPLIES",
            Self::Equivalent => "EQUIVALENT",
        };
        write!(f, "{name}")
    }
}
