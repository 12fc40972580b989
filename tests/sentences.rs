use std::fs;

use veritab::{
    ast::Expr,
    error::{EvalError, LexError, ParseError},
    interpreter::{
        evaluator::{
            core::{Assignment, evaluate},
            table::{Column, MAX_VARIABLES, TruthTable, generate_table},
        },
        lexer::{Token, scan},
        parser::core::parse,
    },
    truth_table,
};

fn tabulate(src: &str) -> TruthTable {
    truth_table(src).unwrap_or_else(|e| panic!("Sentence failed: {e}"))
}

fn assert_failure(src: &str) {
    if truth_table(src).is_ok() {
        panic!("Sentence succeeded but was expected to fail: {src}")
    }
}

fn parse_sentence(src: &str) -> Expr {
    let tokens = scan(src).unwrap_or_else(|e| panic!("Scan failed: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Parse failed: {e}"))
}

#[test]
fn scan_appends_exactly_one_end_token() {
    let tokens = scan("").unwrap();
    assert_eq!(tokens, vec![(Token::End, 1)]);

    let tokens = scan("NOT (P OR Q)").unwrap();
    let ends = tokens.iter().filter(|(t, _)| *t == Token::End).count();
    assert_eq!(ends, 1);
    assert_eq!(tokens.last().unwrap().0, Token::End);
}

#[test]
fn unrecognized_character_is_reported_with_position() {
    assert_eq!(scan("P $ Q"),
               Err(LexError::UnrecognizedCharacter { character: '$',
                                                     line:      1,
                                                     column:    3, }));
}

#[test]
fn invalid_words_are_rejected() {
    // A run of letters is only ever a keyword or a single uppercase letter.
    assert!(matches!(scan("PANDQ"), Err(LexError::InvalidWord { .. })));
    assert!(matches!(scan("TRUEX"), Err(LexError::InvalidWord { .. })));
    assert!(matches!(scan("p AND q"), Err(LexError::InvalidWord { .. })));
}

#[test]
fn newlines_advance_line_and_column_tracking() {
    let tokens = scan("P AND\nQ").unwrap();
    assert_eq!(tokens[2], (Token::Identifier('Q'), 2));

    assert_eq!(scan("P AND\nquux"),
               Err(LexError::InvalidWord { lexeme: "quux".to_string(),
                                           line:   2,
                                           column: 1, }));
}

#[test]
fn parsing_is_deterministic() {
    let tokens = scan("NOT P IMPLIES (Q EQUIVALENT S)").unwrap();
    let first = parse(&tokens).unwrap();
    let second = parse(&tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn binary_connectives_fold_left() {
    let root = parse_sentence("P IMPLIES Q IMPLIES S");
    assert_eq!(root.to_string(), "(P IMPLIES Q) IMPLIES S");

    let root = parse_sentence("P EQUIVALENT Q EQUIVALENT S");
    assert_eq!(root.to_string(), "(P EQUIVALENT Q) EQUIVALENT S");
}

#[test]
fn precedence_orders_not_and_or() {
    let root = parse_sentence("NOT P AND Q OR S");
    assert_eq!(root.to_string(), "(NOT P AND Q) OR S");

    let root = parse_sentence("P AND (Q OR S)");
    assert_eq!(root.to_string(), "P AND (Q OR S)");

    let root = parse_sentence("NOT NOT P");
    assert_eq!(root.to_string(), "NOT NOT P");
}

#[test]
fn empty_input_is_a_parse_error() {
    let tokens = scan("").unwrap();
    assert_eq!(parse(&tokens), Err(ParseError::EmptyInput));
}

#[test]
fn unmatched_open_paren_is_a_parse_error() {
    let tokens = scan("(P").unwrap();
    assert_eq!(parse(&tokens), Err(ParseError::ExpectedClosingParen { line: 1 }));
}

#[test]
fn trailing_tokens_are_a_parse_error() {
    let tokens = scan("P Q").unwrap();
    assert!(matches!(parse(&tokens),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));

    let tokens = scan("P)").unwrap();
    assert!(matches!(parse(&tokens),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn missing_operands_are_parse_errors() {
    let tokens = scan("AND P").unwrap();
    assert!(matches!(parse(&tokens), Err(ParseError::UnexpectedToken { .. })));

    let tokens = scan("P AND").unwrap();
    assert!(matches!(parse(&tokens),
                     Err(ParseError::UnexpectedEndOfInput { .. })));

    let tokens = scan("(P AND ) OR Q").unwrap();
    assert!(matches!(parse(&tokens), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn double_negation_cancels_under_every_assignment() {
    let negated = parse_sentence("NOT NOT P");
    let plain = parse_sentence("P");

    for value in [false, true] {
        let assignment = Assignment::from([('P', value)]);
        assert_eq!(evaluate(&negated, &assignment), evaluate(&plain, &assignment));
    }
}

#[test]
fn equivalence_matches_equality_of_sides() {
    let root = parse_sentence("P EQUIVALENT Q");
    let left = parse_sentence("P");
    let right = parse_sentence("Q");

    for p in [false, true] {
        for q in [false, true] {
            let assignment = Assignment::from([('P', p), ('Q', q)]);
            let sides_equal =
                evaluate(&left, &assignment).unwrap() == evaluate(&right, &assignment).unwrap();
            assert_eq!(evaluate(&root, &assignment), Ok(sides_equal));
        }
    }
}

#[test]
fn unbound_variable_is_guarded() {
    let root = Expr::Variable('P');
    assert_eq!(evaluate(&root, &Assignment::new()),
               Err(EvalError::UnboundVariable { name: 'P' }));
}

#[test]
fn conjunction_table_has_four_rows_with_expected_results() {
    let table = tabulate("P AND Q");
    assert_eq!(table.rows.len(), 4);

    let result = Column::Expression("P AND Q".to_string());
    assert_eq!(table.columns.last(), Some(&result));

    // Row 0 is the all-false assignment, row 3 the all-true one.
    assert_eq!(table.rows[0].value_of(&result), Some(false));
    assert_eq!(table.rows[3].value_of(&result), Some(true));
}

#[test]
fn implication_is_false_only_when_antecedent_holds_alone() {
    let table = tabulate("P IMPLIES Q");
    let result = Column::Expression("P IMPLIES Q".to_string());

    for row in &table.rows {
        let p = row.assignment[&'P'];
        let q = row.assignment[&'Q'];
        let expected = !(p && !q);
        assert_eq!(row.value_of(&result), Some(expected));
    }
}

#[test]
fn variable_columns_are_alphabetical() {
    let table = tabulate("Q OR S OR P");
    assert_eq!(&table.columns[..3],
               &[Column::Variable('P'), Column::Variable('Q'), Column::Variable('S')]);
}

#[test]
fn subexpression_columns_precede_their_containers() {
    let table = tabulate("NOT (P OR Q)");
    assert_eq!(table.columns,
               vec![Column::Variable('P'),
                    Column::Variable('Q'),
                    Column::Expression("P OR Q".to_string()),
                    Column::Expression("NOT (P OR Q)".to_string())]);

    let table = tabulate("(P AND Q) OR (NOT P AND S)");
    assert_eq!(table.columns,
               vec![Column::Variable('P'),
                    Column::Variable('Q'),
                    Column::Variable('S'),
                    Column::Expression("NOT P".to_string()),
                    Column::Expression("P AND Q".to_string()),
                    Column::Expression("NOT P AND S".to_string()),
                    Column::Expression("(P AND Q) OR (NOT P AND S)".to_string())]);
}

#[test]
fn row_count_is_two_to_the_variable_count() {
    assert_eq!(tabulate("P").rows.len(), 2);
    assert_eq!(tabulate("P OR Q").rows.len(), 4);
    assert_eq!(tabulate("(P AND Q) IMPLIES S").rows.len(), 8);
}

#[test]
fn zero_variable_sentence_produces_one_row() {
    let table = tabulate("TRUE AND FALSE");
    assert_eq!(table.rows.len(), 1);

    let result = Column::Expression("TRUE AND FALSE".to_string());
    assert_eq!(table.rows[0].value_of(&result), Some(false));
}

#[test]
fn bare_variable_sentence_still_gets_a_result_column() {
    let table = tabulate("P");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.columns,
               vec![Column::Variable('P'), Column::Expression("P".to_string())]);
}

#[test]
fn too_many_variables_is_an_error() {
    let sentence = ('A'..='Q').map(String::from)
                              .collect::<Vec<_>>()
                              .join(" OR ");
    let root = parse_sentence(&sentence);
    assert_eq!(generate_table(&root),
               Err(EvalError::TooManyVariables { count: 17,
                                                 limit: MAX_VARIABLES, }));
}

#[test]
fn lex_and_parse_failures_reach_the_pipeline_caller() {
    assert_failure("P $ Q");
    assert_failure("(P");
    assert_failure("");
}

#[test]
fn test_script_file() {
    let contents = fs::read_to_string("tests/example.logic").expect("missing file");
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        tabulate(line);
    }
}
