use exprcalc::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
};

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?} evaluated to {value}"),
        Err(e) => panic!("{src:?} failed to evaluate: {e}"),
    }
}

fn assert_invalid_factor(src: &str) {
    let result = evaluate(src);
    assert!(matches!(result, Err(EvalError::Parse(ParseError::InvalidFactor { .. }))),
            "{src:?} produced {result:?} instead of an invalid factor error");
}

fn assert_trailing(src: &str) {
    let result = evaluate(src);
    assert!(matches!(result,
                     Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))),
            "{src:?} produced {result:?} instead of a trailing input error");
}

fn assert_division_by_zero(src: &str) {
    let result = evaluate(src);
    assert!(matches!(result, Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. }))),
            "{src:?} produced {result:?} instead of a division by zero error");
}

#[test]
fn single_numbers() {
    assert_value("7", 7);
    assert_value("0", 0);
    assert_value("  42  ", 42);
    assert_value("\t9\t", 9);
}

#[test]
fn addition_and_subtraction() {
    assert_value("1 + 2", 3);
    assert_value("8 - 5", 3);
    assert_value("1 + 2 + 3 + 4", 10);
    // Left-associative: (10 - 3) - 2, not 10 - (3 - 2).
    assert_value("10 - 3 - 2", 5);
    assert_value("3 - 10", -7);
}

#[test]
fn multiplication_and_division() {
    assert_value("7 * 9", 63);
    assert_value("10 / 2", 5);
    assert_value("0 / 5", 0);
    assert_value("2 * 3 * 4", 24);
    // Left-associative: (40 / 4) / 5.
    assert_value("40 / 4 / 5", 2);
}

#[test]
fn operator_precedence() {
    assert_value("3 + 4 * 2", 11);
    assert_value("10 - 6 / 2", 7);
    assert_value("2 + 3 * 4 - 5", 9);
    assert_value("1 + 10 / 5", 3);
    assert_value("1 + 2 * 3 - 4 / 2 + (5 - 1) * 2", 13);
}

#[test]
fn parentheses_group_subexpressions() {
    assert_value("(3 + 4) * 2", 14);
    assert_value("2 * (3 + (4 - 1))", 10);
    assert_value("(1 + 2) * (3 + 4)", 21);
    assert_value("((((5))))", 5);
    assert_value("10 / (1 + 1)", 5);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("20 / 3", 6);
    assert_value("9 / 4", 2);
    assert_value("(3 - 10) / 2", -3);
    assert_value("(0 - 9) / 4", -2);
}

#[test]
fn division_by_zero_is_reported() {
    assert_division_by_zero("10 / 0");
    assert_division_by_zero("1 / (2 - 2)");
    assert_division_by_zero("(8 / (4 - 4)) + 1");
    assert_division_by_zero("6 / (1 - 1) / 3");
}

#[test]
fn trailing_input_is_rejected() {
    assert_trailing("3 + 4 ) 5");
    assert_trailing("3 + 4)");
    assert_trailing("1 2");
    assert_trailing("5 ?");
    // No implicit multiplication: a number directly followed by `(` is two
    // tokens, and the second one is trailing.
    assert_trailing("2(3)");
}

#[test]
fn invalid_factors_are_rejected() {
    assert_invalid_factor("");
    assert_invalid_factor("   ");
    assert_invalid_factor("+ 3");
    assert_invalid_factor("3 + * 2");
    assert_invalid_factor("3 +");
    assert_invalid_factor(")");
    assert_invalid_factor("* 8");
    assert_invalid_factor("a + 1");
}

#[test]
fn unmatched_parentheses() {
    let result = evaluate("(1 + 2");
    assert!(matches!(result, Err(EvalError::Parse(ParseError::ExpectedClosingParen { .. }))),
            "{result:?}");

    let result = evaluate("((1 + 2)");
    assert!(matches!(result, Err(EvalError::Parse(ParseError::ExpectedClosingParen { .. }))),
            "{result:?}");

    assert_trailing("1 + 2)");
}

#[test]
fn oversized_literals_are_rejected() {
    // Does not fit in an i64, so the lexer refuses to classify it as a
    // number and the factor position sees an unrecognized run of digits.
    assert_invalid_factor("99999999999999999999999999");
}

#[test]
fn error_positions_point_at_the_offending_byte() {
    match evaluate("3 + 4 ) 5") {
        Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { position, .. })) => {
            assert_eq!(position, 6);
        },
        other => panic!("expected a trailing input error, got {other:?}"),
    }

    match evaluate("10 / 0") {
        Err(EvalError::Runtime(RuntimeError::DivisionByZero { position })) => {
            assert_eq!(position, 3);
        },
        other => panic!("expected a division by zero error, got {other:?}"),
    }

    match evaluate("3 + * 2") {
        Err(EvalError::Parse(ParseError::InvalidFactor { found, position })) => {
            assert_eq!(position, 4);
            assert_eq!(found, "'*'");
        },
        other => panic!("expected an invalid factor error, got {other:?}"),
    }

    match evaluate("(1 + 2") {
        Err(EvalError::Parse(ParseError::ExpectedClosingParen { position })) => {
            assert_eq!(position, 6);
        },
        other => panic!("expected a missing parenthesis error, got {other:?}"),
    }
}

#[test]
fn errors_render_a_readable_message() {
    let message = evaluate("10 / 0").unwrap_err().to_string();
    assert_eq!(message, "Error at position 3: Division by zero.");

    let message = evaluate("").unwrap_err().to_string();
    assert_eq!(message, "Error at position 0: Expected a number or '(' but found end of input.");
}
