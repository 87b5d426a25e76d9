// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use principale::RuntimeError;
use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("10", 10)]
#[case("5 + 2", 7)]
#[case("4 * 9", 36)]
#[case("52 / 5", 10)]
#[case("3 - 8", -5)]
fn binary_operations(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(interpret_expression(input), Ok(expected));
}

#[rstest]
#[case("2 + 3 * 4", 20)]
#[case("10 * 4 + 5", 45)]
#[case("10 + 4 * 5", 70)]
#[case("10 - 4 - 5", 1)]
#[case("2 + (3 * 4)", 14)]
#[case("1 < 2 == 1", 1)]
fn no_precedence(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(interpret_expression(input), Ok(expected));
}

#[rstest]
#[case("1 et 1", 1)]
#[case("1 et 0", 0)]
#[case("0 ou 7", 1)]
#[case("non 0", 1)]
#[case("non -3", 0)]
#[case("non 1 ou 1", 1)]
fn logic(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(interpret_expression(input), Ok(expected));
}

#[rstest]
#[case("-5", -5)]
#[case("-(1 + 1)", -2)]
#[case("3 * -2", -6)]
fn unary_minus(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(interpret_expression(input), Ok(expected));
}

#[rstest]
#[case("10 / 0")]
#[case("1 / (2 - 2)")]
fn division_by_zero(#[case] input: &str) {
    let result = interpret_expression(input);
    assert!(matches!(result, Err(RuntimeError::DivisionByZero { .. })), "Result: {result:?}");
}
