// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{parse, parse_error, program};

#[rstest]
#[case(
    "procedure principale()\n  x = 1\nfinproc\n",
    "Line 3, Column 1 - Syntax error - Expected: ; - Found: finproc",
)]
#[case(
    "procedure principale()\n  tantque ( x < 3 ) x = x + 1 ;\nfinproc\n",
    "Line 3, Column 1 - Syntax error - Expected: fintantque - Found: finproc",
)]
#[case(
    "procedure principale()\n  repeter x = 1 ; ( x )\nfinproc\n",
    "Line 2, Column 19 - Syntax error - Expected: jusqua - Found: (",
)]
#[case(
    "procedure principale()\n  ecrire ( \"a\" \"b\" )\nfinproc\n",
    "Line 2, Column 16 - Syntax error - Expected: ) - Found: \"b\"",
)]
#[case(
    "procedure principale()\n  pour ( i = 0 , i < 3 ; ) x = 1 ; finpour\nfinproc\n",
    "Line 2, Column 16 - Syntax error - Expected: ; - Found: ,",
)]
#[case(
    "fonction principale() finproc",
    "Line 1, Column 1 - Syntax error - Expected: procedure - Found: fonction",
)]
fn first_error_message(#[case] input: &str, #[case] expected: &str) {
    let diagnostics = parse_error(input);
    assert_eq!(diagnostics[0].to_string(), expected);
}

#[test]
fn every_broken_instruction_is_reported() {
    let diagnostics = parse_error(&program("
        a = 1 ;
        b = ) ;
        c = 2 ;
        d = 3 + ;
        ecrire ( a )
    "));

    let found: Vec<&str> = diagnostics.iter().map(|d| d.found.as_str()).collect();
    assert_eq!(found, [")", ";"]);
}

#[test]
fn recovery_terminates_on_truncated_input() {
    let diagnostics = parse_error("procedure principale() si ( x");
    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics[0].found, "<END_OF_INPUT>");
}

#[test]
fn trees_are_deterministic() {
    let input = program("
        pour ( i = 0 ; i < 4 ; i = i + 1 )
            si ( i == 0 ) ecrire ( \"zero\" )
            sinonsi ( non i ou 0 ) lire ( i )
            sinon ecrire ( i * 2 - 1 )
            finsi
        finpour
    ");

    let (first, first_symbols) = parse(&input);
    let (second, second_symbols) = parse(&input);

    assert_eq!(first, second);
    assert_eq!(first_symbols.to_string(), second_symbols.to_string());
}
