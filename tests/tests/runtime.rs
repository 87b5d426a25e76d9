// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use principale::RuntimeError;
use tests::{interpret_and_return_error, program};

#[test]
fn division_by_zero_aborts_the_run() {
    let (error, output) = interpret_and_return_error(&program("
        ecrire ( \"avant\" )
        x = 10 / 0 ;
        ecrire ( \"apres\" )
    "));

    assert_eq!(output, ["avant"]);

    let RuntimeError::DivisionByZero { range } = error else {
        panic!("Unexpected error: {error:?}");
    };
    assert_eq!(range.start().line(), 3);
    assert_eq!(range.start().column(), 15);
}

#[test]
fn division_by_zero_inside_a_loop() {
    let (error, output) = interpret_and_return_error(&program("
        pour ( i = 3 ; i >= 0 ; i = i - 1 )
            ecrire ( 6 / i )
        finpour
    "));

    assert_eq!(output, ["2", "3", "6"]);
    assert_eq!(error.name(), "DivisionByZero");
    assert_eq!(error.to_string(), "Division by zero");
}
