// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::{interpret_and_return_stdout, program};

#[rstest]
#[case(
    r#"
        ecrire ( "Bonjour !" )
    "#,
    &[
        "Bonjour !",
    ],
)]
#[case(
    r#"
        a = 5 ;
        ecrire ( "a = " , a )
    "#,
    &[
        "a = ",
        "5",
    ],
)]
#[case(
    r#"
        pour ( i = 0 ; i <= 2 ; i = i + 1 )
            ecrire ( i )
        finpour
    "#,
    &[
        "0",
        "1",
        "2",
    ],
)]
#[case(
    r#"
        i = 0 ;
        tantque ( i < 10 )
            ecrire ( i * 5 )
            i = i + 1 ;
        fintantque
    "#,
    &[
        "0",
        "5",
        "10",
        "15",
        "20",
        "25",
        "30",
        "35",
        "40",
        "45",
    ],
)]
#[case(
    r#"
        n = 0 ;
        repeter
            n = n + 1 ;
        jusqua ( 1 )
        ecrire ( n )
    "#,
    &[
        "1",
    ],
)]
#[case(
    r#"
        x = 5 ;
        y = x ;
        x = 9 ;
        lire ( x , y )
    "#,
    &[
        "9",
        "5",
    ],
)]
#[case(
    r#"
        # factorielle de 5
        n = 5 ;
        resultat = 1 ;
        tantque ( n > 1 )
            resultat = resultat * n ;
            n = n - 1 ;
        fintantque
        ecrire ( resultat )
    "#,
    &[
        "120",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] body: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(&program(body)), expected);
}

#[rstest]
#[case(-1, "negatif")]
#[case(0, "nul")]
#[case(1, "petit")]
#[case(100, "grand")]
fn rich_if_picks_first_true_arm(#[case] x: i64, #[case] expected: &str) {
    let body = format!(r#"
        x = {x} ;
        si ( x < 0 )
            ecrire ( "negatif" )
        sinonsi ( x == 0 )
            ecrire ( "nul" )
        sinonsi ( x < 10 )
            ecrire ( "petit" )
        sinon
            ecrire ( "grand" )
        finsi
    "#);

    assert_eq!(interpret_and_return_stdout(&program(&body)), [expected]);
}

#[test]
fn nested_loops() {
    let output = interpret_and_return_stdout(&program("
        pour ( i = 1 ; i <= 2 ; i = i + 1 )
            pour ( j = 1 ; j <= 2 ; j = j + 1 )
                ecrire ( i * 10 + j )
            finpour
        finpour
    "));

    assert_eq!(output, ["11", "12", "21", "22"]);
}
