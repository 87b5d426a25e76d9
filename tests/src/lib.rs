// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use principale::{EvaluationResult, Evaluator, Lexer, Node, ParseError, Parser, RuntimeError, SourceCode, SymbolTable, Token};

fn lex(input: &str) -> Vec<Token> {
    let source_code = SourceCode::new_test(input);
    let (tokens, errors) = Lexer::new(&source_code).collect_all();
    assert!(errors.is_empty(), "Lexer errors: {errors:#?}");
    tokens
}

pub fn parse(input: &str) -> (Node, SymbolTable) {
    let tokens = lex(input);
    let mut parser = Parser::new(&tokens);

    let tree = match parser.parse_program() {
        Ok(tree) => tree,
        Err(e) => panic!("Failed to parse: {e}"),
    };

    (tree, parser.into_symbol_table())
}

/// Runs `input`, which must be a whole program, and returns what it printed.
pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    match interpret(input) {
        Ok(output) => output,
        Err((e, _)) => panic!("Runtime error: {e}"),
    }
}

/// Runs `input` until it fails, returning the error and what was printed before.
pub fn interpret_and_return_error(input: &str) -> (RuntimeError, Vec<String>) {
    match interpret(input) {
        Ok(output) => panic!("Program completed, printed: {output:#?}"),
        Err(e) => e,
    }
}

fn interpret(input: &str) -> Result<Vec<String>, (RuntimeError, Vec<String>)> {
    let (tree, mut symbols) = parse(input);

    let mut evaluator = Evaluator::new(&mut symbols, Vec::new());
    let result = evaluator.evaluate(&tree);
    let output = evaluator.into_console();

    match result {
        Ok(..) => Ok(output),
        Err(e) => Err((e, output)),
    }
}

pub fn interpret_expression(input: &str) -> EvaluationResult {
    let tokens = lex(input);
    let mut parser = Parser::new(&tokens);

    let expression = match parser.parse_expression() {
        Ok(expression) => expression,
        Err(e) => panic!("Failed to parse: {e}"),
    };
    assert!(parser.is_at_end());

    let mut symbols = parser.into_symbol_table();
    Evaluator::new(&mut symbols, Vec::new()).evaluate(&expression)
}

/// Parses `input`, which must fail, and returns every diagnostic; the first
/// one is the error the program fails with.
pub fn parse_error(input: &str) -> Vec<ParseError> {
    let tokens = lex(input);
    let mut parser = Parser::new(&tokens);

    if let Ok(tree) = parser.parse_program() {
        panic!("Parsed successfully: {tree:#?}");
    }

    parser.into_diagnostics()
}

/// Wraps `body` in `procedure principale() ... finproc`.
#[must_use]
pub fn program(body: &str) -> String {
    format!("procedure principale()\n{body}\nfinproc\n")
}
