// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod logger;

use std::{path::PathBuf, process::exit};

use anyhow::Context;
use colored::Colorize;
use log::{debug, LevelFilter};
use principale::*;

use self::{
    config::ConfigRoot,
    error::ErrorPrinter,
    logger::Logger,
};

const EXIT_SYNTAX_ERROR: i32 = 1;
const EXIT_RUNTIME_ERROR: i32 = 2;
const EXIT_IO_ERROR: i32 = 3;

/// Runs a `procedure principale()` program.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file of the program.
    file: PathBuf,

    /// Log everything the parser and evaluator do.
    #[arg(short, long)]
    verbose: bool,

    /// Print the symbol table after the program has run.
    #[arg(short, long)]
    symbol_table: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    SyntaxError,
    RuntimeError,
}

impl Outcome {
    const fn exit_code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::SyntaxError => EXIT_SYNTAX_ERROR,
            Self::RuntimeError => EXIT_RUNTIME_ERROR,
        }
    }
}

fn main() {
    let args = Args::parse_args();

    match run(&args) {
        Ok(outcome) => exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), format!("{e:#}").bold());
            exit(EXIT_IO_ERROR);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<Outcome> {
    let config = ConfigRoot::load_next_to(&args.file)?;

    let level = if args.verbose || config.log.debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level);
    debug!("Configuration: {config:?}");

    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let source_code = SourceCode::new(args.file.clone(), contents);

    let Some((tree, mut symbols)) = parse(&source_code) else {
        return Ok(Outcome::SyntaxError);
    };

    let result = Evaluator::new(&mut symbols, StdoutConsole).evaluate(&tree);

    if args.symbol_table || config.execution.show_symbol_table {
        print!("{symbols}");
    }

    match result {
        Ok(..) => Ok(Outcome::Completed),
        Err(e) => {
            print_runtime_error(&source_code, &e);
            Ok(Outcome::RuntimeError)
        }
    }
}

fn parse(source_code: &SourceCode) -> Option<(Node, SymbolTable)> {
    let (tokens, errors) = Lexer::new(source_code).collect_all();

    for e in &errors {
        ErrorPrinter::new(source_code, e.location.as_zero_range(), e).print();
    }

    let mut parser = Parser::new(&tokens);
    let result = parser.parse_program();

    for e in parser.diagnostics() {
        ErrorPrinter::new(source_code, e.range(), e).print();
    }

    let error_count = errors.len() + parser.diagnostics().len();
    if error_count > 1 {
        eprintln!("{}", format!("{error_count} errors found, the program was not run").red().bold());
    }

    match result {
        Ok(tree) if errors.is_empty() => {
            let symbols = parser.into_symbol_table();
            debug!("Parsed program with {} cells", symbols.len());
            Some((tree, symbols))
        }

        _ => None,
    }
}

fn print_runtime_error(source_code: &SourceCode, error: &RuntimeError) {
    let hint = match error {
        RuntimeError::DivisionByZero { .. } => Some("the right-hand side evaluated to 0".to_string()),
        RuntimeError::ForbiddenOperation { .. } => None,
    };

    match error.range() {
        Some(range) => {
            ErrorPrinter::new(source_code, range, error)
                .label("error")
                .hint(hint)
                .print();
        }

        None => eprintln!("{}: {}", "error".red().bold(), error.to_string().bold()),
    }
}
