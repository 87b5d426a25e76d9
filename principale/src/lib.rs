// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod console;
mod error;
mod evaluator;
mod lexer;
mod parser;
mod symbol_table;
mod util;

pub use self::{
    ast::{Assignment, BinaryOp, BinaryOperator, ForLoop, IfInstruction, Node, RepeatUntilLoop, RichIfArm, WhileLoop, WriteItem},
    console::{Console, StdoutConsole},
    error::RuntimeError,
    evaluator::{is_truthy, EvaluationResult, Evaluator},
    lexer::{Keyword, Lexer, LexerError, LexerErrorKind, Punctuator, Token, TokenKind},
    parser::{Expectation, ParseError, ParseResult, Parser},
    symbol_table::{Cell, CellId, CellKind, SymbolTable},
    util::{FileLocation, FileRange, Ranged, SourceCode},
};
