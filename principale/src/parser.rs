// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use log::{debug, trace};

use crate::{
    Assignment, BinaryOp, BinaryOperator, CellId, FileLocation, FileRange, ForLoop, IfInstruction, Keyword, Node, Punctuator, Ranged, RepeatUntilLoop, RichIfArm, SymbolTable, Token, TokenKind, WhileLoop, WriteItem
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser for one `procedure principale() ... finproc`
/// program. Variables and literals are interned into the parser's own
/// [`SymbolTable`], which is handed over with [`Parser::into_symbol_table`].
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    symbols: SymbolTable,
    diagnostics: Vec<ParseError>,
    end_of_input_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let end = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            tokens,
            cursor: 0,
            symbols: SymbolTable::new(),
            diagnostics: Vec::new(),
            end_of_input_token: Token {
                kind: TokenKind::EndOfInput,
                begin: end,
                end,
            },
        }
    }

    /// `program := "procedure" "principale" "(" ")" seqInst "finproc" END_OF_INPUT`
    ///
    /// Fails with the first syntax error found. An instruction that fails to
    /// parse does not stop the parser: it skips ahead and keeps looking for
    /// errors, but the resulting tree is discarded.
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        let result = self.parse_program_rule();

        if let Err(error) = &result {
            if self.diagnostics.last() != Some(error) {
                self.diagnostics.push(error.clone());
            }
        }

        match self.diagnostics.first() {
            Some(first) => Err(first.clone()),
            None => result,
        }
    }

    fn parse_program_rule(&mut self) -> ParseResult<Node> {
        self.expect_keyword(Keyword::Procedure)?;
        self.expect_keyword(Keyword::Principale)?;
        self.expect_punctuator(Punctuator::LeftParenthesis)?;
        self.expect_punctuator(Punctuator::RightParenthesis)?;

        let sequence = self.parse_instruction_sequence()?;

        self.expect_keyword(Keyword::Finproc)?;

        if self.peek_token().kind != TokenKind::EndOfInput {
            return Err(self.error_expected(TokenKind::EndOfInput.category()));
        }

        Ok(sequence)
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseError> {
        self.diagnostics
    }

    #[must_use]
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    #[must_use]
    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbols
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().kind == TokenKind::EndOfInput
    }

    /// `seqInst := inst { inst }`
    fn parse_instruction_sequence(&mut self) -> ParseResult<Node> {
        let mut instructions = Vec::new();

        loop {
            instructions.push(self.parse_instruction()?);

            if !self.at_instruction_start() {
                break;
            }
        }

        Ok(Node::Sequence(instructions))
    }

    fn at_instruction_start(&self) -> bool {
        matches!(
            self.peek_token().kind,
            TokenKind::Variable(..)
                | TokenKind::Keyword(Keyword::Si)
                | TokenKind::Keyword(Keyword::Repeter)
                | TokenKind::Keyword(Keyword::Tantque)
                | TokenKind::Keyword(Keyword::Pour)
                | TokenKind::Keyword(Keyword::Ecrire)
                | TokenKind::Keyword(Keyword::Lire)
        )
    }

    /// Parses one instruction, recovering from syntax errors by skipping the
    /// offending token and everything up to the next token that can start an
    /// instruction. The error is recorded and the program will not run.
    ///
    /// Every retry consumes at least one token, so this always terminates;
    /// once the end of input is reached the error is returned.
    fn parse_instruction(&mut self) -> ParseResult<Node> {
        loop {
            let error = match self.parse_instruction_kind() {
                Ok(instruction) => {
                    trace!("Parsed instruction {}", instruction.name());
                    return Ok(instruction);
                }
                Err(error) => error,
            };

            debug!("{error} => instruction discarded, abstract tree emptied");
            if self.diagnostics.last() != Some(&error) {
                self.diagnostics.push(error.clone());
            }

            if self.is_at_end() {
                return Err(error);
            }

            _ = self.consume_token();
            while !self.is_at_end() && !self.at_instruction_start() {
                _ = self.consume_token();
            }

            if self.is_at_end() {
                return Err(error);
            }
        }
    }

    /// `inst := assignment ";" | ifInst | repeatInst | whileInst | forInst | writeInst | readInst`
    fn parse_instruction_kind(&mut self) -> ParseResult<Node> {
        match self.peek_token().kind {
            TokenKind::Variable(..) => {
                let assignment = self.parse_assignment()?;
                self.expect_punctuator(Punctuator::Semicolon)?;
                Ok(Node::Assignment(assignment))
            }

            TokenKind::Keyword(Keyword::Si) => self.parse_if_instruction(),
            TokenKind::Keyword(Keyword::Repeter) => self.parse_repeat_instruction(),
            TokenKind::Keyword(Keyword::Tantque) => self.parse_while_instruction(),
            TokenKind::Keyword(Keyword::Pour) => self.parse_for_instruction(),
            TokenKind::Keyword(Keyword::Ecrire) => self.parse_write_instruction(),
            TokenKind::Keyword(Keyword::Lire) => self.parse_read_instruction(),

            _ => Err(self.error_message("Invalid instruction")),
        }
    }

    /// `assignment := VARIABLE "=" expression`
    fn parse_assignment(&mut self) -> ParseResult<Assignment> {
        let target = self.expect_variable()?;
        self.expect_punctuator(Punctuator::Assignment)?;
        let expression = self.parse_expression()?;

        Ok(Assignment {
            target,
            expression: Box::new(expression),
        })
    }

    /// `expression := factor { binOp factor }`
    ///
    /// There is no precedence: `2 + 3 * 4` is `(2 + 3) * 4`.
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        let mut expression = self.parse_factor()?;

        while let Some(operator) = BinaryOperator::from_token_kind(&self.peek_token().kind) {
            let operator_range = self.consume_token().range();
            let rhs = self.parse_factor()?;

            expression = Node::BinaryOp(BinaryOp {
                operator: Ranged::new(operator_range, operator),
                lhs: Box::new(expression),
                rhs: Some(Box::new(rhs)),
            });
        }

        Ok(expression)
    }

    /// `factor := VARIABLE | INTEGER | "-" factor | "non" factor | "(" expression ")"`
    fn parse_factor(&mut self) -> ParseResult<Node> {
        let token = self.peek_token().clone();

        match &token.kind {
            TokenKind::Variable(name) => {
                _ = self.consume_token();
                Ok(Node::Cell(self.symbols.intern_variable(name)))
            }

            TokenKind::Integer { text, value } => {
                _ = self.consume_token();
                Ok(Node::Cell(self.symbols.intern_literal(text, *value)))
            }

            TokenKind::Punctuator(Punctuator::HyphenMinus) => {
                _ = self.consume_token();
                let zero = self.symbols.intern_literal("0", 0);
                let operand = self.parse_factor()?;

                Ok(Node::BinaryOp(BinaryOp {
                    operator: Ranged::new(token.range(), BinaryOperator::Subtract),
                    lhs: Box::new(Node::Cell(zero)),
                    rhs: Some(Box::new(operand)),
                }))
            }

            TokenKind::Keyword(Keyword::Non) => {
                _ = self.consume_token();
                let operand = self.parse_factor()?;

                Ok(Node::BinaryOp(BinaryOp {
                    operator: Ranged::new(token.range(), BinaryOperator::Not),
                    lhs: Box::new(operand),
                    rhs: None,
                }))
            }

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                _ = self.consume_token();
                let expression = self.parse_expression()?;
                self.expect_punctuator(Punctuator::RightParenthesis)?;
                Ok(expression)
            }

            _ => Err(self.error_message("Invalid factor")),
        }
    }

    /// `ifInst := "si" "(" expression ")" seqInst ( richIfTail | "finsi" )`
    fn parse_if_instruction(&mut self) -> ParseResult<Node> {
        self.expect_keyword(Keyword::Si)?;
        let condition = self.parse_parenthesized_condition()?;
        let body = self.parse_instruction_sequence()?;

        if !self.peek_token().kind.is_keyword(Keyword::Sinonsi) && !self.peek_token().kind.is_keyword(Keyword::Sinon) {
            self.expect_keyword(Keyword::Finsi)?;

            return Ok(Node::If(IfInstruction {
                condition: Box::new(condition),
                body: Box::new(body),
            }));
        }

        let mut arms = vec![RichIfArm {
            condition: Some(condition),
            body,
        }];

        self.parse_rich_if_tail(&mut arms)?;

        Ok(Node::RichIf(arms))
    }

    /// `richIfTail := { "sinonsi" "(" expression ")" seqInst } [ "sinon" seqInst ] "finsi"`
    fn parse_rich_if_tail(&mut self, arms: &mut Vec<RichIfArm>) -> ParseResult<()> {
        while self.peek_token().kind.is_keyword(Keyword::Sinonsi) {
            _ = self.consume_token();
            let condition = self.parse_parenthesized_condition()?;
            let body = self.parse_instruction_sequence()?;

            arms.push(RichIfArm {
                condition: Some(condition),
                body,
            });
        }

        if self.peek_token().kind.is_keyword(Keyword::Sinon) {
            _ = self.consume_token();
            let body = self.parse_instruction_sequence()?;

            arms.push(RichIfArm {
                condition: None,
                body,
            });
        }

        self.expect_keyword(Keyword::Finsi)?;
        Ok(())
    }

    /// `repeatInst := "repeter" seqInst "jusqua" "(" expression ")"`
    fn parse_repeat_instruction(&mut self) -> ParseResult<Node> {
        self.expect_keyword(Keyword::Repeter)?;
        let body = self.parse_instruction_sequence()?;
        self.expect_keyword(Keyword::Jusqua)?;
        let condition = self.parse_parenthesized_condition()?;

        Ok(Node::RepeatUntil(RepeatUntilLoop {
            body: Box::new(body),
            condition: Box::new(condition),
        }))
    }

    /// `whileInst := "tantque" "(" expression ")" seqInst "fintantque"`
    fn parse_while_instruction(&mut self) -> ParseResult<Node> {
        self.expect_keyword(Keyword::Tantque)?;
        let condition = self.parse_parenthesized_condition()?;
        let body = self.parse_instruction_sequence()?;
        self.expect_keyword(Keyword::Fintantque)?;

        Ok(Node::While(WhileLoop {
            condition: Box::new(condition),
            body: Box::new(body),
        }))
    }

    /// `forInst := "pour" "(" [assignment] ";" expression ";" [assignment] ")" seqInst "finpour"`
    fn parse_for_instruction(&mut self) -> ParseResult<Node> {
        self.expect_keyword(Keyword::Pour)?;
        self.expect_punctuator(Punctuator::LeftParenthesis)?;

        let init = if self.peek_token().kind.is_punctuator(Punctuator::Semicolon) {
            None
        } else {
            Some(self.parse_assignment()?)
        };
        self.expect_punctuator(Punctuator::Semicolon)?;

        let condition = self.parse_expression()?;
        self.expect_punctuator(Punctuator::Semicolon)?;

        let step = if self.peek_token().kind.is_punctuator(Punctuator::RightParenthesis) {
            None
        } else {
            Some(self.parse_assignment()?)
        };
        self.expect_punctuator(Punctuator::RightParenthesis)?;

        let body = self.parse_instruction_sequence()?;
        self.expect_keyword(Keyword::Finpour)?;

        Ok(Node::For(ForLoop {
            init,
            condition: Box::new(condition),
            step,
            body: Box::new(body),
        }))
    }

    /// `readInst := "lire" "(" VARIABLE { "," VARIABLE } ")"`
    fn parse_read_instruction(&mut self) -> ParseResult<Node> {
        self.expect_keyword(Keyword::Lire)?;
        self.expect_punctuator(Punctuator::LeftParenthesis)?;

        let mut variables = vec![self.expect_variable()?];
        while self.peek_token().kind.is_punctuator(Punctuator::Comma) {
            _ = self.consume_token();
            variables.push(self.expect_variable()?);
        }

        self.expect_punctuator(Punctuator::RightParenthesis)?;
        Ok(Node::Read(variables))
    }

    /// `writeInst := "ecrire" "(" (expression|STRING) { "," (expression|STRING) } ")"`
    fn parse_write_instruction(&mut self) -> ParseResult<Node> {
        self.expect_keyword(Keyword::Ecrire)?;
        self.expect_punctuator(Punctuator::LeftParenthesis)?;

        let mut items = vec![self.parse_write_item()?];
        while self.peek_token().kind.is_punctuator(Punctuator::Comma) {
            _ = self.consume_token();
            items.push(self.parse_write_item()?);
        }

        self.expect_punctuator(Punctuator::RightParenthesis)?;
        Ok(Node::Write(items))
    }

    fn parse_write_item(&mut self) -> ParseResult<WriteItem> {
        if let TokenKind::StringLiteral(str) = &self.peek_token().kind {
            let str = str.clone();
            _ = self.consume_token();
            return Ok(WriteItem::String(str));
        }

        Ok(WriteItem::Expression(self.parse_expression()?))
    }

    fn parse_parenthesized_condition(&mut self) -> ParseResult<Node> {
        self.expect_punctuator(Punctuator::LeftParenthesis)?;
        let condition = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RightParenthesis)?;
        Ok(condition)
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_input_token)
    }

    /// Consumes the current token. The end of input is never consumed.
    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();
        if token.kind != TokenKind::EndOfInput {
            self.cursor += 1;
        }
        token
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        if !self.peek_token().kind.is_keyword(keyword) {
            return Err(self.error_expected(keyword.as_ref()));
        }

        _ = self.consume_token();
        Ok(())
    }

    fn expect_punctuator(&mut self, punctuator: Punctuator) -> ParseResult<()> {
        if !self.peek_token().kind.is_punctuator(punctuator) {
            return Err(self.error_expected(punctuator.as_str()));
        }

        _ = self.consume_token();
        Ok(())
    }

    fn expect_variable(&mut self) -> ParseResult<CellId> {
        let Some(name) = self.peek_token().as_variable().map(str::to_string) else {
            return Err(self.error_expected("<VARIABLE>"));
        };

        let id = self.symbols.intern_variable(&name);
        _ = self.consume_token();
        Ok(id)
    }

    fn error_expected(&self, symbol: &str) -> ParseError {
        self.error(Expectation::Symbol(symbol.to_string()))
    }

    fn error_message(&self, message: &'static str) -> ParseError {
        self.error(Expectation::Message(message))
    }

    fn error(&self, expectation: Expectation) -> ParseError {
        let token = self.peek_token();

        ParseError {
            location: token.begin,
            range: token.range(),
            expectation,
            found: token.to_string(),
        }
    }
}

/// A syntax error: what the parser wanted at `location`, and what it found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub location: FileLocation,
    pub range: FileRange,
    pub expectation: Expectation,
    pub found: String,
}

impl ParseError {
    #[must_use]
    pub fn range(&self) -> FileRange {
        self.range
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Line {}, Column {} - Syntax error - {} - Found: {}",
            self.location.line() + 1,
            self.location.column() + 1,
            self.expectation,
            self.found,
        ))
    }
}

impl std::error::Error for ParseError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// A single symbol was required, e.g. `finsi` or `<VARIABLE>`.
    Symbol(String),

    /// Several symbols were possible.
    Message(&'static str),
}

impl Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => f.write_fmt(format_args!("Expected: {symbol}")),
            Self::Message(message) => f.write_str(message),
        }
    }
}
