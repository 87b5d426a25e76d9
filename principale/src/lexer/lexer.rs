// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, str::CharIndices};

use thiserror::Error;

use crate::{FileLocation, Keyword, Punctuator, SourceCode, Token, TokenKind};

pub struct Lexer<'source_code> {
    input: &'source_code SourceCode,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,
    line: usize,
    column: usize,
    errors: Vec<LexerError>,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code SourceCode) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 0,
            column: 0,
            errors: Vec::new(),
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        let ch = self.peek_char()?;
        match ch {
            '"' => self.consume_string(),

            'a'..='z' | 'A'..='Z' | '_' => self.consume_variable_or_keyword(),
            '0'..='9' => self.consume_number(),

            '(' => self.consume_single_char_token(Punctuator::LeftParenthesis),
            ')' => self.consume_single_char_token(Punctuator::RightParenthesis),
            ';' => self.consume_single_char_token(Punctuator::Semicolon),
            ',' => self.consume_single_char_token(Punctuator::Comma),
            '+' => self.consume_single_char_token(Punctuator::PlusSign),
            '-' => self.consume_single_char_token(Punctuator::HyphenMinus),
            '*' => self.consume_single_char_token(Punctuator::Asterisk),
            '/' => self.consume_single_char_token(Punctuator::Solidus),
            '=' => self.consume_with_optional_equals(Punctuator::Assignment, Punctuator::Equals),
            '<' => self.consume_with_optional_equals(Punctuator::LessThan, Punctuator::LessThanOrEqual),
            '>' => self.consume_with_optional_equals(Punctuator::GreaterThan, Punctuator::GreaterThanOrEqual),
            '!' => self.consume_exclamation_mark(),

            _ => {
                let begin = self.current_location();
                self.consume_char();
                let end = self.current_location();
                Some(Token {
                    begin,
                    end,
                    kind: TokenKind::IllegalCharacter(ch),
                })
            }
        }
    }

    /// Scans the whole input. The returned tokens always end with exactly one
    /// [`TokenKind::EndOfInput`].
    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        let end = self.current_location();
        tokens.push(Token {
            kind: TokenKind::EndOfInput,
            begin: end,
            end,
        });

        (tokens, self.errors)
    }

    #[must_use]
    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Option<Token> {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Some(Token {
            kind: TokenKind::Punctuator(punctuator),
            begin,
            end,
        })
    }

    fn consume_with_optional_equals(&mut self, single: Punctuator, with_equals: Punctuator) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        let kind = if self.peek_char() == Some('=') {
            self.consume_char();
            TokenKind::Punctuator(with_equals)
        } else {
            TokenKind::Punctuator(single)
        };

        let end = self.current_location();

        Some(Token {
            kind,
            begin,
            end,
        })
    }

    fn consume_exclamation_mark(&mut self) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        let kind = if self.peek_char() == Some('=') {
            self.consume_char();
            TokenKind::Punctuator(Punctuator::NotEquals)
        } else {
            TokenKind::IllegalCharacter('!')
        };

        let end = self.current_location();

        Some(Token {
            kind,
            begin,
            end,
        })
    }

    fn consume_string(&mut self) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        let offset_begin = self.current_location().offset();
        let mut terminated = false;

        while let Some(c) = self.peek_char() {
            if c == '"' {
                terminated = true;
                break;
            }

            if c == '\n' {
                break;
            }

            self.consume_char();
        }

        let offset_end = self.current_location().offset();
        let str = self.input[offset_begin..offset_end].to_string();

        if terminated {
            self.consume_char();
        } else {
            self.errors.push(LexerError {
                location: begin,
                kind: LexerErrorKind::UnterminatedString,
            });
        }

        let end = self.current_location();

        Some(Token {
            kind: TokenKind::StringLiteral(str),
            begin,
            end,
        })
    }

    fn consume_variable_or_keyword(&mut self) -> Option<Token> {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        let kind = match Keyword::parse(str) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Variable(str.to_string()),
        };

        Some(Token {
            kind,
            begin,
            end,
        })
    }

    fn consume_number(&mut self) -> Option<Token> {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let text = self.input[begin.offset()..end.offset()].to_string();

        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(..) => {
                self.errors.push(LexerError {
                    location: begin,
                    kind: LexerErrorKind::InvalidNumber,
                });
                0
            }
        };

        Some(Token {
            kind: TokenKind::Integer { text, value },
            begin,
            end,
        })
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '#' {
                self.consume_until_end_of_line();
                continue;
            }

            if !c.is_whitespace() {
                break;
            }

            self.consume_char();
        }
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' {
                break;
            }
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.input.len(), self.line, self.column),
        }
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Line {}, Column {} - Lexical error - {}",
            self.location.line() + 1,
            self.location.column() + 1,
            self.kind,
        ))
    }
}

impl std::error::Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexerErrorKind {
    #[error("Invalid number, it does not fit in a 64-bit integer")]
    InvalidNumber,

    #[error("String literal is missing its closing `\"`")]
    UnterminatedString,
}
