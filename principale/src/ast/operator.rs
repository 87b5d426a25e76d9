// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use crate::{Keyword, Punctuator, TokenKind};

/// All operators of an expression chain. They share one precedence level and
/// fold from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    Equal,
    NotEqual,
    And,
    Or,

    /// Only has a left-hand side.
    Not,
}

impl BinaryOperator {
    /// The infix operator spelled by `kind`, if any. `non` is not infix and
    /// is therefore never returned.
    #[must_use]
    pub fn from_token_kind(kind: &TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Punctuator(Punctuator::PlusSign) => Self::Add,
            TokenKind::Punctuator(Punctuator::HyphenMinus) => Self::Subtract,
            TokenKind::Punctuator(Punctuator::Asterisk) => Self::Multiply,
            TokenKind::Punctuator(Punctuator::Solidus) => Self::Divide,
            TokenKind::Punctuator(Punctuator::LessThan) => Self::Less,
            TokenKind::Punctuator(Punctuator::GreaterThan) => Self::Greater,
            TokenKind::Punctuator(Punctuator::LessThanOrEqual) => Self::LessOrEqual,
            TokenKind::Punctuator(Punctuator::GreaterThanOrEqual) => Self::GreaterOrEqual,
            TokenKind::Punctuator(Punctuator::Equals) => Self::Equal,
            TokenKind::Punctuator(Punctuator::NotEquals) => Self::NotEqual,
            TokenKind::Keyword(Keyword::Et) => Self::And,
            TokenKind::Keyword(Keyword::Ou) => Self::Or,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "et",
            Self::Or => "ou",
            Self::Not => "non",
        }
    }

    #[must_use]
    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::Not)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
