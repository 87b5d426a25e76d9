// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Punctuator(Punctuator),

    Variable(String),
    Integer {
        text: String,
        value: i64,
    },
    StringLiteral(String),

    IllegalCharacter(char),
    EndOfInput,
}

impl TokenKind {
    /// The category tag of this token, as it appears in syntax diagnostics.
    /// Keywords and punctuators are their own category.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Keyword(keyword) => keyword.as_ref(),
            Self::Punctuator(punctuator) => punctuator.as_str(),

            Self::Variable(..) => "<VARIABLE>",
            Self::Integer { .. } => "<INTEGER>",
            Self::StringLiteral(..) => "<STRING>",

            Self::IllegalCharacter(..) => "<ILLEGAL>",
            Self::EndOfInput => "<END_OF_INPUT>",
        }
    }

    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(k) if *k == keyword)
    }

    #[must_use]
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        matches!(self, Self::Punctuator(p) if *p == punctuator)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Punctuator(punctuator) => punctuator.fmt(f),

            Self::Variable(name) => f.write_str(name),
            Self::Integer { text, .. } => f.write_str(text),
            Self::StringLiteral(str) => f.write_fmt(format_args!("\"{str}\"")),

            Self::IllegalCharacter(ch) => ch.fmt(f),
            Self::EndOfInput => f.write_str("<END_OF_INPUT>"),
        }
    }
}
