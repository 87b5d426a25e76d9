// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{FileLocation, FileRange};

use super::TokenKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub begin: FileLocation,
    pub end: FileLocation,
}

impl Token {
    #[must_use]
    pub fn range(&self) -> FileRange {
        (self.begin, self.end).into()
    }

    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        let TokenKind::Variable(name) = &self.kind else {
            return None;
        };

        Some(name)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}
