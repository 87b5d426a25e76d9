// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::AsRefStr;

use crate::FileRange;

/// An error that aborts the run of a program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, AsRefStr)]
pub enum RuntimeError {
    #[error("Division by zero")]
    DivisionByZero { range: FileRange },

    #[error("Forbidden operation: an instruction can only be appended to a sequence, not to a `{node}` node")]
    ForbiddenOperation { node: &'static str },
}

impl RuntimeError {
    /// The source range responsible for the error, when it is known.
    #[must_use]
    pub fn range(&self) -> Option<FileRange> {
        match self {
            Self::DivisionByZero { range } => Some(*range),
            Self::ForbiddenOperation { .. } => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
