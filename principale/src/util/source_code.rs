// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{ops::Deref, path::{Path, PathBuf}, sync::Arc};

/// The contents of one program file, as handed to the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone)]
pub struct SourceCode {
    path: Arc<PathBuf>,
    contents: Arc<str>,
}

impl SourceCode {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Arc<str>>) -> Self {
        Self {
            path: Arc::new(path.into()),
            contents: contents.into(),
        }
    }

    #[must_use]
    pub fn new_test(contents: &str) -> Self {
        Self::new(PathBuf::new(), contents)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Deref for SourceCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.contents()
    }
}
