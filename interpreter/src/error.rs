// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use principale::{FileRange, SourceCode};
use colored::{Color, ColoredString, Colorize};

/// Prints a diagnostic with the offending source line and a caret under the
/// failing token.
pub struct ErrorPrinter {
    source_code: SourceCode,
    range: FileRange,
    label: Option<&'static str>,
    message: String,
    hint: Option<String>,

    color: Color,
    line_number: ColoredString,
}

impl ErrorPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(source_code: &SourceCode, range: FileRange, message: impl Display) -> Self {
        Self {
            source_code: source_code.clone(),
            range,
            label: None,
            message: message.to_string(),
            hint: None,

            color: Color::Red,
            line_number: format!("{}", range.start().line() + 1).blue().bold(),
        }
    }

    /// Prefixes the message with e.g. `error:`. Scanner and syntax messages
    /// already say what they are and go without.
    #[must_use]
    pub fn label(self, label: &'static str) -> Self {
        Self {
            label: Some(label),
            ..self
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        self.print_prelude();

        self.print_lines();

        self.print_postlude();
    }

    fn print_prelude(&self) {
        match self.label {
            Some(label) => eprintln!("{}: {}", label.color(self.color).bold(), self.message.bold()),
            None => eprintln!("{}", self.message.color(self.color).bold()),
        }

        eprintln!();
    }

    fn print_lines(&self) {
        let lines: Vec<&str> = self.source_code.lines().skip(self.range.start().line().saturating_sub(1)).take(3).collect();

        // The range may sit on the line after the last newline, e.g. the end of input.
        let (before, primary, after) = if self.range.start().line() == 0 {
            (None, lines.first(), lines.get(1))
        } else {
            (lines.first(), lines.get(1), lines.get(2))
        };

        if let Some(line) = before {
            if !line.trim().is_empty() {
                self.print_line(false, line);
            }
        }

        match primary {
            Some(line) => self.print_line(true, line),
            None => self.print_line(true, ""),
        }

        self.print_error_indicator();

        if let Some(line) = after {
            self.print_line(false, line);
        }
    }

    fn print_line(&self, is_primary: bool, line: &str) {
        self.print_line_prefix(is_primary);
        eprintln!("{line}");
    }

    fn print_error_indicator(&self) {
        let spaces = " ".repeat(self.range.start().column());
        let caret = "^".color(self.color).bold();
        let tildes = "~".repeat(self.range.len().saturating_sub(1)).color(self.color);

        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").color(self.color).bold(),
            None => "".bold(),
        };

        self.print_line_prefix(false);
        eprintln!("{spaces}{caret}{tildes} {hint}");
    }

    fn print_line_prefix(&self, is_primary: bool) {
        let separator = " | ".blue().bold();

        if is_primary {
            eprint!("{} {separator}", self.line_number);
        } else {
            eprint!("{} {separator}", " ".repeat(self.line_number.len()));
        }
    }

    fn print_postlude(&self) {
        eprintln!();

        let path = self.source_code.path().display();
        let line = self.range.start().line() + 1;
        let column = self.range.start().column() + 1;

        eprintln!("In {path}:{line}:{column}\n");
    }
}
