// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

/// Where `lire` and `ecrire` print to. Every printed item is one line.
pub trait Console {
    fn print_line(&mut self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();

        // A closed stdout is not the program's fault, keep running.
        _ = writeln!(stdout, "{line}");
        _ = stdout.flush();
    }
}

impl Console for Vec<String> {
    fn print_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
