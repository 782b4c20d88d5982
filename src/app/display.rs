use std::io::{self, IsTerminal, Write};

use super::Status;

/// Where the session renders: an append-only results panel, a status line
/// and blocking warnings.
pub trait DisplaySink {
    fn append(&mut self, text: &str);
    fn clear(&mut self);
    fn set_status(&mut self, status: &Status);
    fn warn(&mut self, title: &str, message: &str);
}

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Redirected output only gets a blank separator line, never escape codes.
fn clear_sequence(is_terminal: bool) -> &'static str {
    if is_terminal {
        CLEAR_SCREEN
    } else {
        "\n"
    }
}

/// Results on stdout, status line and warnings on stderr.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySink for ConsoleDisplay {
    fn append(&mut self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }

    fn clear(&mut self) {
        let mut stdout = io::stdout();
        let sequence = clear_sequence(stdout.is_terminal());
        let _ = stdout.write_all(sequence.as_bytes());
        let _ = stdout.flush();
    }

    fn set_status(&mut self, status: &Status) {
        eprintln!("[{}]", status);
    }

    fn warn(&mut self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}
