//! Interactive console provider backed by standard input and output.

use std::io::{self, Write};

use super::Console;
use crate::error::{Error, Result};

/// Console provider that prompts on stdout and reads lines from stdin.
///
/// The prompt is written without a trailing newline and flushed, so the
/// user types on the same line. Validation messages go to stdout as plain
/// lines.
pub struct StdioConsole;

impl StdioConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn read_line(&self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(Error::EndOfInputError);
        }

        // A final unterminated line still counts as a line.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn show_error(&self, message: &str) {
        println!("{message}");
    }
}
