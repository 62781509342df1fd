//! Typed input readers that re-prompt until the entered line validates.
//!
//! Every reader follows the same cycle: display the prompt, read one line,
//! run the format predicate, and either return the converted value or show
//! a fixed message and ask again. Validation failures never surface to the
//! caller; the only failures a caller sees are end of input and I/O errors.
//!
//! # Examples
//! ```no_run
//! use askline::reader::{read_float, read_letter};
//!
//! let price = read_float("Give me a number> ")?;
//! let choice = read_letter("Pick a letter> ")?;
//! println!("{price} {choice}");
//! # Ok::<(), askline::error::Error>(())
//! ```

use crate::console::{default_console, Console};
use crate::error::Result;
use crate::validation::{self, ValidationError};

/// Drives the prompt/read/validate cycle over a [`Console`] provider.
pub struct InputReader<C: Console> {
    console: C,
}

impl<C: Console> InputReader<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// The underlying console provider.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Prompt for a floating-point number. Integer literals are accepted;
    /// there are no bound checks.
    pub fn read_float(&self, prompt: &str) -> Result<f64> {
        self.read_validated(prompt, validation::parse_float)
    }

    /// Prompt for a whole number. Fractional input is rejected and
    /// re-prompted.
    pub fn read_integer(&self, prompt: &str) -> Result<i64> {
        self.read_validated(prompt, validation::parse_integer)
    }

    /// Prompt once and return the line with surrounding whitespace removed.
    ///
    /// There is no rejection case; the empty string is a valid return
    /// value.
    pub fn read_string(&self, prompt: &str) -> Result<String> {
        let line = self.console.read_line(prompt)?;
        Ok(line.trim().to_string())
    }

    /// Prompt for a single letter, returned uppercased.
    pub fn read_letter(&self, prompt: &str) -> Result<char> {
        self.read_validated(prompt, validation::parse_letter)
    }

    /// Re-prompts until `parse` accepts the entered line.
    fn read_validated<T, F>(&self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            let line = self.console.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => {
                    log::debug!("accepted input {line:?}");
                    return Ok(value);
                }
                Err(err) => {
                    log::debug!("rejected input {line:?}: {err}");
                    self.console.show_error(&err.to_string());
                }
            }
        }
    }
}

/// Prompt on the terminal for a floating-point number.
pub fn read_float(prompt: &str) -> Result<f64> {
    InputReader::new(default_console()).read_float(prompt)
}

/// Prompt on the terminal for a whole number.
pub fn read_integer(prompt: &str) -> Result<i64> {
    InputReader::new(default_console()).read_integer(prompt)
}

/// Prompt on the terminal for a line of text, trimmed on both ends.
pub fn read_string(prompt: &str) -> Result<String> {
    InputReader::new(default_console()).read_string(prompt)
}

/// Prompt on the terminal for a single letter, returned uppercased.
pub fn read_letter(prompt: &str) -> Result<char> {
    InputReader::new(default_console()).read_letter(prompt)
}
