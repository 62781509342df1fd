//! Console interaction layer for the input readers.
//!
//! This module separates what is asked from how the terminal is driven.
//!
//! The module is structured in layers:
//! - `Console`: the provider trait, independent of any concrete stream
//! - `stdio`: the interactive provider backed by stdin/stdout
//! - `scripted`: a queued provider for tests and non-interactive automation

use crate::error::Result;

pub mod scripted;
pub mod stdio;

pub use scripted::ScriptedConsole;
pub use stdio::StdioConsole;

/// Abstract interface for prompting a user for one line of input.
pub trait Console {
    /// Display `prompt` and read one line, with the line terminator
    /// stripped. Fails with the end-of-input error once the underlying
    /// input is exhausted.
    fn read_line(&self, prompt: &str) -> Result<String>;

    /// Display one validation message to the user.
    fn show_error(&self, message: &str);
}

/// Convenience function to construct the default interactive console.
pub fn default_console() -> impl Console {
    StdioConsole::new()
}
