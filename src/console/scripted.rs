//! Scripted console provider for tests and non-interactive automation.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::Console;
use crate::error::{Error, Result};

/// Console provider that serves a queued script of input lines.
///
/// Every prompt displayed and every validation message reported is
/// recorded, so callers can assert on the exact re-prompt behavior
/// afterwards. An exhausted script behaves like a closed input stream.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one input line to be served by the next read.
    pub fn with_line(self, line: impl Into<String>) -> Self {
        self.lines.borrow_mut().push_back(line.into());
        self
    }

    /// Prompts displayed so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Validation messages reported so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.lines.borrow_mut().pop_front().ok_or(Error::EndOfInputError)
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
