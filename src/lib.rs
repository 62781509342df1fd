/// Handles argument parsing.
pub mod cli;

/// Console abstraction for prompting and reading lines.
pub mod console;

/// Prompt error messages and exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Typed readers that re-prompt until the input is valid.
pub mod reader;

/// Input validators.
pub mod validation;
