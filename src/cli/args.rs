use crate::constants::verbosity;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;

/// Readers the demo driver can exercise.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum ReaderKind {
    /// Prompt for a floating-point number.
    Float,
    /// Prompt for a whole number.
    Integer,
    /// Prompt for a free-form line, trimmed on both ends.
    String,
    /// Prompt for a single letter.
    Letter,
}

impl Display for ReaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReaderKind::Float => "float",
            ReaderKind::Integer => "integer",
            ReaderKind::String => "string",
            ReaderKind::Letter => "letter",
        };
        write!(f, "{s}")
    }
}

/// CLI arguments for askline.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Readers to run, in order (omit to run all four).
    #[arg(value_name = "KIND")]
    #[arg(value_enum)]
    pub kinds: Vec<ReaderKind>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_empty_args_to_no_kinds() {
        let args = Args::parse_from(["askline"]);
        assert!(args.kinds.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_kind_list_in_order() {
        let args = Args::parse_from(["askline", "float", "letter", "-vv"]);
        assert_eq!(args.kinds, vec![ReaderKind::Float, ReaderKind::Letter]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn display_reader_kind_variants() {
        assert_eq!(ReaderKind::Float.to_string(), "float");
        assert_eq!(ReaderKind::Integer.to_string(), "integer");
        assert_eq!(ReaderKind::String.to_string(), "string");
        assert_eq!(ReaderKind::Letter.to_string(), "letter");
    }
}
