//! Integration tests driving the typed readers end to end over a scripted
//! console, checking accepted values and the order of prompts and errors.

use askline::console::ScriptedConsole;
use askline::constants::messages;
use askline::error::Error;
use askline::reader::InputReader;
use test_log::test;

#[test]
fn test_float_reader_recovers_after_rejected_input() {
    let console = ScriptedConsole::new().with_line("abc").with_line("3.14");
    let reader = InputReader::new(console);

    let value = reader.read_float("Give me a number> ").unwrap();
    assert_eq!(value, 3.14);

    // One prompt per attempt, one error for the rejected line.
    assert_eq!(reader.console().prompts(), vec!["Give me a number> "; 2]);
    assert_eq!(reader.console().errors(), vec![messages::NOT_A_NUMBER.to_string()]);
}

#[test]
fn test_integer_reader_rejects_fractions_then_accepts() {
    let console = ScriptedConsole::new().with_line("7.5").with_line("7");
    let reader = InputReader::new(console);

    let value = reader.read_integer("Give me an integer> ").unwrap();
    assert_eq!(value, 7);
    assert_eq!(
        reader.console().errors(),
        vec![messages::NOT_AN_INTEGER.to_string()]
    );
}

#[test]
fn test_string_reader_trims_and_keeps_inner_whitespace() {
    let console = ScriptedConsole::new().with_line("  hello world  ");
    let reader = InputReader::new(console);

    let value = reader.read_string("Give me a string> ").unwrap();
    assert_eq!(value, "hello world");
    assert!(reader.console().errors().is_empty());
}

#[test]
fn test_letter_reader_uppercases_and_reports_each_rejection() {
    let console = ScriptedConsole::new()
        .with_line("42")
        .with_line("4")
        .with_line("q");
    let reader = InputReader::new(console);

    let value = reader.read_letter("Give me a letter> ").unwrap();
    assert_eq!(value, 'Q');
    assert_eq!(
        reader.console().errors(),
        vec![
            messages::NOT_ONE_CHARACTER.to_string(),
            messages::NOT_A_LETTER.to_string(),
        ]
    );
}

#[test]
fn test_one_console_serves_several_readers_in_sequence() {
    let console = ScriptedConsole::new()
        .with_line("abc")
        .with_line("3.14")
        .with_line("7.5")
        .with_line("7");
    let reader = InputReader::new(console);

    assert_eq!(reader.read_float("Number> ").unwrap(), 3.14);
    assert_eq!(reader.read_integer("Integer> ").unwrap(), 7);

    assert_eq!(
        reader.console().errors(),
        vec![
            messages::NOT_A_NUMBER.to_string(),
            messages::NOT_AN_INTEGER.to_string(),
        ]
    );
    assert_eq!(
        reader.console().prompts(),
        vec!["Number> ", "Number> ", "Integer> ", "Integer> "]
    );
}

#[test]
fn test_exhausted_console_surfaces_end_of_input() {
    let console = ScriptedConsole::new().with_line("not a number");
    let reader = InputReader::new(console);

    let result = reader.read_float("Number> ");
    assert!(matches!(result, Err(Error::EndOfInputError)));
}
