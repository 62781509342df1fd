use std::fmt::Display;

use crate::constants::messages;

/// Reason an entered line was rejected by one of the readers.
///
/// The `Display` implementation renders the exact message shown to the user
/// before the prompt is re-issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NotANumber,
    NotAnInteger,
    NotOneCharacter,
    NotALetter,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::NotANumber => messages::NOT_A_NUMBER,
            Self::NotAnInteger => messages::NOT_AN_INTEGER,
            Self::NotOneCharacter => messages::NOT_ONE_CHARACTER,
            Self::NotALetter => messages::NOT_A_LETTER,
        };
        write!(f, "{message}")
    }
}

/// Parse a line as a floating-point number.
///
/// Accepts everything `f64::from_str` accepts, integer literals included.
/// Surrounding whitespace is ignored.
pub fn parse_float(line: &str) -> Result<f64, ValidationError> {
    line.trim().parse().map_err(|_| ValidationError::NotANumber)
}

/// Parse a line as a whole number. Fractional input is rejected.
pub fn parse_integer(line: &str) -> Result<i64, ValidationError> {
    line.trim().parse().map_err(|_| ValidationError::NotAnInteger)
}

/// Normalize a line to a single uppercase letter in `'A'..='Z'`.
///
/// The line is trimmed and uppercased before the length check, so input
/// whose uppercase form expands to more than one character is rejected as
/// not being one character.
pub fn parse_letter(line: &str) -> Result<char, ValidationError> {
    let upper = line.trim().to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Ok(letter),
        (Some(_), None) => Err(ValidationError::NotALetter),
        _ => Err(ValidationError::NotOneCharacter),
    }
}
