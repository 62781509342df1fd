//! Constants used throughout the askline crate

/// Rejection messages shown before a prompt is re-issued
pub mod messages {
    /// The line did not parse as a floating-point number
    pub const NOT_A_NUMBER: &str = "That is not a number -- please try again";

    /// The line did not parse as a whole number
    pub const NOT_AN_INTEGER: &str = "That is not an integer -- please try again";

    /// The trimmed, uppercased line was not exactly one character
    pub const NOT_ONE_CHARACTER: &str = "Please enter exactly one character";

    /// The single character was outside the A-Z range
    pub const NOT_A_LETTER: &str = "Please enter a letter from the alphabet";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
