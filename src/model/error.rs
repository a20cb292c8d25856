//! Error types for the calculator domain.
//!
//! Neither error reaches the user: an unparseable display turns the
//! requested operation into a no-op, and an invalid digit never gets past
//! the key binding layer.

use thiserror::Error;

/// The display text could not be read as a number.
///
/// This only happens for display text the state machine itself produced,
/// such as a lone `-` left behind after deleting the digit of a negative
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Display text {text:?} is not a number")]
pub struct DisplayParseError {
    /// The offending display text.
    pub text: String,
}

/// A value that is not a single decimal digit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDigit {
    #[error("Digit value {0} is out of range 0..=9")]
    OutOfRange(u8),

    #[error("Character {0:?} is not a decimal digit")]
    NotADigit(char),
}
