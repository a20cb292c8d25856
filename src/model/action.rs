//! Calculator actions and their operand types.
//!
//! Every button and every calculator key binding resolves to one
//! [`CalcAction`], which is applied through a single handler on the
//! calculator state.

use super::error::InvalidDigit;
use std::fmt;

/// A single decimal digit `0..=9`.
/// NEVER export the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const ONE: Digit = Digit(1);
    pub const TWO: Digit = Digit(2);
    pub const THREE: Digit = Digit(3);
    pub const FOUR: Digit = Digit(4);
    pub const FIVE: Digit = Digit(5);
    pub const SIX: Digit = Digit(6);
    pub const SEVEN: Digit = Digit(7);
    pub const EIGHT: Digit = Digit(8);
    pub const NINE: Digit = Digit(9);

    /// Smart constructor: validates the value is a single decimal digit.
    pub fn new(value: u8) -> Result<Self, InvalidDigit> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InvalidDigit::OutOfRange(value))
        }
    }

    /// Parse an ASCII digit character.
    pub fn from_char(c: char) -> Result<Self, InvalidDigit> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InvalidDigit::NotADigit(c))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Binary operators supported by the calculator.
///
/// Only addition and subtraction exist; there is no precedence handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// ASCII symbol used in the operation label.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// User intent on the calculator, independent of how it was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcAction {
    /// Append a digit to the display.
    Digit(Digit),
    /// Append a decimal point.
    Decimal,
    /// Remove the last display character.
    Delete,
    /// Reset the calculator.
    Clear,
    /// Finish the pending operation.
    Evaluate,
    /// Start (or chain) an operation.
    SetOperator(Operator),
    /// Add the fixed 10% tax to the displayed value.
    ApplyTax,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_zero_through_nine() {
        for value in 0..=9 {
            let digit = Digit::new(value).expect("valid digit");
            assert_eq!(digit.value(), value);
        }
    }

    #[test]
    fn digit_rejects_ten() {
        assert!(matches!(Digit::new(10), Err(InvalidDigit::OutOfRange(10))));
    }

    #[test]
    fn digit_from_char_round_trips_display() {
        let digit = Digit::from_char('7').unwrap();
        assert_eq!(digit, Digit::SEVEN);
        assert_eq!(digit.to_string(), "7");
    }

    #[test]
    fn digit_from_char_rejects_letters() {
        assert!(matches!(
            Digit::from_char('x'),
            Err(InvalidDigit::NotADigit('x'))
        ));
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Subtract.to_string(), "-");
    }

    #[test]
    fn operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
    }
}
