//! Calculator state machine.
//!
//! Owns the display text and the pending operation and derives the next
//! display on every action. All operations are total: the only fallible step
//! is reading the display as a number, and a failed read leaves the state
//! untouched.

use crate::model::{CalcAction, Digit, DisplayParseError, Operator};
use tracing::debug;

/// Fixed tax surcharge applied by [`Calculator::apply_tax`].
pub const TAX_RATE: f64 = 0.10;

/// Display text after a clear.
const INITIAL_DISPLAY: &str = "0";

/// A started operation waiting for its second operand.
///
/// The first operand and the operator live in one value, so one can never be
/// set without the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

/// Calculator state.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    pending: Option<PendingOperation>,
    reset_on_next_digit: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            reset_on_next_digit: false,
        }
    }

    /// Current display text. Never empty.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Whether the next digit replaces the display instead of extending it.
    pub fn resets_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    /// Human-readable pending expression, e.g. `"5 -"`. Empty when idle.
    pub fn operation_label(&self) -> String {
        match self.pending {
            Some(PendingOperation { operand, operator }) => {
                format!("{} {}", format_number(operand), operator)
            }
            None => String::new(),
        }
    }

    /// Apply an action. This is the single dispatch point for buttons and keys.
    pub fn apply(&mut self, action: CalcAction) {
        debug!(?action, display = %self.display, "Applying calculator action");
        match action {
            CalcAction::Digit(d) => self.append_digit(d),
            CalcAction::Decimal => self.append_decimal(),
            CalcAction::Delete => self.delete_last_char(),
            CalcAction::Clear => self.clear(),
            CalcAction::Evaluate => self.evaluate(),
            CalcAction::SetOperator(op) => self.set_operator(op),
            CalcAction::ApplyTax => self.apply_tax(),
        }
    }

    pub fn append_digit(&mut self, digit: Digit) {
        if self.reset_on_next_digit {
            self.display = digit.to_string();
            self.reset_on_next_digit = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    pub fn append_decimal(&mut self) {
        if self.reset_on_next_digit {
            self.display = "0.".to_string();
            self.reset_on_next_digit = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn delete_last_char(&mut self) {
        self.display.pop();
        if self.display.is_empty() {
            self.display = INITIAL_DISPLAY.to_string();
        }
    }

    pub fn clear(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = None;
        self.reset_on_next_digit = false;
    }

    /// Start an operation with the displayed value as first operand.
    ///
    /// A second operator pressed after new digits evaluates the pending
    /// operation first, so `5 + 3 +` shows the running total `8`.
    pub fn set_operator(&mut self, operator: Operator) {
        if self.pending.is_some() && !self.reset_on_next_digit {
            self.evaluate();
        }

        let operand = match parse_display(&self.display) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, "Ignoring operator on unparseable display");
                return;
            }
        };

        self.pending = Some(PendingOperation { operand, operator });
        self.reset_on_next_digit = true;
    }

    /// Finish the pending operation. No-op when nothing is pending.
    pub fn evaluate(&mut self) {
        let Some(PendingOperation { operand, operator }) = self.pending else {
            return;
        };

        let rhs = match parse_display(&self.display) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, "Ignoring evaluate on unparseable display");
                return;
            }
        };

        self.display = format_number(operator.apply(operand, rhs));
        self.pending = None;
        self.reset_on_next_digit = true;
    }

    /// Replace the display with the value plus 10% tax, two decimals.
    ///
    /// Silently does nothing if the display is not a number.
    pub fn apply_tax(&mut self) {
        let value = match parse_display(&self.display) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, "Ignoring tax on unparseable display");
                return;
            }
        };

        let total = value * (1.0 + TAX_RATE);
        self.display = format!("{total:.2}");
        self.pending = None;
        self.reset_on_next_digit = true;
    }

    /// Build a calculator showing arbitrary display text.
    #[cfg(test)]
    pub(crate) fn with_display(text: &str) -> Self {
        Self {
            display: text.to_string(),
            ..Self::new()
        }
    }
}

/// Read display text as a 64-bit float.
pub fn parse_display(text: &str) -> Result<f64, DisplayParseError> {
    text.parse::<f64>().map_err(|_| DisplayParseError {
        text: text.to_string(),
    })
}

/// Format a computed value for the display.
///
/// Uses the shortest text that parses back to the same `f64`: whole numbers
/// have no fractional part (`10`, not `10.0`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
#[path = "calculator_tests.rs"]
mod tests;
