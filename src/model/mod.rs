//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod action;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use action::{CalcAction, Digit, Operator};
pub use error::{DisplayParseError, InvalidDigit};
pub use key_action::KeyAction;
