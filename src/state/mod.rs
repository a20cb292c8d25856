//! Application state (pure).
//!
//! State transitions are plain methods on owned data; nothing here touches
//! the terminal.

pub mod calculator;
pub mod pointer_handler;

pub use calculator::{format_number, parse_display, Calculator, PendingOperation, TAX_RATE};
pub use pointer_handler::{ButtonPanel, InteractiveButton};
