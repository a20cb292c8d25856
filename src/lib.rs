//! Tax Calculator (taxcalc)
//!
//! Terminal calculator with addition, subtraction and a one-key 10% tax.
//!
//! Pure core (`model`, `state`, `layout`) and an impure shell (`view`,
//! `config`, `logging`). The shell owns the terminal; the core never sees it.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
