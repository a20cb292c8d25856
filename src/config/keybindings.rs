//! Keyboard bindings configuration.

use crate::model::{CalcAction, Digit, KeyAction, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Character keys match regardless of Shift, since the character already
    /// reflects it (`+` arrives as Shift+`=` on most layouts).
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        self.bindings
            .get(&KeyEvent::new(key.code, modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: impl Into<KeyAction>) {
        self.bindings
            .insert(KeyEvent::new(code, modifiers), action.into());
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Digits
        for value in 0..=9u8 {
            if let Ok(digit) = Digit::new(value) {
                keys.bind(
                    KeyCode::Char(digit.as_char()),
                    KeyModifiers::NONE,
                    CalcAction::Digit(digit),
                );
            }
        }

        // Editing
        keys.bind(KeyCode::Char('.'), KeyModifiers::NONE, CalcAction::Decimal);
        keys.bind(KeyCode::Backspace, KeyModifiers::NONE, CalcAction::Delete);
        keys.bind(KeyCode::Char('c'), KeyModifiers::NONE, CalcAction::Clear);
        keys.bind(KeyCode::Char('C'), KeyModifiers::NONE, CalcAction::Clear);

        // Arithmetic
        keys.bind(
            KeyCode::Char('+'),
            KeyModifiers::NONE,
            CalcAction::SetOperator(Operator::Add),
        );
        keys.bind(
            KeyCode::Char('-'),
            KeyModifiers::NONE,
            CalcAction::SetOperator(Operator::Subtract),
        );
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, CalcAction::Evaluate);

        // Window
        keys.bind(KeyCode::F(11), KeyModifiers::NONE, KeyAction::ToggleFullscreen);

        // Application
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
