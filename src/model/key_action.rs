//! Domain-level keyboard actions independent of key bindings.

use super::action::CalcAction;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Forward an action to the calculator. Default: digits, `.`, Backspace,
    /// `c`, Enter, `+`, `-`
    Calculator(CalcAction),
    /// Switch between windowed and fullscreen layout. Default: F11
    ToggleFullscreen,
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,
}

impl From<CalcAction> for KeyAction {
    fn from(action: CalcAction) -> Self {
        KeyAction::Calculator(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operator;

    #[test]
    fn calc_action_converts_into_calculator_variant() {
        let action: KeyAction = CalcAction::SetOperator(Operator::Add).into();
        assert_eq!(
            action,
            KeyAction::Calculator(CalcAction::SetOperator(Operator::Add))
        );
    }

    #[test]
    fn toggle_fullscreen_not_equals_quit() {
        assert_ne!(KeyAction::ToggleFullscreen, KeyAction::Quit);
    }
}
