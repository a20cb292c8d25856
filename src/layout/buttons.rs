//! Button grid definition and descriptors.

use super::geometry::PixelRect;
use crate::model::{CalcAction, Digit, Operator};

/// Colour family of a button; the view maps each role to a normal and a
/// hover colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Numeral,
    Operator,
    Delete,
    Clear,
    Equals,
    Tax,
}

/// Static description of one grid button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub role: ColorRole,
    pub action: CalcAction,
}

const fn numeral(label: &'static str, digit: Digit) -> ButtonSpec {
    ButtonSpec {
        label,
        role: ColorRole::Numeral,
        action: CalcAction::Digit(digit),
    }
}

const fn operator(label: &'static str, op: Operator) -> ButtonSpec {
    ButtonSpec {
        label,
        role: ColorRole::Operator,
        action: CalcAction::SetOperator(op),
    }
}

/// The 4×4 grid, left to right, top to bottom.
pub const BUTTON_GRID: [[ButtonSpec; 4]; 4] = [
    [
        numeral("7", Digit::SEVEN),
        numeral("8", Digit::EIGHT),
        numeral("9", Digit::NINE),
        ButtonSpec {
            label: "DEL",
            role: ColorRole::Delete,
            action: CalcAction::Delete,
        },
    ],
    [
        numeral("4", Digit::FOUR),
        numeral("5", Digit::FIVE),
        numeral("6", Digit::SIX),
        operator("−", Operator::Subtract),
    ],
    [
        numeral("1", Digit::ONE),
        numeral("2", Digit::TWO),
        numeral("3", Digit::THREE),
        operator("+", Operator::Add),
    ],
    [
        numeral("0", Digit::ZERO),
        ButtonSpec {
            label: ".",
            role: ColorRole::Operator,
            action: CalcAction::Decimal,
        },
        ButtonSpec {
            label: "Clear",
            role: ColorRole::Clear,
            action: CalcAction::Clear,
        },
        ButtonSpec {
            label: "=",
            role: ColorRole::Equals,
            action: CalcAction::Evaluate,
        },
    ],
];

/// Full-width button below the grid.
pub const TAX_BUTTON: ButtonSpec = ButtonSpec {
    label: "Plus Tax",
    role: ColorRole::Tax,
    action: CalcAction::ApplyTax,
};

/// A button placed on screen. Rebuilt with every layout, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub label: &'static str,
    pub rect: PixelRect,
    pub role: ColorRole,
    pub action: CalcAction,
}

impl ButtonDescriptor {
    pub fn place(spec: &ButtonSpec, rect: PixelRect) -> Self {
        Self {
            label: spec.label,
            rect,
            role: spec.role,
            action: spec.action,
        }
    }
}
