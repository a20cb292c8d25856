//! Calculator colour scheme.
//!
//! Colours are fixed RGB values; buttons get a normal and a hover colour per
//! [`ColorRole`].

use crate::layout::ColorRole;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag / `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

const BACKGROUND: Color = Color::Rgb(30, 60, 114);
const CALCULATOR_BG: Color = Color::Rgb(255, 255, 255);
const DISPLAY_BG: Color = Color::Rgb(240, 244, 255);
const DISPLAY_AREA_BORDER: Color = Color::Rgb(232, 224, 245);
const DISPLAY_BOX_BORDER: Color = Color::Rgb(224, 213, 245);
const DISPLAY_TEXT: Color = Color::Rgb(30, 60, 114);
const OPERATION_TEXT: Color = Color::Rgb(126, 34, 206);
const BUTTON_TEXT: Color = Color::Rgb(255, 255, 255);

/// `(normal, hover)` background for each button role.
fn role_colors(role: ColorRole) -> (Color, Color) {
    match role {
        ColorRole::Numeral => (Color::Rgb(42, 82, 152), Color::Rgb(30, 60, 114)),
        ColorRole::Operator => (Color::Rgb(126, 34, 206), Color::Rgb(109, 27, 154)),
        ColorRole::Delete => (Color::Rgb(255, 149, 0), Color::Rgb(245, 124, 0)),
        ColorRole::Clear => (Color::Rgb(244, 67, 54), Color::Rgb(211, 47, 47)),
        ColorRole::Equals => (Color::Rgb(0, 200, 83), Color::Rgb(0, 168, 77)),
        ColorRole::Tax => (Color::Rgb(2, 136, 209), Color::Rgb(2, 119, 189)),
    }
}

/// Styles for every element the renderer draws.
///
/// With colours disabled every style is the terminal default, titles stay
/// bold and hovered buttons are drawn reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: ColorConfig,
}

impl Palette {
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn pick(&self, colored: Style) -> Style {
        if self.colors.colors_enabled() {
            colored
        } else {
            Style::default()
        }
    }

    pub fn background(&self) -> Style {
        self.pick(Style::default().bg(BACKGROUND))
    }

    pub fn container(&self) -> Style {
        self.pick(Style::default().bg(CALCULATOR_BG))
    }

    pub fn title(&self) -> Style {
        self.pick(Style::default().fg(DISPLAY_TEXT).bg(CALCULATOR_BG))
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle(&self) -> Style {
        self.pick(Style::default().fg(OPERATION_TEXT).bg(CALCULATOR_BG))
    }

    pub fn display_area(&self) -> Style {
        self.pick(Style::default().bg(DISPLAY_BG))
    }

    pub fn display_area_border(&self) -> Style {
        self.pick(Style::default().fg(DISPLAY_AREA_BORDER).bg(DISPLAY_BG))
    }

    pub fn operation_text(&self) -> Style {
        self.pick(Style::default().fg(OPERATION_TEXT).bg(DISPLAY_BG))
    }

    pub fn display_box(&self) -> Style {
        self.pick(Style::default().bg(CALCULATOR_BG))
    }

    pub fn display_box_border(&self) -> Style {
        self.pick(Style::default().fg(DISPLAY_BOX_BORDER).bg(CALCULATOR_BG))
    }

    pub fn display_text(&self) -> Style {
        self.pick(Style::default().fg(DISPLAY_TEXT).bg(CALCULATOR_BG))
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, role: ColorRole, hovered: bool) -> Style {
        if self.colors.colors_enabled() {
            let (normal, hover) = role_colors(role);
            let bg = if hovered { hover } else { normal };
            Style::default()
                .fg(BUTTON_TEXT)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else if hovered {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }
}
