//! Tests for pointer hover and press handling.

use super::*;
use crate::layout::{compute_layout, WindowSize};
use crate::model::{Digit, Operator};

// ===== Test Helpers =====

fn base_panel() -> ButtonPanel {
    ButtonPanel::from_layout(&compute_layout(WindowSize::new(500, 760)))
}

fn center_of(panel: &ButtonPanel, label: &str) -> PixelPoint {
    panel
        .buttons()
        .iter()
        .find(|b| b.descriptor.label == label)
        .map(|b| b.descriptor.rect.center())
        .unwrap_or_else(|| panic!("no button labelled {label}"))
}

// ===== Construction =====

#[test]
fn new_panel_has_nothing_hovered() {
    let panel = base_panel();
    assert_eq!(panel.buttons().len(), 17);
    assert_eq!(panel.hovered_label(), None);
}

// ===== pointer_moved =====

#[test]
fn moving_over_button_hovers_only_that_button() {
    let mut panel = base_panel();
    let point = center_of(&panel, "8");

    panel.pointer_moved(point);

    let hovered: Vec<&str> = panel
        .buttons()
        .iter()
        .filter(|b| b.hovered)
        .map(|b| b.descriptor.label)
        .collect();
    assert_eq!(hovered, ["8"]);
}

#[test]
fn moving_into_gap_clears_hover() {
    let mut panel = base_panel();
    panel.pointer_moved(center_of(&panel, "7"));
    assert_eq!(panel.hovered_label(), Some("7"));

    // Gap between "7" (35..120) and "8" (134..219).
    panel.pointer_moved(PixelPoint::new(125, 330));

    assert_eq!(panel.hovered_label(), None);
}

#[test]
fn right_edge_is_exclusive() {
    let mut panel = base_panel();
    panel.pointer_moved(PixelPoint::new(120, 300));
    assert_eq!(panel.hovered_label(), None);

    panel.pointer_moved(PixelPoint::new(119, 300));
    assert_eq!(panel.hovered_label(), Some("7"));
}

#[test]
fn pointer_left_clears_all_hover() {
    let mut panel = base_panel();
    panel.pointer_moved(center_of(&panel, "Plus Tax"));
    panel.pointer_left();
    assert_eq!(panel.hovered_label(), None);
}

// ===== pointer_pressed =====

#[test]
fn press_on_digit_returns_digit_action() {
    let mut panel = base_panel();
    let point = center_of(&panel, "5");
    assert_eq!(
        panel.pointer_pressed(point),
        Some(CalcAction::Digit(Digit::FIVE))
    );
}

#[test]
fn press_on_minus_returns_subtract() {
    let mut panel = base_panel();
    let point = center_of(&panel, "−");
    assert_eq!(
        panel.pointer_pressed(point),
        Some(CalcAction::SetOperator(Operator::Subtract))
    );
}

#[test]
fn press_outside_buttons_returns_none() {
    let mut panel = base_panel();
    assert_eq!(panel.pointer_pressed(PixelPoint::new(5, 5)), None);
}

#[test]
fn press_without_prior_move_still_hits() {
    let mut panel = base_panel();
    let point = center_of(&panel, "Plus Tax");
    assert_eq!(panel.pointer_pressed(point), Some(CalcAction::ApplyTax));
    assert_eq!(panel.hovered_label(), Some("Plus Tax"));
}

#[test]
fn rebuilding_from_layout_drops_hover() {
    let mut panel = base_panel();
    panel.pointer_moved(center_of(&panel, "9"));

    let rebuilt = ButtonPanel::from_layout(&compute_layout(WindowSize::new(1000, 1520)));

    assert_eq!(rebuilt.hovered_label(), None);
    assert_ne!(rebuilt, panel);
}
