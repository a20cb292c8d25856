//! Pointer hover and press handling.
//!
//! Pure hit-testing over the current button descriptors. Rendering reads the
//! hover flags but never changes them.

use crate::layout::{ButtonDescriptor, LayoutGeometry, PixelPoint};
use crate::model::CalcAction;

/// One on-screen button and whether the pointer is over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveButton {
    pub descriptor: ButtonDescriptor,
    pub hovered: bool,
}

/// The interactive buttons for one layout.
///
/// Rebuilt from scratch whenever the layout changes, so hover state never
/// outlives the geometry it was computed against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonPanel {
    buttons: Vec<InteractiveButton>,
}

impl ButtonPanel {
    pub fn from_layout(layout: &LayoutGeometry) -> Self {
        Self {
            buttons: layout
                .buttons
                .iter()
                .cloned()
                .map(|descriptor| InteractiveButton {
                    descriptor,
                    hovered: false,
                })
                .collect(),
        }
    }

    pub fn buttons(&self) -> &[InteractiveButton] {
        &self.buttons
    }

    /// Label of the first hovered button, if any.
    pub fn hovered_label(&self) -> Option<&'static str> {
        self.buttons
            .iter()
            .find(|b| b.hovered)
            .map(|b| b.descriptor.label)
    }

    /// Update every hover flag for a pointer at `point` (window pixels).
    pub fn pointer_moved(&mut self, point: PixelPoint) {
        for button in &mut self.buttons {
            button.hovered = button.descriptor.rect.contains(point);
        }
    }

    /// Pointer left the window: nothing is hovered.
    pub fn pointer_left(&mut self) {
        for button in &mut self.buttons {
            button.hovered = false;
        }
    }

    /// Handle a press at `point` and return the action to apply.
    ///
    /// Hover is refreshed at the press position first, so a press without a
    /// preceding move still lands on the button under the pointer.
    pub fn pointer_pressed(&mut self, point: PixelPoint) -> Option<CalcAction> {
        self.pointer_moved(point);
        self.buttons
            .iter()
            .find(|b| b.hovered)
            .map(|b| b.descriptor.action)
    }
}

#[cfg(test)]
#[path = "pointer_handler_tests.rs"]
mod tests;
