//! Scale-aware layout computation.
//!
//! [`compute_layout`] is a pure function of the window size. Every base
//! measurement below is in design pixels for a 500×760 window and is scaled
//! uniformly, truncating towards zero, with floors where small windows would
//! otherwise become illegible.

use super::buttons::{ButtonDescriptor, BUTTON_GRID, TAX_BUTTON};
use super::geometry::{PixelPoint, PixelRect, WindowSize};

/// Design width the base measurements refer to.
pub const BASE_WIDTH: u32 = 500;
/// Design height the base measurements refer to.
pub const BASE_HEIGHT: u32 = 760;

const CONTAINER_WIDTH: i32 = 450;
const CONTAINER_HEIGHT: i32 = 660;

const BUTTON_WIDTH: i32 = 85;
const BUTTON_HEIGHT: i32 = 65;
const BUTTON_GAP: i32 = 14;
const MIN_BUTTON_WIDTH: i32 = 40;
const MIN_BUTTON_HEIGHT: i32 = 30;
const MIN_BUTTON_GAP: i32 = 6;
/// Grid origin relative to the container.
const GRID_OFFSET: (i32, i32) = (10, 250);

/// Display area relative to the container.
const DISPLAY_AREA: (i32, i32, i32, i32) = (25, 100, 400, 120);
/// Inset of the display box inside the display area.
const DISPLAY_BOX_INSET: (i32, i32) = (15, 50);
const DISPLAY_BOX_HEIGHT: i32 = 60;

/// Font sizes in points, recomputed with the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub title: u16,
    pub subtitle: u16,
    pub display: u16,
    pub operation: u16,
    pub button: u16,
}

impl FontSizes {
    fn scaled(scale: f64) -> Self {
        Self {
            title: font(48, 24, scale),
            subtitle: font(18, 12, scale),
            display: font(56, 24, scale),
            operation: font(16, 12, scale),
            button: font(28, 14, scale),
        }
    }
}

/// Where text is anchored, derived alongside the rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnchors {
    /// Centre of the title line.
    pub title: PixelPoint,
    /// Centre of the subtitle line.
    pub subtitle: PixelPoint,
    /// Top-right corner of the pending-operation label.
    pub operation: PixelPoint,
    /// Right edge and vertical centre of the display text.
    pub display: PixelPoint,
}

/// Everything the renderer and hit-tester need for one window size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    pub window: WindowSize,
    pub scale: f64,
    pub container: PixelRect,
    pub fonts: FontSizes,
    pub anchors: TextAnchors,
    /// Framed area holding the operation label and the display box.
    pub display_area: PixelRect,
    /// Inner box the current number is drawn in.
    pub display_rect: PixelRect,
    pub buttons: Vec<ButtonDescriptor>,
}

/// Uniform scale that fits the design size into the window.
pub fn scale_for(window: WindowSize) -> f64 {
    let sx = f64::from(window.width) / f64::from(BASE_WIDTH);
    let sy = f64::from(window.height) / f64::from(BASE_HEIGHT);
    sx.min(sy)
}

/// Compute the complete layout for a window.
pub fn compute_layout(window: WindowSize) -> LayoutGeometry {
    let scale = scale_for(window);
    let s = |base: i32| scaled(base, scale);

    let container_width = s(CONTAINER_WIDTH);
    let container_height = s(CONTAINER_HEIGHT);
    let container = PixelRect::new(
        (window.width as i32 - container_width) / 2,
        (window.height as i32 - container_height) / 2,
        container_width,
        container_height,
    );

    let fonts = FontSizes::scaled(scale);

    let (da_x, da_y, da_w, da_h) = DISPLAY_AREA;
    let display_area = PixelRect::new(
        container.x + s(da_x),
        container.y + s(da_y),
        s(da_w),
        s(da_h),
    );
    let (inset_x, inset_y) = DISPLAY_BOX_INSET;
    let display_rect = PixelRect::new(
        display_area.x + s(inset_x),
        display_area.y + s(inset_y),
        display_area.width - s(2 * inset_x),
        s(DISPLAY_BOX_HEIGHT),
    );

    let title_y = container.top() + s(24).max(20);
    let title_bottom = title_y + i32::from(fonts.title) / 2;
    let subtitle_y = title_bottom + s(8).max(8);
    let anchors = TextAnchors {
        title: PixelPoint::new(container.center_x(), title_y),
        subtitle: PixelPoint::new(container.center_x(), subtitle_y),
        operation: PixelPoint::new(display_area.right() - s(5), display_area.top() + s(15)),
        display: PixelPoint::new(display_rect.right() - s(10), display_rect.center_y()),
    };

    let buttons = layout_buttons(container, scale);

    LayoutGeometry {
        window,
        scale,
        container,
        fonts,
        anchors,
        display_area,
        display_rect,
        buttons,
    }
}

/// Place the 4×4 grid row by row, then the full-width tax button.
fn layout_buttons(container: PixelRect, scale: f64) -> Vec<ButtonDescriptor> {
    let width = scaled(BUTTON_WIDTH, scale).max(MIN_BUTTON_WIDTH);
    let height = scaled(BUTTON_HEIGHT, scale).max(MIN_BUTTON_HEIGHT);
    let gap = scaled(BUTTON_GAP, scale).max(MIN_BUTTON_GAP);
    let start_x = container.x + scaled(GRID_OFFSET.0, scale);
    let start_y = container.y + scaled(GRID_OFFSET.1, scale);

    let mut buttons = Vec::with_capacity(BUTTON_GRID.len() * 4 + 1);
    let mut y = start_y;
    for row in &BUTTON_GRID {
        let mut x = start_x;
        for spec in row {
            buttons.push(ButtonDescriptor::place(
                spec,
                PixelRect::new(x, y, width, height),
            ));
            x += width + gap;
        }
        y += height + gap;
    }

    let columns = BUTTON_GRID[0].len() as i32;
    let full_width = width * columns + gap * (columns - 1);
    buttons.push(ButtonDescriptor::place(
        &TAX_BUTTON,
        PixelRect::new(start_x, y, full_width, height),
    ));

    buttons
}

/// `base × scale`, truncated towards zero.
fn scaled(base: i32, scale: f64) -> i32 {
    (f64::from(base) * scale) as i32
}

fn font(base: u16, floor: u16, scale: f64) -> u16 {
    ((f64::from(base) * scale) as u16).max(floor)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
