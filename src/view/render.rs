//! Read-only render pass.
//!
//! Draws the calculator from the current state, layout and hover flags.
//! Nothing here mutates application state.

use super::styles::Palette;
use super::surface::Projection;
use super::window::WINDOW_TITLE;
use crate::layout::{LayoutGeometry, PixelPoint, PixelRect};
use crate::state::{ButtonPanel, Calculator, InteractiveButton};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Subtitle under the window title.
pub const SUBTITLE: &str = "10% Tax Rate";

/// Everything one frame is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub calculator: &'a Calculator,
    pub layout: &'a LayoutGeometry,
    pub panel: &'a ButtonPanel,
    pub projection: Projection,
    pub palette: Palette,
}

/// Render a full frame.
pub fn render_calculator(frame: &mut Frame, scene: &Scene) {
    let area = frame.area();
    let palette = scene.palette;
    let layout = scene.layout;

    fill(frame, area, palette.background());
    fill(
        frame,
        scene.cells(&layout.container, area),
        palette.container(),
    );

    scene.text_centered(frame, layout.anchors.title, WINDOW_TITLE, palette.title());
    scene.text_centered(frame, layout.anchors.subtitle, SUBTITLE, palette.subtitle());

    framed(
        frame,
        scene.cells(&layout.display_area, area),
        palette.display_area(),
        palette.display_area_border(),
    );

    let label = scene.calculator.operation_label();
    if !label.is_empty() {
        scene.text_right_of(frame, layout.anchors.operation, &label, palette.operation_text());
    }

    framed(
        frame,
        scene.cells(&layout.display_rect, area),
        palette.display_box(),
        palette.display_box_border(),
    );
    scene.text_right_of(
        frame,
        layout.anchors.display,
        scene.calculator.display(),
        palette.display_text(),
    );

    for button in scene.panel.buttons() {
        render_button(frame, scene, button);
    }
}

fn render_button(frame: &mut Frame, scene: &Scene, button: &InteractiveButton) {
    let cells = scene.cells(&button.descriptor.rect, frame.area());
    if cells.is_empty() {
        return;
    }

    let style = scene
        .palette
        .button(button.descriptor.role, button.hovered);
    fill(frame, cells, style);

    let label_row = Rect::new(cells.x, cells.y + cells.height / 2, cells.width, 1);
    frame.render_widget(
        Paragraph::new(button.descriptor.label)
            .style(style)
            .alignment(Alignment::Center),
        label_row,
    );
}

impl Scene<'_> {
    /// Cell rect for a window-pixel rect, clipped to the frame.
    fn cells(&self, rect: &PixelRect, area: Rect) -> Rect {
        self.projection.rect(rect).intersection(area)
    }

    /// One line of text centred on `center`.
    fn text_centered(&self, frame: &mut Frame, center: PixelPoint, text: &str, style: Style) {
        let (column, row) = self.projection.cell(center);
        let width = text_width(text);
        let line = Rect::new(column.saturating_sub(width / 2), row, width, 1);
        render_line(frame, line, text, style);
    }

    /// One line of text ending just left of `anchor`.
    fn text_right_of(&self, frame: &mut Frame, anchor: PixelPoint, text: &str, style: Style) {
        let (column, row) = self.projection.cell(anchor);
        let width = text_width(text);
        let line = Rect::new(column.saturating_sub(width), row, width, 1);
        render_line(frame, line, text, style);
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn render_line(frame: &mut Frame, line: Rect, text: &str, style: Style) {
    let line = line.intersection(frame.area());
    if line.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(text).style(style), line);
}

fn fill(frame: &mut Frame, area: Rect, style: Style) {
    if area.is_empty() {
        return;
    }
    frame.render_widget(Block::new().style(style), area);
}

/// Filled box with a rounded outline; too-small boxes are only filled.
fn framed(frame: &mut Frame, area: Rect, style: Style, border_style: Style) {
    if area.width < 2 || area.height < 2 {
        fill(frame, area, style);
        return;
    }
    frame.render_widget(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(style)
            .border_style(border_style),
        area,
    );
}
