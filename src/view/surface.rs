//! Projection between window pixels and terminal cells.
//!
//! The terminal is treated as a pixel surface where every cell covers a
//! fixed `width × height` block. Rect edges round to the nearest cell
//! boundary; rounding is monotonic, so rects that are disjoint in pixels stay
//! disjoint in cells.

use crate::layout::{PixelPoint, PixelRect, WindowSize};
use ratatui::layout::Rect;
use tracing::debug;

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u16,
    pub height: u16,
}

impl CellMetrics {
    /// Cell size; zero dimensions are raised to one pixel.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Ask the terminal for its pixel size, falling back when it reports none.
    pub fn detect(fallback: CellMetrics) -> CellMetrics {
        match crossterm::terminal::window_size() {
            Ok(size) if size.width > 0 && size.height > 0 && size.columns > 0 && size.rows > 0 => {
                let metrics = CellMetrics::new(size.width / size.columns, size.height / size.rows);
                debug!(?metrics, "Detected terminal cell size");
                metrics
            }
            _ => {
                debug!(?fallback, "Terminal did not report pixel size, using fallback");
                fallback
            }
        }
    }

    /// Pixel size of a `columns × rows` terminal.
    pub fn surface_size(&self, columns: u16, rows: u16) -> WindowSize {
        WindowSize::new(
            u32::from(columns) * u32::from(self.width),
            u32::from(rows) * u32::from(self.height),
        )
    }
}

/// Maps window pixel geometry onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub metrics: CellMetrics,
    /// Top-left of the window on the pixel surface.
    pub origin: PixelPoint,
}

impl Projection {
    pub fn new(metrics: CellMetrics, origin: PixelPoint) -> Self {
        Self { metrics, origin }
    }

    /// Cell rect covering a window-pixel rect.
    pub fn rect(&self, rect: &PixelRect) -> Rect {
        let left = nearest_cell(rect.left() + self.origin.x, self.metrics.width);
        let right = nearest_cell(rect.right() + self.origin.x, self.metrics.width);
        let top = nearest_cell(rect.top() + self.origin.y, self.metrics.height);
        let bottom = nearest_cell(rect.bottom() + self.origin.y, self.metrics.height);
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Cell containing a window-pixel point.
    pub fn cell(&self, point: PixelPoint) -> (u16, u16) {
        (
            containing_cell(point.x + self.origin.x, self.metrics.width),
            containing_cell(point.y + self.origin.y, self.metrics.height),
        )
    }

    /// Window-pixel point at the centre of a cell.
    pub fn window_point(&self, column: u16, row: u16) -> PixelPoint {
        let w = i32::from(self.metrics.width);
        let h = i32::from(self.metrics.height);
        PixelPoint::new(
            i32::from(column) * w + w / 2 - self.origin.x,
            i32::from(row) * h + h / 2 - self.origin.y,
        )
    }
}

fn nearest_cell(px: i32, cell: u16) -> u16 {
    let px = i64::from(px.max(0));
    let cell = i64::from(cell);
    ((px + cell / 2) / cell).min(i64::from(u16::MAX)) as u16
}

fn containing_cell(px: i32, cell: u16) -> u16 {
    let px = i64::from(px.max(0));
    (px / i64::from(cell)).min(i64::from(u16::MAX)) as u16
}
