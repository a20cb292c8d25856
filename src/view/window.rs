//! Window placement on the terminal surface.

use crate::layout::{PixelPoint, PixelRect, WindowSize};
use crate::layout::engine::{BASE_HEIGHT, BASE_WIDTH};

/// Window title shown by the terminal.
pub const WINDOW_TITLE: &str = "Tax Calculator";

/// Default windowed size in pixels.
pub const DEFAULT_WINDOW: WindowSize = WindowSize {
    width: BASE_WIDTH,
    height: BASE_HEIGHT,
};

/// Whether the calculator uses a fixed window or the whole surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Windowed,
    Fullscreen,
}

impl WindowMode {
    pub fn toggled(self) -> Self {
        match self {
            WindowMode::Windowed => WindowMode::Fullscreen,
            WindowMode::Fullscreen => WindowMode::Windowed,
        }
    }

    pub fn from_fullscreen(fullscreen: bool) -> Self {
        if fullscreen {
            WindowMode::Fullscreen
        } else {
            WindowMode::Windowed
        }
    }
}

/// Window rectangle on the pixel surface for a mode.
///
/// Windowed mode centres the default window, shrunk to the surface when the
/// terminal is smaller. Fullscreen covers the whole surface.
pub fn window_rect(surface: WindowSize, mode: WindowMode) -> PixelRect {
    match mode {
        WindowMode::Fullscreen => {
            PixelRect::new(0, 0, surface.width as i32, surface.height as i32)
        }
        WindowMode::Windowed => {
            let width = DEFAULT_WINDOW.width.min(surface.width);
            let height = DEFAULT_WINDOW.height.min(surface.height);
            PixelRect::new(
                ((surface.width - width) / 2) as i32,
                ((surface.height - height) / 2) as i32,
                width as i32,
                height as i32,
            )
        }
    }
}

/// Window size and origin for the current surface and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub surface: WindowSize,
    pub mode: WindowMode,
    pub window: PixelRect,
}

impl Viewport {
    pub fn new(surface: WindowSize, mode: WindowMode) -> Self {
        Self {
            surface,
            mode,
            window: window_rect(surface, mode),
        }
    }

    pub fn window_size(&self) -> WindowSize {
        WindowSize::new(self.window.width as u32, self.window.height as u32)
    }

    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.window.x, self.window.y)
    }
}
