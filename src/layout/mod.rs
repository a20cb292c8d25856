//! Responsive layout (pure).
//!
//! Geometry is computed in window pixels from the window size alone and
//! rebuilt wholesale whenever the window changes.

pub mod buttons;
pub mod engine;
pub mod geometry;

pub use buttons::{ButtonDescriptor, ButtonSpec, ColorRole, BUTTON_GRID, TAX_BUTTON};
pub use engine::{compute_layout, scale_for, FontSizes, LayoutGeometry, TextAnchors};
pub use geometry::{PixelPoint, PixelRect, WindowSize};
