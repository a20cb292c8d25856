//! Terminal shell: event loop, window mode and rendering.

pub mod frame_clock;
pub mod render;
pub mod styles;
pub mod surface;
pub mod window;

pub use frame_clock::FrameClock;
pub use render::{render_calculator, Scene};
pub use styles::{ColorConfig, Palette};
pub use surface::{CellMetrics, Projection};
pub use window::{Viewport, WindowMode, WINDOW_TITLE};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::layout::{compute_layout, LayoutGeometry, WindowSize};
use crate::model::KeyAction;
use crate::state::{ButtonPanel, Calculator};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup settings for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    pub fps: u32,
    pub mode: WindowMode,
    pub metrics: CellMetrics,
    pub colors: ColorConfig,
}

impl AppOptions {
    /// Options from resolved config, with cell size taken from config as-is.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            fps: config.fps,
            mode: WindowMode::from_fullscreen(config.start_fullscreen),
            metrics: CellMetrics::new(config.cell_width, config.cell_height),
            colors: ColorConfig::from_env_and_args(config.no_color),
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    calculator: Calculator,
    key_bindings: KeyBindings,
    metrics: CellMetrics,
    viewport: Viewport,
    layout: LayoutGeometry,
    panel: ButtonPanel,
    palette: Palette,
    clock: FrameClock,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(options: AppOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(SetTitle(WINDOW_TITLE))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, options)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Each event is handled to completion as it
    /// arrives; the screen redraws once per frame.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            let now = Instant::now();
            if self.clock.frame_due(now) {
                self.draw()?;
                self.clock.frame_drawn(now);
            }

            let timeout = self.clock.time_until_frame(Instant::now());
            if event::poll(timeout)? && self.handle_event(event::read()?) {
                return Ok(());
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, options: AppOptions) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let surface = options.metrics.surface_size(size.width, size.height);
        let viewport = Viewport::new(surface, options.mode);
        let layout = compute_layout(viewport.window_size());
        let panel = ButtonPanel::from_layout(&layout);

        info!(
            columns = size.width,
            rows = size.height,
            ?viewport,
            scale = layout.scale,
            "Calculator layout initialized"
        );

        Ok(Self {
            terminal,
            calculator: Calculator::new(),
            key_bindings: KeyBindings::default(),
            metrics: options.metrics,
            viewport,
            layout,
            panel,
            palette: Palette::new(options.colors),
            clock: FrameClock::new(options.fps, Instant::now()),
        })
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn layout(&self) -> &LayoutGeometry {
        &self.layout
    }

    pub fn panel(&self) -> &ButtonPanel {
        &self.panel
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Current mapping between window pixels and terminal cells.
    pub fn projection(&self) -> Projection {
        Projection::new(self.metrics, self.viewport.origin())
    }

    /// Handle one input event. Returns true if the app should quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            Event::Resize(columns, rows) => {
                self.handle_resize(columns, rows);
                false
            }
            Event::FocusLost => {
                self.panel.pointer_left();
                false
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Calculator(action)) => self.calculator.apply(action),
            Some(KeyAction::ToggleFullscreen) => self.toggle_fullscreen(),
            Some(KeyAction::Quit) => return true,
            None => debug!(?key, "Unbound key"),
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = self.projection().window_point(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.panel.pointer_moved(point),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.panel.pointer_pressed(point) {
                    self.calculator.apply(action);
                }
            }
            _ => {}
        }
    }

    /// Rebuild the layout for a new terminal size.
    fn handle_resize(&mut self, columns: u16, rows: u16) {
        let surface = self.metrics.surface_size(columns, rows);
        info!(columns, rows, ?surface, "Terminal resized");
        self.relayout(surface, self.viewport.mode);
    }

    fn toggle_fullscreen(&mut self) {
        let mode = self.viewport.mode.toggled();
        info!(?mode, "Toggling window mode");
        self.relayout(self.viewport.surface, mode);
    }

    /// Replace viewport, layout and buttons together so a frame never sees
    /// geometry from two different sizes.
    fn relayout(&mut self, surface: WindowSize, mode: WindowMode) {
        self.viewport = Viewport::new(surface, mode);
        self.layout = compute_layout(self.viewport.window_size());
        self.panel = ButtonPanel::from_layout(&self.layout);
        debug!(scale = self.layout.scale, window = ?self.viewport.window, "Layout rebuilt");
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let scene = Scene {
            calculator: &self.calculator,
            layout: &self.layout,
            panel: &self.panel,
            projection: Projection::new(self.metrics, self.viewport.origin()),
            palette: self.palette,
        };

        self.terminal.draw(|frame| render_calculator(frame, &scene))?;

        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, including when setup or the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig) -> Result<(), TuiError> {
    let mut options = AppOptions::from_config(config);
    options.metrics = CellMetrics::detect(options.metrics);

    let result = TuiApp::new(options).and_then(|mut app| app.run());

    // Always restore terminal state
    let restored = restore_terminal();

    result.and(restored)
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
