//! Terminal user interface: the live breakpoint indicator.
//!
//! This module contains the main TUI loop, `AppState`, and event handling.
//! The terminal window itself is the viewport being measured.

pub mod handlers;
pub mod indicator_widget;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

use crate::breakpoints::BreakpointError;
use crate::config::{Config, ViewportUnit};
use crate::indicator::{Indicator, IndicatorView};
use crate::models::StartingPosition;
use crate::viewport::{self, ResizeCoalescer};

pub use handlers::{handle_key_event, handle_mouse_event};
pub use indicator_widget::IndicatorWidget;
pub use theme::Theme;

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state - single source of truth
///
/// The renderer reads a fresh [`IndicatorView`] each frame; only the
/// event handlers modify state.
pub struct AppState {
    /// Breakpoint indicator
    pub indicator: Indicator,
    /// Current UI theme
    pub theme: Theme,
    /// Measurement unit preference
    pub unit: ViewportUnit,
    /// Where the indicator was drawn last frame (for mouse hit testing)
    pub indicator_area: Option<Rect>,
    /// Exit the loop after this iteration
    pub should_quit: bool,
}

impl AppState {
    /// Creates state from configuration, resolving the color scheme.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_theme(config, Theme::from_scheme(config.ui.color_scheme))
    }

    /// Creates state with an explicit theme.
    #[must_use]
    pub fn with_theme(config: &Config, theme: Theme) -> Self {
        Self {
            indicator: Indicator::new(config),
            theme,
            unit: config.viewport.unit,
            indicator_area: None,
            should_quit: false,
        }
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut resizes = ResizeCoalescer::new();
    resizes.push(viewport::measure(state.unit));

    info!(unit = ?state.unit, "indicator started");

    loop {
        if let Some(measurement) = resizes.take() {
            state.indicator.set_measurement(measurement);
        }

        let view = state.indicator.view();
        let position = state.indicator.position();
        let mut drawn = None;
        terminal.draw(|f| drawn = Some(render(f, &view, position, &state.theme)))?;
        state.indicator_area = drawn;

        if event::poll(POLL_INTERVAL)? {
            // Drain everything queued so a resize burst costs one redraw
            loop {
                match event::read()? {
                    Event::Key(key) => handle_key_event(state, key),
                    Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                    Event::Resize(columns, _) => {
                        resizes.push(viewport::measure_resized(state.unit, columns));
                    }
                    _ => {}
                }

                if state.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("indicator stopped");
    Ok(())
}

/// Render the UI and return the indicator area
fn render(
    f: &mut Frame,
    view: &Result<IndicatorView, BreakpointError>,
    position: StartingPosition,
    theme: &Theme,
) -> Rect {
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, f.area());

    let hints = Paragraph::new(Line::from(" space: expand   m: move   q: quit"))
        .style(Style::default().fg(theme.text_muted).bg(theme.background));
    let screen = f.area();
    let hint_row = Rect::new(screen.x, screen.y, screen.width, screen.height.min(1));
    f.render_widget(hints, hint_row);

    IndicatorWidget::render(f, view, position, theme)
}
