//! Keyboard and mouse input for the indicator.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use super::AppState;

/// Handle a key press; quitting sets `state.should_quit`.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Char(' ') | KeyCode::Enter => state.indicator.toggle(),
        KeyCode::Char('m') => {
            state.indicator.cycle_position();
            debug!(position = %state.indicator.position(), "moved indicator");
        }
        _ => {}
    }
}

/// Handle a mouse event; a left click on the indicator toggles it.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let Some(area) = state.indicator_area else {
        return;
    };

    let inside = mouse.column >= area.x
        && mouse.column < area.x + area.width
        && mouse.row >= area.y
        && mouse.row < area.y + area.height;

    if inside {
        state.indicator.toggle();
    }
}
