//! Input module - keyboard handling for game controls
//!
//! Maps crossterm key events to the discrete [`InputEvent`] stream the loop
//! consumes. Raw event acquisition stays in the loop; this is pure mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputEvent;

/// Map a key press to a game event.
///
/// | Key | Event |
/// |-----|-------|
/// | ← or H or A | Move left |
/// | → or L or D | Move right |
/// | ↑ or K or W | Rotate (chaos switch in chaos mode) |
/// | ↓ or J or S | Soft drop |
/// | M | Toggle normal/chaos mode |
/// | R | Restart |
/// | Q, Esc, Ctrl+C | Quit |
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(InputEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(InputEvent::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(InputEvent::Rotate),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(InputEvent::SoftDrop),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(InputEvent::ToggleMode),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}
