#![forbid(unsafe_code)]

//! Crossterm event → logical key mapping.
//!
//! Collapses the terminal's event stream into the picker's six logical keys.
//! Release events are dropped (kitty-protocol terminals report them), and
//! Ctrl+C maps to cancel: in raw mode it arrives as an ordinary key, not a
//! signal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use topper_core::key::Key;

/// Map one crossterm event onto a logical key, or `None` to skip it.
#[must_use]
pub fn map_event(event: Event) -> Option<Key> {
    match event {
        Event::Key(key) => map_key_event(key),
        _ => None,
    }
}

fn map_key_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Escape)
        }
        KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Char(c))
        }
        _ => None,
    }
}
