#![forbid(unsafe_code)]

//! Logical key events.
//!
//! Raw terminal input (escape sequences, scan codes, crossterm events) is
//! collapsed by the backend into this small enumerated set before it reaches
//! the controller, keeping the picker logic platform-independent.

use std::io;

/// A logical key event, the only input vocabulary the picker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move selection up (wraps at the top).
    Up,
    /// Move selection down (wraps at the bottom).
    Down,
    /// Confirm the current selection.
    Enter,
    /// Cancel the picker.
    Escape,
    /// A printable character appended to the query.
    Char(char),
    /// Remove the last query character.
    Backspace,
}

/// Blocking source of logical key events.
///
/// Implementations decode whatever the platform delivers (multi-byte escape
/// sequences included) and only surface events from [`Key`]; anything
/// unmappable is swallowed before the controller sees it.
pub trait KeySource {
    /// Block until the next logical key event is available.
    fn next_key(&mut self) -> io::Result<Key>;
}
