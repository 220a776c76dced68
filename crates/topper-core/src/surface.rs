#![forbid(unsafe_code)]

//! Terminal surface abstraction.
//!
//! The original tool mutated a single shared console buffer directly. Here
//! the screen is an explicit handle passed to the controller, which borrows
//! it for the duration of one picker call and never retains it. Rendering
//! logic can then be unit-tested against an in-memory fake
//! (see [`crate::testing::FakeSurface`]).
//!
//! Coordinates are 0-indexed, `(col, row)`, matching crossterm.

use std::io;

/// Minimal screen handle the picker draws through.
pub trait Surface {
    /// Current size as `(columns, rows)`.
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// Current cursor position as `(col, row)`.
    fn cursor_position(&mut self) -> io::Result<(u16, u16)>;

    /// Move the cursor to `(col, row)`.
    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()>;

    /// Write text at the cursor; the cursor advances past it.
    ///
    /// The text must not contain newlines; line breaks are always explicit
    /// cursor moves or [`Surface::scroll_up`] calls.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Blank out `rows` whole lines starting at `first_row`.
    fn clear_region(&mut self, first_row: u16, rows: u16) -> io::Result<()>;

    /// Toggle highlighted (reverse video) rendering for subsequent writes.
    fn set_highlight(&mut self, on: bool) -> io::Result<()>;

    /// Emit `lines` line feeds at the current position, scrolling earlier
    /// output up once the cursor reaches the bottom row. The cursor ends at
    /// column 0 of whatever row it lands on.
    fn scroll_up(&mut self, lines: u16) -> io::Result<()>;

    /// Flush any queued output to the screen.
    fn flush(&mut self) -> io::Result<()>;
}
