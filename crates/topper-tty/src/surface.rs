#![forbid(unsafe_code)]

//! Crossterm-backed [`Surface`] over stdout.
//!
//! Writes are queued and sent to the terminal on [`Surface::flush`], so one
//! redraw reaches the terminal as a single burst. Cursor position queries
//! flush first; the response is read from the terminal, which requires raw
//! mode to be active (see [`crate::session::RawSession`]).

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use topper_core::surface::Surface;

/// Terminal surface writing through `io::stdout()`.
#[derive(Debug)]
pub struct TtySurface {
    stdout: Stdout,
}

impl TtySurface {
    /// Create a surface over the process's stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TtySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TtySurface {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        // The query round-trips through the terminal; queued writes must land
        // first or the reported position is stale.
        self.stdout.flush()?;
        crossterm::cursor::position()
    }

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        queue!(self.stdout, MoveTo(col, row))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.stdout, Print(text))
    }

    fn clear_region(&mut self, first_row: u16, rows: u16) -> io::Result<()> {
        for row in first_row..first_row.saturating_add(rows) {
            queue!(self.stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
        }
        Ok(())
    }

    fn set_highlight(&mut self, on: bool) -> io::Result<()> {
        let attribute = if on {
            Attribute::Reverse
        } else {
            Attribute::NoReverse
        };
        queue!(self.stdout, SetAttribute(attribute))
    }

    fn scroll_up(&mut self, lines: u16) -> io::Result<()> {
        // Raw mode does not translate LF, so emit explicit CRLF pairs; once
        // the cursor is on the bottom row each one scrolls prior output up.
        for _ in 0..lines {
            queue!(self.stdout, Print("\r\n"))?;
        }
        self.stdout.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
