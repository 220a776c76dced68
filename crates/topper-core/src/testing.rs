#![forbid(unsafe_code)]

//! In-memory fakes for driving the picker without a terminal.
//!
//! [`FakeSurface`] is a cell grid that emulates just enough terminal
//! behavior for the menu: absolute cursor moves, character writes, line
//! feeds that scroll at the bottom row, and a highlight flag recorded per
//! cell. [`ScriptedKeys`] replays a canned key sequence.
//!
//! Exposed to other crates behind the `test-helpers` feature.

use std::collections::VecDeque;
use std::io;

use crate::key::{Key, KeySource};
use crate::surface::Surface;

/// An in-memory terminal surface.
#[derive(Debug)]
pub struct FakeSurface {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    highlighted: Vec<Vec<bool>>,
    cursor: (u16, u16),
    highlight_on: bool,
    scrolled: u16,
}

impl FakeSurface {
    /// A blank surface of the given size with the cursor at the origin.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width as usize]; height as usize],
            highlighted: vec![vec![false; width as usize]; height as usize],
            cursor: (0, 0),
            highlight_on: false,
            scrolled: 0,
        }
    }

    /// Place the cursor, builder-style.
    #[must_use]
    pub fn with_cursor(mut self, col: u16, row: u16) -> Self {
        self.cursor = (col.min(self.width.saturating_sub(1)), row.min(self.height.saturating_sub(1)));
        self
    }

    /// Current cursor position as `(col, row)`.
    #[must_use]
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// How many lines have scrolled off the top.
    #[must_use]
    pub fn scrolled(&self) -> u16 {
        self.scrolled
    }

    /// The full contents of one row.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|r| r.iter().collect())
            .unwrap_or_default()
    }

    /// Whether any cell in the row was written while highlight was on.
    #[must_use]
    pub fn row_highlighted(&self, row: u16) -> bool {
        self.highlighted
            .get(row as usize)
            .is_some_and(|r| r.iter().any(|&h| h))
    }

    fn line_feed(&mut self) {
        let (_, row) = self.cursor;
        if row + 1 >= self.height {
            self.cells.remove(0);
            self.cells.push(vec![' '; self.width as usize]);
            self.highlighted.remove(0);
            self.highlighted.push(vec![false; self.width as usize]);
            self.scrolled += 1;
        } else {
            self.cursor.1 = row + 1;
        }
        self.cursor.0 = 0;
    }
}

impl Surface for FakeSurface {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.cursor)
    }

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.cursor = (
            col.min(self.width.saturating_sub(1)),
            row.min(self.height.saturating_sub(1)),
        );
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        for c in text.chars() {
            if c == '\u{8}' {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
                continue;
            }
            let (col, row) = self.cursor;
            if col < self.width && row < self.height {
                self.cells[row as usize][col as usize] = c;
                self.highlighted[row as usize][col as usize] = self.highlight_on;
            }
            self.cursor.0 = col.saturating_add(1).min(self.width);
        }
        Ok(())
    }

    fn clear_region(&mut self, first_row: u16, rows: u16) -> io::Result<()> {
        for row in first_row..first_row.saturating_add(rows).min(self.height) {
            self.cells[row as usize].fill(' ');
            self.highlighted[row as usize].fill(false);
        }
        Ok(())
    }

    fn set_highlight(&mut self, on: bool) -> io::Result<()> {
        self.highlight_on = on;
        Ok(())
    }

    fn scroll_up(&mut self, lines: u16) -> io::Result<()> {
        for _ in 0..lines {
            self.line_feed();
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Replays a fixed key sequence; errors with `UnexpectedEof` if the picker
/// asks for more keys than the script provides.
#[derive(Debug)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    /// Build a script from any key iterator.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Append the characters of `text` as printable key events.
    #[must_use]
    pub fn then_type(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self
    }

    /// Append a single key.
    #[must_use]
    pub fn then(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
        })
    }
}
