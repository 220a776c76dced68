#![forbid(unsafe_code)]

//! Menu geometry and rendering.
//!
//! The menu is drawn inline, anchored one row below the input line, without
//! an alternate screen; earlier terminal output stays in the scrollback. At
//! picker start the layout is computed once: if the candidate list does not
//! fit between the input line and the bottom of the screen, blank lines are
//! emitted to scroll prior output up and the anchor is recomputed from the
//! post-scroll cursor position, clamped to row 0.
//!
//! Every rendered row is padded to the full terminal width, so rewriting a
//! row also erases whatever a previously longer list left behind. Rows that
//! would land past the bottom of the screen are not drawn.

use std::io;

use unicode_width::UnicodeWidthChar;

use crate::candidate::Candidate;
use crate::surface::Surface;

/// Whether a redraw must clear the whole region first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// The filtered view changed: clear every row the menu owns, then draw.
    Full,
    /// Only the selection moved: rewrite rows in place (they self-erase).
    SelectionOnly,
}

/// Fixed geometry of one picker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    /// Column of the query input cursor.
    pub input_col: u16,
    /// Row of the query input line.
    pub input_row: u16,
    /// Row of the first menu line.
    pub anchor_row: u16,
    /// Rows the menu owns below the anchor (full candidate count, clamped
    /// to the screen).
    pub region_rows: u16,
    /// Terminal width in columns.
    pub width: u16,
}

impl MenuLayout {
    /// Compute the layout from the surface's current cursor position and
    /// size, scrolling to make room for `total` candidate rows if needed.
    ///
    /// Invariant on return: `anchor_row + region_rows` never exceeds the
    /// screen height, and `anchor_row` is never "negative" (the anchor is
    /// clamped to the top when the list is taller than the screen).
    pub fn compute<S: Surface + ?Sized>(surface: &mut S, total: usize) -> io::Result<Self> {
        let (width, height) = surface.size()?;
        let (input_col, mut input_row) = surface.cursor_position()?;

        let needed = u16::try_from(total).unwrap_or(u16::MAX);
        let available = height.saturating_sub(input_row.saturating_add(1));

        if needed > available {
            // Emitting `needed` line feeds parks the cursor on the bottom
            // row and scrolls earlier output (input line included) up by
            // exactly the deficit.
            surface.scroll_up(needed)?;
            let (_, after_row) = surface.cursor_position()?;
            input_row = after_row.saturating_sub(needed);
            surface.move_cursor(input_col, input_row)?;
            surface.flush()?;
        }

        let anchor_row = input_row
            .saturating_add(1)
            .min(height.saturating_sub(1));
        let region_rows = needed.min(height.saturating_sub(anchor_row));

        Ok(Self {
            input_col,
            input_row,
            anchor_row,
            region_rows,
            width,
        })
    }
}

/// Redraw the menu region from the current filtered view and selection.
///
/// The selected row gets a `>` marker and reverse-video highlight. Each row
/// shows a 1-based ordinal, an optional right-aligned status tag supplied by
/// `status_of` (queried now, not cached), and the label. The cursor is
/// restored to where it was before the call.
pub fn draw_menu<T, S: Surface + ?Sized>(
    surface: &mut S,
    layout: &MenuLayout,
    candidates: &[Candidate<T>],
    filtered: &[usize],
    selected: usize,
    mode: DrawMode,
    status_of: &mut dyn FnMut(&T) -> Option<String>,
) -> io::Result<()> {
    let (orig_col, orig_row) = surface.cursor_position()?;

    if mode == DrawMode::Full {
        surface.clear_region(layout.anchor_row, layout.region_rows)?;
    }

    let visible = filtered.len().min(layout.region_rows as usize);
    for (slot, &idx) in filtered.iter().take(visible).enumerate() {
        let candidate = &candidates[idx];
        let row = layout.anchor_row + slot as u16;
        surface.move_cursor(0, row)?;

        let is_selected = slot == selected;
        let status = status_of(&candidate.id);
        let line = compose_row(
            layout.width,
            is_selected,
            slot + 1,
            status.as_deref(),
            &candidate.label,
        );

        if is_selected {
            surface.set_highlight(true)?;
        }
        surface.write_text(&line)?;
        if is_selected {
            surface.set_highlight(false)?;
        }
    }

    surface.move_cursor(orig_col, orig_row)?;
    surface.flush()
}

/// Compose one menu row, truncated and padded to exactly `width` columns.
fn compose_row(
    width: u16,
    selected: bool,
    ordinal: usize,
    status: Option<&str>,
    label: &str,
) -> String {
    let marker = if selected { '>' } else { ' ' };
    let line = match status {
        Some(tag) => format!("{marker} {ordinal:>3}. {tag:>11} : {label}"),
        None => format!("{marker} {ordinal:>3}. {label}"),
    };
    fit_to_width(&line, width as usize)
}

/// Truncate by display width, then pad with spaces to exactly `width` cells
/// so the row overwrites any stale characters beneath it.
fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0usize;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSurface;

    fn candidates() -> Vec<Candidate<u32>> {
        vec![
            Candidate::new(1, "Notepad"),
            Candidate::new(2, "Calculator"),
            Candidate::new(3, "Visual Studio Code"),
        ]
    }

    fn no_status(_: &u32) -> Option<String> {
        None
    }

    #[test]
    fn layout_anchors_one_row_below_input() {
        let mut surface = FakeSurface::new(40, 12).with_cursor(5, 3);
        let layout = MenuLayout::compute(&mut surface, 3).unwrap();
        assert_eq!(layout.input_row, 3);
        assert_eq!(layout.input_col, 5);
        assert_eq!(layout.anchor_row, 4);
        assert_eq!(layout.region_rows, 3);
        assert_eq!(surface.scrolled(), 0);
    }

    #[test]
    fn layout_scrolls_to_make_room() {
        // Input on row 9 of a 12-row screen: 2 rows available, 5 needed.
        let mut surface = FakeSurface::new(40, 12).with_cursor(4, 9);
        let layout = MenuLayout::compute(&mut surface, 5).unwrap();
        assert_eq!(surface.scrolled(), 3);
        assert_eq!(layout.input_row, 6);
        assert_eq!(layout.anchor_row, 7);
        assert_eq!(layout.region_rows, 5);
        // anchor + rows exactly fills the screen
        assert_eq!(layout.anchor_row + layout.region_rows, 12);
        // cursor moved back to the (relocated) input position
        assert_eq!(surface.cursor(), (4, 6));
    }

    #[test]
    fn layout_clamps_when_list_is_taller_than_screen() {
        let mut surface = FakeSurface::new(40, 6).with_cursor(0, 2);
        let layout = MenuLayout::compute(&mut surface, 50).unwrap();
        assert_eq!(layout.input_row, 0);
        assert_eq!(layout.anchor_row, 1);
        assert_eq!(layout.region_rows, 5);
    }

    #[test]
    fn draw_marks_and_highlights_selected_row() {
        let all = candidates();
        let mut surface = FakeSurface::new(40, 12).with_cursor(0, 0);
        let layout = MenuLayout::compute(&mut surface, all.len()).unwrap();
        let filtered = vec![0, 1, 2];
        draw_menu(
            &mut surface,
            &layout,
            &all,
            &filtered,
            1,
            DrawMode::Full,
            &mut no_status,
        )
        .unwrap();

        assert!(surface.row_text(1).starts_with("    1. Notepad"));
        assert!(surface.row_text(2).starts_with(">   2. Calculator"));
        assert!(!surface.row_highlighted(1));
        assert!(surface.row_highlighted(2));
        // cursor restored to the input position
        assert_eq!(surface.cursor(), (0, 0));
    }

    #[test]
    fn full_redraw_erases_rows_from_a_longer_list() {
        let all = candidates();
        let mut surface = FakeSurface::new(40, 12).with_cursor(0, 0);
        let layout = MenuLayout::compute(&mut surface, all.len()).unwrap();
        draw_menu(
            &mut surface,
            &layout,
            &all,
            &[0, 1, 2],
            0,
            DrawMode::Full,
            &mut no_status,
        )
        .unwrap();
        // Narrow to one row; the other two must be blanked.
        draw_menu(
            &mut surface,
            &layout,
            &all,
            &[2],
            0,
            DrawMode::Full,
            &mut no_status,
        )
        .unwrap();

        assert!(surface.row_text(1).starts_with(">   1. Visual Studio Code"));
        assert_eq!(surface.row_text(2).trim(), "");
        assert_eq!(surface.row_text(3).trim(), "");
    }

    #[test]
    fn status_tag_is_rendered_right_aligned() {
        let all = candidates();
        let mut surface = FakeSurface::new(60, 12).with_cursor(0, 0);
        let layout = MenuLayout::compute(&mut surface, all.len()).unwrap();
        let mut status = |id: &u32| {
            Some(if *id == 2 { "TOPMOST" } else { "NOT TOPMOST" }.to_string())
        };
        draw_menu(
            &mut surface,
            &layout,
            &all,
            &[0, 1, 2],
            0,
            DrawMode::Full,
            &mut status,
        )
        .unwrap();

        assert!(surface.row_text(2).contains("    TOPMOST : Calculator"));
        assert!(surface.row_text(1).contains("NOT TOPMOST : Notepad"));
    }

    #[test]
    fn rows_are_truncated_to_terminal_width() {
        let label = "a very long window title that cannot possibly fit";
        let all = vec![Candidate::new(1u32, label)];
        let mut surface = FakeSurface::new(20, 8).with_cursor(0, 0);
        let layout = MenuLayout::compute(&mut surface, 1).unwrap();
        draw_menu(
            &mut surface,
            &layout,
            &all,
            &[0],
            0,
            DrawMode::Full,
            &mut no_status,
        )
        .unwrap();
        assert_eq!(surface.row_text(1).chars().count(), 20);
    }

    #[test]
    fn fit_to_width_accounts_for_wide_characters() {
        // CJK characters are two cells wide.
        let fitted = fit_to_width("漢字かな", 5);
        assert_eq!(fitted, "漢字 ");
    }
}
