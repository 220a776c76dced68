#![forbid(unsafe_code)]

//! The picker controller: geometry setup plus the blocking input loop.
//!
//! Strictly sequential: each key's effect is fully drawn before the next key
//! is read. No timers, no batching, no background work; the loop blocks until
//! the user confirms or cancels.

use std::io;

use crate::candidate::Candidate;
use crate::key::{Key, KeySource};
use crate::menu::{self, DrawMode, MenuLayout};
use crate::state::{PickerState, QueryEdit, Transition};
use crate::surface::Surface;

/// Result of one picker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome<T> {
    /// The user confirmed this candidate's id.
    Confirmed(T),
    /// The user cancelled, or confirmed with nothing to select.
    Cancelled,
}

/// Run the interactive picker to completion.
///
/// Borrows the surface and key source for the duration of the call; the
/// caller must not write to the terminal while the picker is active. The
/// terminal is expected to already be in raw mode (see `topper-tty`).
///
/// `status_of` is consulted at render time for each visible candidate, so
/// status annotations are always current, never cached.
///
/// # Errors
///
/// Propagates I/O errors from the surface or the key source; user
/// cancellation is a normal [`PickOutcome::Cancelled`], never an error.
pub fn run_picker<T, S, K>(
    surface: &mut S,
    keys: &mut K,
    candidates: &[Candidate<T>],
    status_of: &mut dyn FnMut(&T) -> Option<String>,
) -> io::Result<PickOutcome<T>>
where
    T: Clone,
    S: Surface + ?Sized,
    K: KeySource + ?Sized,
{
    let layout = MenuLayout::compute(surface, candidates.len())?;
    let mut state = PickerState::new(candidates.len());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        total = candidates.len(),
        anchor = layout.anchor_row,
        rows = layout.region_rows,
        "picker started"
    );

    menu::draw_menu(
        surface,
        &layout,
        candidates,
        state.filtered(),
        state.cursor(),
        DrawMode::Full,
        status_of,
    )?;

    loop {
        let key = keys.next_key()?;
        match state.apply(candidates, key) {
            Transition::Idle => {}
            Transition::MoveSelection => {
                menu::draw_menu(
                    surface,
                    &layout,
                    candidates,
                    state.filtered(),
                    state.cursor(),
                    DrawMode::SelectionOnly,
                    status_of,
                )?;
            }
            Transition::QueryChanged(edit) => {
                echo_edit(surface, edit)?;
                menu::draw_menu(
                    surface,
                    &layout,
                    candidates,
                    state.filtered(),
                    state.cursor(),
                    DrawMode::Full,
                    status_of,
                )?;
            }
            Transition::Confirmed(idx) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(label = %candidates[idx].label, "picker confirmed");
                return Ok(PickOutcome::Confirmed(candidates[idx].id.clone()));
            }
            Transition::Cancelled => {
                #[cfg(feature = "tracing")]
                tracing::debug!("picker cancelled");
                return Ok(PickOutcome::Cancelled);
            }
        }
    }
}

/// Echo a query edit at the input line. The cursor sits at the input
/// position between events, so this writes in place.
fn echo_edit<S: Surface + ?Sized>(surface: &mut S, edit: QueryEdit) -> io::Result<()> {
    match edit {
        QueryEdit::Pushed(c) => {
            let mut buf = [0u8; 4];
            surface.write_text(c.encode_utf8(&mut buf))
        }
        // Back up, blank the cell, back up again.
        QueryEdit::Popped => surface.write_text("\u{8} \u{8}"),
    }
}
