#![forbid(unsafe_code)]

//! Picker state: query, filtered view, and selection cursor.
//!
//! [`PickerState::apply`] is a pure reducer: it folds one logical key into
//! the state and returns a [`Transition`] telling the controller what to do
//! next (nothing, a redraw, or termination). All the tricky invariants live
//! here, away from any terminal I/O:
//!
//! 1. `filtered == filter(all, query)` after every transition.
//! 2. `0 <= cursor < filtered.len()` whenever `filtered` is non-empty.
//! 3. Any query mutation resets the cursor to 0.
//! 4. Navigation wraps in both directions and is a no-op on an empty view
//!    (the modulo-by-zero hazard is guarded, never reproduced).

use crate::candidate::Candidate;
use crate::filter;
use crate::key::Key;
use crate::query::{PushOutcome, QueryBuffer};

/// What a query edit did, so the controller can echo it at the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEdit {
    /// A character was appended and should be echoed.
    Pushed(char),
    /// The last character was removed; echo a backspace-erase.
    Popped,
}

/// Instruction to the controller after folding in one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Ignored key; nothing changed.
    Idle,
    /// Selection moved; redraw rows, no re-filter happened.
    MoveSelection,
    /// The query changed; the view was re-filtered and needs a full redraw.
    QueryChanged(QueryEdit),
    /// Confirmed: the payload is an index into the *full* candidate list.
    Confirmed(usize),
    /// Cancelled by the user (or confirmed with nothing to select).
    Cancelled,
}

/// Live state of one picker invocation.
#[derive(Debug)]
pub struct PickerState {
    query: QueryBuffer,
    filtered: Vec<usize>,
    cursor: usize,
}

impl PickerState {
    /// Start with an empty query: the view is the full candidate list.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            query: QueryBuffer::new(),
            filtered: (0..total).collect(),
            cursor: 0,
        }
    }

    /// Indices (into the full list) of the candidates currently shown.
    #[must_use]
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Selection cursor; only meaningful when the view is non-empty.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Fold one key event into the state.
    pub fn apply<T>(&mut self, candidates: &[Candidate<T>], key: Key) -> Transition {
        match key {
            Key::Up => self.step_selection(-1),
            Key::Down => self.step_selection(1),
            Key::Enter => match self.selected_candidate() {
                Some(idx) => Transition::Confirmed(idx),
                None => Transition::Cancelled,
            },
            Key::Escape => Transition::Cancelled,
            Key::Char(c) => {
                if c.is_control() {
                    return Transition::Idle;
                }
                match self.query.push_char(c) {
                    PushOutcome::Pushed => {
                        self.refilter(candidates);
                        Transition::QueryChanged(QueryEdit::Pushed(c))
                    }
                    PushOutcome::Rejected => Transition::Idle,
                }
            }
            Key::Backspace => {
                if self.query.pop_char() {
                    self.refilter(candidates);
                    Transition::QueryChanged(QueryEdit::Popped)
                } else {
                    Transition::Idle
                }
            }
        }
    }

    /// Index into the full list of the currently selected candidate.
    #[must_use]
    pub fn selected_candidate(&self) -> Option<usize> {
        if self.filtered.is_empty() {
            return None;
        }
        let slot = self.cursor.min(self.filtered.len() - 1);
        Some(self.filtered[slot])
    }

    fn step_selection(&mut self, delta: isize) -> Transition {
        let len = self.filtered.len();
        // Navigation on an empty view is a deliberate no-op.
        if len == 0 {
            return Transition::Idle;
        }
        self.cursor = (self.cursor + len).wrapping_add_signed(delta) % len;
        Transition::MoveSelection
    }

    fn refilter<T>(&mut self, candidates: &[Candidate<T>]) {
        self.cursor = 0;
        self.filtered = filter::filter(candidates, self.query.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Candidate<u32>> {
        vec![
            Candidate::new(1, "Notepad"),
            Candidate::new(2, "Calculator"),
            Candidate::new(3, "Visual Studio Code"),
        ]
    }

    fn type_str(state: &mut PickerState, all: &[Candidate<u32>], s: &str) {
        for c in s.chars() {
            state.apply(all, Key::Char(c));
        }
    }

    #[test]
    fn starts_with_full_view_and_cursor_zero() {
        let state = PickerState::new(3);
        assert_eq!(state.filtered(), &[0, 1, 2]);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn navigation_wraps_both_directions() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        assert_eq!(state.apply(&all, Key::Up), Transition::MoveSelection);
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.apply(&all, Key::Down), Transition::MoveSelection);
        assert_eq!(state.cursor(), 0);
        state.apply(&all, Key::Down);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn navigation_on_empty_view_is_idle() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        type_str(&mut state, &all, "zzz");
        assert!(state.filtered().is_empty());
        assert_eq!(state.apply(&all, Key::Up), Transition::Idle);
        assert_eq!(state.apply(&all, Key::Down), Transition::Idle);
    }

    #[test]
    fn typing_refilters_and_resets_cursor() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        state.apply(&all, Key::Down);
        assert_eq!(state.cursor(), 1);
        assert_eq!(
            state.apply(&all, Key::Char('c')),
            Transition::QueryChanged(QueryEdit::Pushed('c'))
        );
        assert_eq!(state.filtered(), &[1, 2]);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn backspace_restores_wider_view() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        type_str(&mut state, &all, "zzz");
        assert!(state.filtered().is_empty());
        for _ in 0..3 {
            assert_eq!(
                state.apply(&all, Key::Backspace),
                Transition::QueryChanged(QueryEdit::Popped)
            );
        }
        assert_eq!(state.filtered(), &[0, 1, 2]);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn backspace_on_empty_query_is_idle() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        assert_eq!(state.apply(&all, Key::Backspace), Transition::Idle);
    }

    #[test]
    fn enter_confirms_selected_candidate() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        type_str(&mut state, &all, "c");
        state.apply(&all, Key::Down);
        assert_eq!(state.apply(&all, Key::Enter), Transition::Confirmed(2));
    }

    #[test]
    fn enter_with_empty_view_cancels() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        type_str(&mut state, &all, "zzz");
        assert_eq!(state.apply(&all, Key::Enter), Transition::Cancelled);
    }

    #[test]
    fn escape_cancels_regardless_of_state() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        type_str(&mut state, &all, "cal");
        state.apply(&all, Key::Down);
        assert_eq!(state.apply(&all, Key::Escape), Transition::Cancelled);
    }

    #[test]
    fn control_characters_are_ignored() {
        let all = candidates();
        let mut state = PickerState::new(all.len());
        assert_eq!(state.apply(&all, Key::Char('\u{7}')), Transition::Idle);
        assert_eq!(state.query(), "");
    }
}
