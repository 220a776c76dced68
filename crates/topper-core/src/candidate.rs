#![forbid(unsafe_code)]

//! Selectable items.

/// One selectable entry: an opaque identifier plus the label shown in the menu.
///
/// Candidates are enumerated by the caller and borrowed read-only by the
/// picker for the duration of one invocation. The id type is whatever the
/// caller's collaborator hands out (a window handle, a path, an index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    /// Opaque handle returned on confirmation.
    pub id: T,
    /// Display label; also the haystack for query matching.
    pub label: String,
}

impl<T> Candidate<T> {
    /// Create a candidate from an id and a label.
    pub fn new(id: T, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
