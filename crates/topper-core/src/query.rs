#![forbid(unsafe_code)]

//! The query buffer.
//!
//! Append/remove-at-end only; there is no mid-buffer editing and no cursor
//! within the query. The buffer is capped at [`MAX_QUERY_CHARS`] code points.
//! A push past the cap is *rejected* (buffer unchanged, outcome observable)
//! rather than aborting the process.

/// Maximum query length in Unicode code points.
pub const MAX_QUERY_CHARS: usize = 512;

/// Outcome of a [`QueryBuffer::push_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The character was appended.
    Pushed,
    /// The buffer is at capacity; the character was dropped.
    Rejected,
}

/// Growable text buffer with an explicit maximum-length policy.
#[derive(Debug, Default, Clone)]
pub struct QueryBuffer {
    text: String,
    chars: usize,
}

impl QueryBuffer {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars
    }

    /// Whether the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Append a character, unless the buffer is at capacity.
    pub fn push_char(&mut self, c: char) -> PushOutcome {
        if self.chars >= MAX_QUERY_CHARS {
            return PushOutcome::Rejected;
        }
        self.text.push(c);
        self.chars += 1;
        PushOutcome::Pushed
    }

    /// Remove the last character. Returns `false` (a no-op) when empty.
    pub fn pop_char(&mut self) -> bool {
        if self.text.pop().is_some() {
            self.chars -= 1;
            true
        } else {
            false
        }
    }
}
