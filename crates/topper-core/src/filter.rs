#![forbid(unsafe_code)]

//! Query engine: case-insensitive substring filtering.
//!
//! A deliberately simple matcher. There is no scoring and no re-ranking: the
//! output preserves enumeration order, so the menu never reshuffles under the
//! user's cursor while they type.
//!
//! # Invariants
//!
//! 1. Stable: output order is the relative order of the input.
//! 2. Empty query matches everything.
//! 3. Narrowing: for any query `q` and extension `q + s`, the result for
//!    `q + s` is a subsequence of the result for `q`.
//! 4. Case-insensitive via Unicode lowercasing, not ASCII-only.

use crate::candidate::Candidate;

/// Return the indices of candidates whose label contains `query`,
/// case-insensitively, in their original order.
///
/// Pure and stateless; cheap enough to re-run on every keystroke.
#[must_use]
pub fn filter<T>(candidates: &[Candidate<T>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..candidates.len()).collect();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.label.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
