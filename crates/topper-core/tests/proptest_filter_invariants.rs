//! Property-based invariant tests for the query engine and selection cursor.
//!
//! 1. Empty query is the identity filter.
//! 2. Filtering is case-insensitive.
//! 3. Extending a query never adds candidates (narrowing subsequence).
//! 4. Output indices are strictly increasing (stable order).
//! 5. The selection cursor stays in bounds under any navigation sequence,
//!    and up/down wrap at the ends.

use proptest::prelude::*;
use topper_core::filter::filter;
use topper_core::key::Key;
use topper_core::state::PickerState;
use topper_core::Candidate;

fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,24}", 0..32)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,8}".prop_map(|s| s)
}

fn to_candidates(labels: Vec<String>) -> Vec<Candidate<usize>> {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| Candidate::new(i, label))
        .collect()
}

fn is_subsequence(narrow: &[usize], wide: &[usize]) -> bool {
    let mut it = wide.iter();
    narrow.iter().all(|n| it.any(|w| w == n))
}

proptest! {
    #[test]
    fn empty_query_is_identity(labels in labels_strategy()) {
        let all = to_candidates(labels);
        let expected: Vec<usize> = (0..all.len()).collect();
        prop_assert_eq!(filter(&all, ""), expected);
    }

    #[test]
    fn filter_is_case_insensitive(labels in labels_strategy(), query in query_strategy()) {
        let all = to_candidates(labels);
        let base = filter(&all, &query);
        prop_assert_eq!(&base, &filter(&all, &query.to_uppercase()));
        prop_assert_eq!(&base, &filter(&all, &query.to_lowercase()));
    }

    #[test]
    fn extending_a_query_never_adds_candidates(
        labels in labels_strategy(),
        prefix in query_strategy(),
        suffix in query_strategy(),
    ) {
        let all = to_candidates(labels);
        let wide = filter(&all, &prefix);
        let narrow = filter(&all, &format!("{prefix}{suffix}"));
        prop_assert!(is_subsequence(&narrow, &wide));
    }

    #[test]
    fn output_order_is_stable(labels in labels_strategy(), query in query_strategy()) {
        let all = to_candidates(labels);
        let result = filter(&all, &query);
        prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn cursor_stays_in_bounds_under_navigation(
        labels in prop::collection::vec("[a-z]{1,8}", 1..16),
        moves in prop::collection::vec(prop::bool::ANY, 0..64),
    ) {
        let all = to_candidates(labels);
        let mut state = PickerState::new(all.len());
        for down in moves {
            let key = if down { Key::Down } else { Key::Up };
            state.apply(&all, key);
            prop_assert!(state.cursor() < state.filtered().len());
        }
    }
}

#[test]
fn wraparound_at_the_ends() {
    let all = to_candidates(vec!["a".into(), "b".into(), "c".into()]);
    let mut state = PickerState::new(all.len());
    state.apply(&all, Key::Up);
    assert_eq!(state.cursor(), all.len() - 1);
    state.apply(&all, Key::Down);
    assert_eq!(state.cursor(), 0);
}
