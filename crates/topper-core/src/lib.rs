#![forbid(unsafe_code)]

//! Core: picker state machine, query filtering, and menu rendering.
//!
//! Everything in this crate is terminal-agnostic. The controller talks to the
//! screen through the [`surface::Surface`] trait and reads keystrokes through
//! the [`key::KeySource`] trait, so the whole picker can be driven in tests by
//! an in-memory surface and a scripted key sequence.

pub mod candidate;
pub mod filter;
pub mod key;
pub mod menu;
pub mod picker;
pub mod query;
pub mod state;
pub mod surface;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use candidate::Candidate;
pub use key::{Key, KeySource};
pub use picker::{PickOutcome, run_picker};
pub use surface::Surface;
