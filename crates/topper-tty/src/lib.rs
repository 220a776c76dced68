#![forbid(unsafe_code)]

//! Terminal backend: raw-mode lifecycle, a crossterm [`topper_core::Surface`]
//! implementation, and crossterm-to-logical key mapping.

pub mod keys;
pub mod session;
pub mod surface;

pub use session::RawSession;
pub use surface::TtySurface;
