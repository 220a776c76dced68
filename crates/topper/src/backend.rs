//! Window collaborator boundary.
//!
//! The picker itself never touches a window: enumeration, status lookup and
//! the attribute toggle live behind [`WindowBackend`]. The native Win32
//! implementation is in the `win32` submodule; on other platforms
//! [`native`] reports the feature unavailable.

use std::fmt;

use topper_core::Candidate;

#[cfg(windows)]
mod win32;

/// Opaque window handle (an `HWND` on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub isize);

/// Window enumeration and the always-on-top toggle.
pub trait WindowBackend {
    /// Currently eligible windows, in enumeration order (not sorted).
    ///
    /// Eligibility follows alt-tab semantics: visible, non-cloaked,
    /// top-level windows with a non-empty title.
    fn enumerate(&self) -> Result<Vec<Candidate<WindowId>>, BackendError>;

    /// Per-window annotation shown in the menu (`TOPMOST` / `NOT TOPMOST`).
    /// Queried at render time, never cached.
    fn status_tag(&self, id: WindowId) -> Option<String>;

    /// Toggle the window's topmost attribute. Returns the new state
    /// (`true` = now topmost). Invoked at most once, never retried.
    fn toggle_topmost(&self, id: WindowId) -> Result<bool, BackendError>;
}

/// Failures at the window-management boundary.
#[derive(Debug)]
pub enum BackendError {
    /// This build has no native window backend.
    Unsupported,
    /// An OS call failed.
    Os(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => {
                write!(f, "window management is not supported on this platform")
            }
            Self::Os(message) => write!(f, "window call failed: {message}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// The platform's native backend.
#[cfg(windows)]
pub fn native() -> Result<Box<dyn WindowBackend>, BackendError> {
    Ok(Box::new(win32::Win32Backend::new()))
}

/// The platform's native backend.
#[cfg(not(windows))]
pub fn native() -> Result<Box<dyn WindowBackend>, BackendError> {
    Err(BackendError::Unsupported)
}
