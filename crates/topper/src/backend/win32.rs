//! Native Win32 backend.
//!
//! Enumeration mirrors the alt-tab switcher: invisible windows, DWM-cloaked
//! UWP shells, untitled windows, and tool windows without `WS_EX_APPWINDOW`
//! are all skipped. The topmost toggle is a `SetWindowPos` with
//! `HWND_TOPMOST` / `HWND_NOTOPMOST`, size and position untouched.

use std::ffi::c_void;

use topper_core::Candidate;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::Graphics::Dwm::{DWMWA_CLOAKED, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GA_ROOTOWNER, GWL_EXSTYLE, GW_OWNER, GetAncestor, GetLastActivePopup, GetWindow,
    GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW, HWND_NOTOPMOST, HWND_TOPMOST,
    IsWindowVisible, SWP_NOMOVE, SWP_NOSIZE, SWP_SHOWWINDOW, SetWindowPos, WS_EX_APPWINDOW,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
};
use windows::core::BOOL;

use super::{BackendError, WindowBackend, WindowId};

/// Stateless handle to the Win32 window APIs.
#[derive(Debug, Default)]
pub struct Win32Backend;

impl Win32Backend {
    pub fn new() -> Self {
        Self
    }
}

impl WindowBackend for Win32Backend {
    fn enumerate(&self) -> Result<Vec<Candidate<WindowId>>, BackendError> {
        let mut found: Vec<Candidate<WindowId>> = Vec::new();
        // SAFETY: the callback only runs for the duration of EnumWindows,
        // while `found` is alive and exclusively borrowed by it.
        unsafe {
            EnumWindows(
                Some(enum_proc),
                LPARAM(&raw mut found as isize),
            )
        }
        .map_err(|e| BackendError::Os(e.to_string()))?;
        Ok(found)
    }

    fn status_tag(&self, id: WindowId) -> Option<String> {
        let tag = if is_topmost(hwnd(id)) {
            "TOPMOST"
        } else {
            "NOT TOPMOST"
        };
        Some(tag.to_string())
    }

    fn toggle_topmost(&self, id: WindowId) -> Result<bool, BackendError> {
        let hwnd = hwnd(id);
        let was_topmost = is_topmost(hwnd);
        let insert_after = if was_topmost {
            HWND_NOTOPMOST
        } else {
            HWND_TOPMOST
        };
        // SAFETY: plain Win32 call; a stale handle makes it fail, not UB.
        unsafe {
            SetWindowPos(
                hwnd,
                Some(insert_after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_SHOWWINDOW,
            )
        }
        .map_err(|e| BackendError::Os(e.to_string()))?;
        Ok(!was_topmost)
    }
}

fn hwnd(id: WindowId) -> HWND {
    HWND(id.0 as *mut c_void)
}

fn is_topmost(hwnd: HWND) -> bool {
    // SAFETY: reads a style bit; valid for any window handle.
    let ex_style = unsafe { GetWindowLongPtrW(hwnd, GWL_EXSTYLE) };
    (ex_style as u32) & WS_EX_TOPMOST.0 != 0
}

/// Alt-tab eligibility, per the shell's unofficial rules.
fn is_alt_tab_window(hwnd: HWND) -> bool {
    unsafe {
        if !IsWindowVisible(hwnd).as_bool() {
            return false;
        }

        // Cloaked UWP windows (e.g. the touch keyboard) report visible but
        // are not shown in the switcher.
        let mut cloaked = BOOL(0);
        let _ = DwmGetWindowAttribute(
            hwnd,
            DWMWA_CLOAKED,
            (&raw mut cloaked).cast::<c_void>(),
            size_of::<BOOL>() as u32,
        );
        if cloaked.as_bool() {
            return false;
        }

        // Walk to the window this root owner chain would activate.
        let mut walk = GetAncestor(hwnd, GA_ROOTOWNER);
        loop {
            let try_next = GetLastActivePopup(walk);
            if try_next == walk {
                break;
            }
            walk = try_next;
            if IsWindowVisible(walk).as_bool() {
                break;
            }
        }

        if GetWindow(hwnd, GW_OWNER).is_ok() {
            return true;
        }

        // Tool windows stay hidden unless they opt in with WS_EX_APPWINDOW.
        let ex_style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE) as u32;
        if ex_style & WS_EX_TOOLWINDOW.0 != 0 && ex_style & WS_EX_APPWINDOW.0 == 0 {
            return false;
        }

        walk == hwnd
    }
}

fn window_title(hwnd: HWND) -> Option<String> {
    // SAFETY: GetWindowTextW writes at most `buf.len()` u16s incl. the nul.
    unsafe {
        let length = GetWindowTextLengthW(hwnd);
        if length <= 0 {
            return None;
        }
        let mut buf = vec![0u16; length as usize + 1];
        let copied = GetWindowTextW(hwnd, &mut buf);
        if copied <= 0 {
            return None;
        }
        Some(String::from_utf16_lossy(&buf[..copied as usize]))
    }
}

extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the `found` vector from `enumerate`, alive for the
    // whole EnumWindows call.
    let found = unsafe { &mut *(lparam.0 as *mut Vec<Candidate<WindowId>>) };

    if is_alt_tab_window(hwnd) {
        if let Some(title) = window_title(hwnd) {
            found.push(Candidate::new(WindowId(hwnd.0 as isize), title));
        }
    }
    BOOL(1)
}
