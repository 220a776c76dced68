#![forbid(unsafe_code)]

//! Raw-mode session lifecycle guard.
//!
//! RAII-based terminal lifecycle management that ensures cleanup even on
//! panic. The picker runs inline (no alternate screen, no mouse capture),
//! so the only tracked state is raw mode itself plus cursor visibility.
//!
//! # Lifecycle guarantees
//!
//! 1. Raw mode is entered on construction and exited on [`Drop`].
//! 2. A process-wide panic hook performs best-effort restoration before the
//!    panic message prints, so a crash never leaves the shell unusable.
//! 3. On Unix, SIGINT/SIGTERM are watched on a helper thread that restores
//!    the terminal and exits with `128 + signal`.
//! 4. Only one session may exist at a time; the session owns the terminal
//!    exclusively for its lifetime.

use std::io::{self, Write};
use std::sync::OnceLock;

use topper_core::key::{Key, KeySource};

use crate::keys::map_event;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// A terminal session that holds raw mode and restores it on drop.
#[derive(Debug)]
pub struct RawSession {
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl RawSession {
    /// Enter raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled (e.g. stdin is not a
    /// tty).
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        #[cfg(feature = "tracing")]
        tracing::info!("terminal raw mode enabled");

        Ok(Self {
            #[cfg(unix)]
            signal_guard: Some(SignalGuard::new()?),
        })
    }

    /// Current terminal size as `(columns, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn cleanup(&mut self) {
        #[cfg(unix)]
        let _ = self.signal_guard.take();

        restore_terminal();
        #[cfg(feature = "tracing")]
        tracing::info!("terminal raw mode disabled");
    }
}

impl KeySource for RawSession {
    /// Block until the next key that maps onto the picker's logical set.
    ///
    /// Unmappable events (mouse, resize, focus, key release) are skipped.
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = map_event(crossterm::event::read()?) {
                return Ok(key);
            }
        }
    }
}

impl Drop for RawSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

/// Best-effort restoration, safe to call from any exit path.
fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for signal in signals.forever() {
                #[cfg(feature = "tracing")]
                tracing::warn!(signal, "termination signal received, cleaning up");
                restore_terminal();
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

// Note: tests that actually enter raw mode would fight the test runner's
// terminal state; session behavior is exercised interactively and via the
// pure key-mapping tests in `keys`.
