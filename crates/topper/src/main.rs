#![forbid(unsafe_code)]

//! `topper --twot`: pick a window from an inline terminal menu and toggle
//! its always-on-top attribute.

use std::io;
use std::process;

use topper::backend::{self, WindowBackend, WindowId};
use topper::cli;
use topper_core::picker::{PickOutcome, run_picker};
use topper_core::Candidate;
use topper_tty::{RawSession, TtySurface};
use tracing_subscriber::EnvFilter;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    init_logging();

    println!("{}", "-".repeat(70));

    match cli::parse(std::env::args().skip(1)) {
        Ok(cli::Command::ToggleTopmost) => toggle_topmost(),
        Err(cli::ParseError::HelpRequested) => {
            println!("{}", cli::HELP_TEXT);
            1
        }
        Err(cli::ParseError::Unrecognized) => {
            println!("{}", cli::USAGE);
            1
        }
    }
}

/// Logging goes to stderr so it cannot disturb the menu region; silent
/// unless `TOPPER_LOG` is set.
fn init_logging() {
    let Ok(filter) = EnvFilter::try_from_env("TOPPER_LOG") else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn toggle_topmost() -> i32 {
    let backend = match backend::native() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let windows = match backend.enumerate() {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    tracing::debug!(count = windows.len(), "enumerated windows");

    if windows.is_empty() {
        println!("\nNo selected window");
        return 0;
    }

    let outcome = match pick(backend.as_ref(), &windows) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("terminal error: {e}");
            return 1;
        }
    };

    match outcome {
        PickOutcome::Cancelled => {
            println!("\nNo selected window");
            0
        }
        PickOutcome::Confirmed(id) => apply_toggle(backend.as_ref(), &windows, id),
    }
}

/// Run the interactive picker inside a raw-mode session. The session drops
/// before the result is reported, so reporting happens in cooked mode.
fn pick(
    backend: &dyn WindowBackend,
    windows: &[Candidate<WindowId>],
) -> io::Result<PickOutcome<WindowId>> {
    let mut session = RawSession::new()?;
    let mut surface = TtySurface::new();
    let mut status = |id: &WindowId| backend.status_tag(*id);
    run_picker(&mut surface, &mut session, windows, &mut status)
}

fn apply_toggle(
    backend: &dyn WindowBackend,
    windows: &[Candidate<WindowId>],
    id: WindowId,
) -> i32 {
    let title = windows
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.label.as_str())
        .unwrap_or("<unknown>");
    println!("\nSelected window: {title}");

    match backend.toggle_topmost(id) {
        Ok(true) => {
            println!("{title} is now TOPMOST.");
            0
        }
        Ok(false) => {
            println!("{title} is now NOT TOPMOST.");
            0
        }
        Err(e) => {
            println!("Could not change {title}: {e}");
            1
        }
    }
}
