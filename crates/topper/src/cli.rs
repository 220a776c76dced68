#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! One recognized command; anything else prints usage and exits non-zero.

/// One-line usage, shown for a missing or unrecognized command.
pub const USAGE: &str = "Usage:\n  topper --twot";

/// Full help, shown for `--help` / `-h`.
pub const HELP_TEXT: &str = "\
topper - toggle a window's always-on-top attribute

USAGE:
    topper --twot

COMMANDS:
    --twot    Pick a window interactively and toggle its topmost state

PICKER KEYS:
    type         filter the window list (case-insensitive)
    Up / Down    move the selection (wraps at the ends)
    Enter        confirm the selected window
    Esc          cancel

ENVIRONMENT VARIABLES:
    TOPPER_LOG   tracing filter, logged to stderr (e.g. 'debug')";

/// Recognized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle a window on top: enumerate, pick, apply.
    ToggleTopmost,
}

/// Why parsing did not produce a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// `--help` / `-h` was given explicitly.
    HelpRequested,
    /// No argument, or an unrecognized one.
    Unrecognized,
}

/// Parse the process arguments (program name already stripped).
pub fn parse<I>(mut args: I) -> Result<Command, ParseError>
where
    I: Iterator<Item = String>,
{
    match args.next().as_deref() {
        Some("--twot") => Ok(Command::ToggleTopmost),
        Some("--help" | "-h") => Err(ParseError::HelpRequested),
        _ => Err(ParseError::Unrecognized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_of(args: &[&str]) -> Result<Command, ParseError> {
        parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn twot_is_recognized() {
        assert_eq!(parse_of(&["--twot"]), Ok(Command::ToggleTopmost));
    }

    #[test]
    fn no_arguments_is_unrecognized() {
        assert_eq!(parse_of(&[]), Err(ParseError::Unrecognized));
    }

    #[test]
    fn unknown_arguments_are_unrecognized() {
        assert_eq!(parse_of(&["--toggle"]), Err(ParseError::Unrecognized));
        assert_eq!(parse_of(&["twot"]), Err(ParseError::Unrecognized));
    }

    #[test]
    fn help_flags_request_help() {
        assert_eq!(parse_of(&["--help"]), Err(ParseError::HelpRequested));
        assert_eq!(parse_of(&["-h"]), Err(ParseError::HelpRequested));
    }
}
