//! Library surface of the topper binary: CLI parsing and the window
//! collaborator boundary, exposed so integration tests can exercise them.
//!
//! Unsafe code is confined to the Win32 backend module; everything else
//! forbids it file by file.

pub mod backend;
pub mod cli;
