//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// The `info` command: discover media files and print their metadata.
pub mod info;

pub use info::run_info;
