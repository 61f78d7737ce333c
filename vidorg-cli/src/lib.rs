//! Command-line front end for vidorg.
//!
//! The binary in `main.rs` only parses arguments and dispatches; the pieces
//! live here so they can be unit tested.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, InfoArgs};
pub use commands::run_info;
pub use error::CliResult;
pub use logging::{OutputMode, init_logging};
