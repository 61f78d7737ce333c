// ============================================================================
// vidorg-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// This module defines the error type shared by every fallible operation in
// vidorg-core. Conditions that only affect a single track (a stream without an
// index, a stream of an unknown type) are not errors: they are logged and
// counted by the extractor instead.
//
// KEY COMPONENTS:
// - CoreError: Enum of all fatal and per-file error conditions
// - CoreResult: Result alias used throughout the crate

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by discovery, probing, and catalog assembly.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The root path handed to the walker does not exist.
    #[error("The path {} does not exist.", .0.display())]
    PathNotFound(PathBuf),

    /// The probe executable could not be resolved on the search path.
    #[error("{0} not found, please make sure you installed ffmpeg correctly.")]
    ToolNotFound(String),

    /// The probe executable ran but exited with a failure status.
    #[error("Failed to execute ffprobe on {}: {status}: {stderr}", .path.display())]
    ProbeExecution {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    /// The probe produced empty or unparsable output.
    #[error("Failed to get raw data from ffprobe for {}: {reason}", .path.display())]
    ProbeOutput { path: PathBuf, reason: String },

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load language table: {0}")]
    LanguageTable(String),

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether this error must abort the whole run even when the catalog is
    /// configured to skip files whose probe fails.
    #[must_use]
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(
            self,
            CoreError::ToolNotFound(_)
                | CoreError::PathNotFound(_)
                | CoreError::Config(_)
                | CoreError::LanguageTable(_)
        )
    }
}

/// Result type for vidorg-core operations.
pub type CoreResult<T> = Result<T, CoreError>;
