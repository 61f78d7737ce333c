//! Running ffprobe and parsing its JSON report.
//!
//! The probe requests quiet logging, JSON output, and both the `format` and
//! `streams` sections for exactly one file:
//!
//! ```text
//! ffprobe -v quiet -print_format json -show_format -show_streams <path>
//! ```

use std::io;
use std::path::Path;
use std::process::Command;

use serde_json::Value;

use super::{DEFAULT_PROBE_PROGRAM, resolve_probe_program};
use crate::error::{CoreError, CoreResult};

/// Produces the raw ffprobe document for a media file.
///
/// Implementations must be shareable across threads so the catalog can probe
/// files in parallel.
pub trait FfprobeExecutor: Send + Sync {
    /// Probes `path` and returns the parsed JSON document.
    ///
    /// # Errors
    ///
    /// * `CoreError::ToolNotFound` if the executable cannot be found
    /// * `CoreError::ProbeExecution` if it exits with a failure status
    /// * `CoreError::ProbeOutput` if its output is empty or not a JSON object
    fn probe(&self, path: &Path) -> CoreResult<Value>;
}

/// [`FfprobeExecutor`] backed by the ffprobe command-line tool.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: String,
}

impl CommandFfprobeExecutor {
    /// Uses `program` (a name looked up on `PATH`, or a path) as the probe.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandFfprobeExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_PROGRAM)
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<Value> {
        // Resolved per call so a tool removed mid-run is reported as missing.
        let executable = resolve_probe_program(&self.program)?;

        let mut cmd = Command::new(&executable);
        cmd.args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path);
        log::debug!("Running: {cmd:?}");

        let output = cmd.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CoreError::ToolNotFound(self.program.clone())
            } else {
                CoreError::CommandStart(self.program.clone(), e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::error!(
                "{} exited with {} for {}",
                self.program,
                output.status,
                path.display()
            );
            return Err(CoreError::ProbeExecution {
                path: path.to_path_buf(),
                status: output.status,
                stderr,
            });
        }

        parse_probe_output(path, &output.stdout)
    }
}

/// Parses ffprobe's standard output into a JSON object.
pub fn parse_probe_output(path: &Path, stdout: &[u8]) -> CoreResult<Value> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(CoreError::ProbeOutput {
            path: path.to_path_buf(),
            reason: "empty output".to_string(),
        });
    }

    let value: Value = serde_json::from_slice(stdout).map_err(|e| CoreError::ProbeOutput {
        path: path.to_path_buf(),
        reason: format!("invalid JSON: {e}"),
    })?;

    if !value.is_object() {
        return Err(CoreError::ProbeOutput {
            path: path.to_path_buf(),
            reason: "top-level value is not an object".to_string(),
        });
    }
    Ok(value)
}
