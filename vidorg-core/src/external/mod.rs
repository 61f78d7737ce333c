// ============================================================================
// vidorg-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: ffprobe Invocation
//
// This module wraps the external ffprobe executable behind the FfprobeExecutor
// trait so the catalog can be driven by the real tool or by a test double.
//
// KEY COMPONENTS:
// - FfprobeExecutor: Trait producing the raw JSON document for one file
// - CommandFfprobeExecutor: Implementation that spawns the ffprobe process
// - resolve_probe_program: PATH lookup that reports a missing tool distinctly

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub mod ffprobe_executor;

pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor};

/// Default name of the probe executable.
pub const DEFAULT_PROBE_PROGRAM: &str = "ffprobe";

/// Resolves `program` to an executable path using the `PATH` search rules.
///
/// Names containing a path separator are checked as given.
pub fn resolve_probe_program(program: &str) -> CoreResult<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Using {program} at {}", path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("Lookup of {program} failed: {e}");
            Err(CoreError::ToolNotFound(program.to_string()))
        }
    }
}
