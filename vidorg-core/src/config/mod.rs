//! Configuration structures and constants for the vidorg-core library.
//!
//! This module holds the search options for discovery, the probe settings,
//! and the catalog's failure policy.

mod builder;

use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

use crate::discovery::DiscoveryOptions;
use crate::error::{CoreError, CoreResult};
use crate::external::DEFAULT_PROBE_PROGRAM;

// Default constants

/// Extensions searched when the user gives none.
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".mkv", ".mp4", ".avi", ".mov", ".wmv"];

/// The only extension the catalog probes. Other discovered files are
/// counted but never identified.
pub const CATALOG_EXTENSION: &str = ".mkv";

/// What the catalog does when probing a single file fails.
///
/// A missing probe executable always aborts, whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeErrorPolicy {
    /// Stop the run at the first failed probe.
    #[default]
    Abort,
    /// Report the failure and continue with the next file.
    Skip,
}

/// Main configuration structure for the vidorg-core library.
///
/// Built by the CLI from its arguments, or with [`CoreConfigBuilder`].
///
/// # Examples
///
/// ```rust
/// use vidorg_core::config::{CoreConfigBuilder, ProbeErrorPolicy};
///
/// let config = CoreConfigBuilder::new()
///     .path("/media/anime")
///     .includes(["S01"])
///     .excludes(["sample"])
///     .extensions([".mkv"])
///     .probe_error_policy(ProbeErrorPolicy::Skip)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory or single file to search
    pub path: PathBuf,

    /// Only look at the direct children of `path`
    pub no_subdirs: bool,

    /// Keywords an entry name must contain (any of them)
    pub includes: Vec<String>,

    /// Keywords an entry name must not contain
    pub excludes: Vec<String>,

    /// File extensions to accept, each with its leading dot
    pub extensions: Vec<String>,

    /// Name or path of the ffprobe executable
    pub probe_program: String,

    pub probe_error_policy: ProbeErrorPolicy,

    /// Probe files on the rayon thread pool
    pub parallel_probing: bool,

    /// JSON file replacing the built-in ISO 639-2 table
    pub language_table: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            no_subdirs: false,
            includes: Vec::new(),
            excludes: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            probe_program: DEFAULT_PROBE_PROGRAM.to_string(),
            probe_error_policy: ProbeErrorPolicy::default(),
            parallel_probing: false,
            language_table: None,
        }
    }
}

impl CoreConfig {
    /// Configuration with defaults for everything except the search root.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Checks the values that cannot be repaired silently.
    pub fn validate(&self) -> CoreResult<()> {
        if self.probe_program.trim().is_empty() {
            return Err(CoreError::Config(
                "the probe program name is empty".to_string(),
            ));
        }
        if let Some(bad) = self.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(CoreError::Config(format!(
                "extension '{bad}' must start with a dot (e.g. '.{bad}')"
            )));
        }
        Ok(())
    }

    /// The filter options handed to the directory walker.
    #[must_use]
    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            includes: self.includes.clone(),
            excludes: self.excludes.clone(),
            extensions: self.extensions.clone(),
            no_subdirs: self.no_subdirs,
        }
    }
}

/// Splits a comma-separated option value into trimmed, non-empty items.
///
/// `"S01, 1080p,,"` yields `["S01", "1080p"]`.
#[must_use]
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
