// ============================================================================
// vidorg-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every setter is optional; anything left
// unset keeps the value from CoreConfig::default().

use std::path::PathBuf;

use super::{CoreConfig, ProbeErrorPolicy};

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use vidorg_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .path("/media/movies")
///     .no_subdirs(true)
///     .parallel_probing(true)
///     .build();
/// assert!(config.no_subdirs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    pub fn no_subdirs(mut self, no_subdirs: bool) -> Self {
        self.config.no_subdirs = no_subdirs;
        self
    }

    pub fn includes<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.includes = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn excludes<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excludes = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the extension allow-list. An empty list accepts every file.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn probe_program(mut self, program: impl Into<String>) -> Self {
        self.config.probe_program = program.into();
        self
    }

    pub fn probe_error_policy(mut self, policy: ProbeErrorPolicy) -> Self {
        self.config.probe_error_policy = policy;
        self
    }

    pub fn parallel_probing(mut self, parallel: bool) -> Self {
        self.config.parallel_probing = parallel;
        self
    }

    pub fn language_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.language_table = Some(path.into());
        self
    }

    pub fn build(self) -> CoreConfig {
        self.config
    }
}
