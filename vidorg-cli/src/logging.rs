// ============================================================================
// vidorg-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console Verbosity and env_logger Initialization
//
// The three verbosity flags are resolved into one OutputMode. Debug wins over
// both quiet flags, and --quiet wins over --quiet-flow; flags that lose are
// reported with a warning once the logger is running.
//
// USAGE:
// - default: warnings and errors
// - --debug: everything down to debug
// - --quiet: errors only
// - RUST_LOG overrides the level chosen from the flags

use log::LevelFilter;

/// Effective console verbosity after flag precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Normal,
    QuietFlow,
    Quiet,
    Debug,
}

impl OutputMode {
    /// Resolves the flags and names the ones that were overridden.
    #[must_use]
    pub fn resolve(debug: bool, quiet: bool, quiet_flow: bool) -> (Self, IgnoredFlags) {
        if debug {
            let ignored = [("quiet", quiet), ("quiet-flow", quiet_flow)];
            (OutputMode::Debug, IgnoredFlags::new("debug", &ignored))
        } else if quiet {
            (
                OutputMode::Quiet,
                IgnoredFlags::new("quiet", &[("quiet-flow", quiet_flow)]),
            )
        } else if quiet_flow {
            (OutputMode::QuietFlow, IgnoredFlags::default())
        } else {
            (OutputMode::Normal, IgnoredFlags::default())
        }
    }

    #[must_use]
    pub fn level(self) -> LevelFilter {
        match self {
            OutputMode::Debug => LevelFilter::Debug,
            OutputMode::Quiet => LevelFilter::Error,
            OutputMode::Normal | OutputMode::QuietFlow => LevelFilter::Warn,
        }
    }

    /// Whether flow messages (file list, progress bar) are shown.
    #[must_use]
    pub fn shows_flow(self) -> bool {
        matches!(self, OutputMode::Normal | OutputMode::Debug)
    }

    /// Whether the active search filters are listed after discovery.
    #[must_use]
    pub fn shows_search_options(self) -> bool {
        matches!(self, OutputMode::Normal | OutputMode::QuietFlow)
    }

    #[must_use]
    pub fn is_quiet(self) -> bool {
        self == OutputMode::Quiet
    }
}

/// Flags that had no effect because a stronger one was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredFlags {
    winner: &'static str,
    ignored: Vec<&'static str>,
}

impl IgnoredFlags {
    fn new(winner: &'static str, candidates: &[(&'static str, bool)]) -> Self {
        Self {
            winner,
            ignored: candidates
                .iter()
                .filter(|(_, set)| *set)
                .map(|(name, _)| *name)
                .collect(),
        }
    }

    /// Warning text, or `None` when nothing was ignored.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if self.ignored.is_empty() {
            return None;
        }
        let form = match self.ignored.len() {
            1 => "an argument was".to_string(),
            n => format!("{n} arguments were"),
        };
        let list = self
            .ignored
            .iter()
            .map(|name| format!("--{name}"))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "There's {form} ignored when `--{}` is used: {list}",
            self.winner
        ))
    }
}

/// Installs env_logger at the level implied by `mode`.
pub fn init_logging(mode: OutputMode, ignored: &IgnoredFlags) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(mode.level());
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format_timestamp(None).format_target(false);
    if builder.try_init().is_err() {
        return;
    }

    if let Some(message) = ignored.message() {
        log::warn!("{message}");
    }
}
