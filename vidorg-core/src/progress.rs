// ============================================================================
// vidorg-core/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Catalog Progress Callbacks and Events
//
// The catalog reports what it is doing through a ProgressCallback so that
// front ends can render it without the library knowing about terminals.
//
// KEY COMPONENTS:
// - ProgressEvent: Enum of catalog milestones
// - ProgressCallback: Trait for receiving progress events
// - NullProgressCallback: No-op implementation for when callbacks aren't needed

use std::fmt;
use std::path::PathBuf;

/// Milestones of one catalog run.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Discovery finished with `total` files passing the filters.
    DiscoveryComplete { total: usize },

    /// A file is about to be considered for probing.
    ///
    /// `position` runs from 1 to `total` over every discovered file,
    /// including those the catalog will not probe.
    ProbeStarted {
        position: usize,
        total: usize,
        path: PathBuf,
    },

    /// A discovered file was passed over without probing.
    FileSkipped { path: PathBuf, reason: String },

    /// A file was probed and stored under `sequence`.
    FileCataloged { sequence: usize, path: PathBuf },

    /// Probing failed for a file.
    ProbeFailed { path: PathBuf, message: String },

    /// The catalog is finished.
    CatalogComplete { entries: usize, total_bytes: u64 },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::DiscoveryComplete { total } => {
                write!(f, "Discovered {total} file(s)")
            }
            ProgressEvent::ProbeStarted {
                position, total, ..
            } => write!(f, "Processing file {position} of {total}"),
            ProgressEvent::FileSkipped { path, reason } => {
                write!(f, "Skipped {}: {reason}", path.display())
            }
            ProgressEvent::FileCataloged { sequence, path } => {
                write!(f, "[{sequence}] {}", path.display())
            }
            ProgressEvent::ProbeFailed { path, message } => {
                write!(f, "Failed to probe {}: {message}", path.display())
            }
            ProgressEvent::CatalogComplete {
                entries,
                total_bytes,
            } => write!(f, "Cataloged {entries} file(s), {total_bytes} bytes"),
        }
    }
}

/// Receiver for catalog progress events.
///
/// Must be `Send + Sync`: with parallel probing, events arrive from worker
/// threads.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, event: ProgressEvent);
}

/// A callback that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressCallback;

impl ProgressCallback for NullProgressCallback {
    fn on_progress(&self, _event: ProgressEvent) {}
}

impl<F> ProgressCallback for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn on_progress(&self, event: ProgressEvent) {
        self(event);
    }
}
