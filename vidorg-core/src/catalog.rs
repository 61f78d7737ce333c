// ============================================================================
// vidorg-core/src/catalog.rs
// ============================================================================
//
// CATALOG ASSEMBLY: Discovery, Probing, and Aggregation for One Run
//
// The Cataloger drives the walker, probes every discovered Matroska file, and
// collects the extracted metadata into a MediaCatalog keyed by a 1-based
// sequence number. Run-wide counters live in RunStats on the catalog itself;
// nothing is kept in global state.
//
// KEY COMPONENTS:
// - Cataloger: State machine Idle -> Discovering -> Probing(i) -> Aggregating -> Done
// - MediaCatalog: Finished, read-only result of a run
// - MediaRecord: Metadata of one file
// - RunStats: Counters and the cumulative probed byte total
//
// Probing may run on the rayon pool. Results are always aggregated in
// discovery order, so sequence numbers do not depend on thread scheduling.
// A failure that ends the run stops workers from starting further probes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{CATALOG_EXTENSION, CoreConfig, ProbeErrorPolicy};
use crate::discovery::find_media_files;
use crate::error::CoreResult;
use crate::external::FfprobeExecutor;
use crate::identify::{
    Extraction, ExtractionWarnings, FileTracks, FormatSummary, LanguageTable, MetadataExtractor,
    TrackKind, TrackRef,
};
use crate::progress::{NullProgressCallback, ProgressCallback, ProgressEvent};

// ============================================================================
// RECORDS
// ============================================================================

/// Identification result for one media file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRecord {
    pub sequence: usize,
    pub file_name: String,
    pub file_path: PathBuf,
    pub format: FormatSummary,
    pub tracks: FileTracks,
    pub total_tracks: usize,
    pub total_video_tracks: usize,
    pub total_audio_tracks: usize,
    pub total_subtitle_tracks: usize,
    pub total_attachment_tracks: usize,
    pub total_fonts: u32,
    pub warnings: ExtractionWarnings,
}

impl MediaRecord {
    /// Builds the record for a completed extraction.
    #[must_use]
    pub fn new(sequence: usize, path: &Path, extraction: Extraction) -> Self {
        let Extraction {
            format,
            tracks,
            warnings,
        } = extraction;
        Self {
            sequence,
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_path: path.to_path_buf(),
            total_tracks: tracks.total(),
            total_video_tracks: tracks.total_of(TrackKind::Video),
            total_audio_tracks: tracks.total_of(TrackKind::Audio),
            total_subtitle_tracks: tracks.total_of(TrackKind::Subtitle),
            total_attachment_tracks: tracks.total_of(TrackKind::Attachment),
            total_fonts: tracks.font_count,
            format,
            tracks,
            warnings,
        }
    }

    /// Returns the track with the given stream index, whatever its kind.
    pub fn track(&self, index: u32) -> Option<TrackRef<'_>> {
        let track = self.tracks.get(index);
        if track.is_none() {
            log::warn!("Track {index} not found in {}", self.file_path.display());
        }
        track
    }

    /// File size in bytes as reported by ffprobe.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.format.size
    }

    #[must_use]
    pub fn size_kib(&self) -> String {
        format!("{:.2} KiB", self.format.size as f64 / 1024.0)
    }

    #[must_use]
    pub fn size_mib(&self) -> String {
        format!("{:.2} MiB", self.format.size as f64 / (1024.0 * 1024.0))
    }

    #[must_use]
    pub fn size_gib(&self) -> String {
        format!(
            "{:.2} GiB",
            self.format.size as f64 / (1024.0 * 1024.0 * 1024.0)
        )
    }

    /// Container duration as `HH:MM:SS.mmm`.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.format.duration
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.format.duration_secs
    }
}

/// A file whose probe failed while the skip policy was active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Files that passed the discovery filters.
    pub files_discovered: usize,
    /// Files probed and stored in the catalog.
    pub files_cataloged: usize,
    /// Discovered files that are not Matroska and were never probed.
    pub files_skipped: usize,
    /// Files whose probe failed under the skip policy.
    pub files_failed: usize,
    /// Sum of `format.size` over every cataloged file.
    pub total_bytes: u64,
}

impl RunStats {
    fn record_cataloged(&mut self, format: &FormatSummary) {
        self.files_cataloged += 1;
        self.total_bytes = self.total_bytes.saturating_add(format.size);
    }
}

/// The read-only result of a catalog run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaCatalog {
    entries: BTreeMap<usize, MediaRecord>,
    stats: RunStats,
    failures: Vec<ProbeFailure>,
}

impl MediaCatalog {
    /// Record stored under a 1-based sequence number.
    #[must_use]
    pub fn get(&self, sequence: usize) -> Option<&MediaRecord> {
        self.entries.get(&sequence)
    }

    /// Records in sequence order.
    pub fn records(&self) -> impl Iterator<Item = &MediaRecord> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Number of files that passed discovery, probed or not.
    #[must_use]
    pub fn total_discovered(&self) -> usize {
        self.stats.files_discovered
    }

    /// Bytes covered by every cataloged file.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.stats.total_bytes
    }

    /// Files skipped because their probe failed.
    #[must_use]
    pub fn failures(&self) -> &[ProbeFailure] {
        &self.failures
    }
}

// ============================================================================
// STATE MACHINE
// ============================================================================

/// Where a [`Cataloger`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    Idle,
    Discovering,
    /// Handling the discovered file at this 1-based position.
    Probing(usize),
    Aggregating,
    Done,
}

/// Whether the catalog identifies files with this path's extension.
#[must_use]
pub fn is_catalog_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| CATALOG_EXTENSION.strip_prefix('.') == Some(ext))
}

/// Builds a [`MediaCatalog`] from a [`CoreConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use vidorg_core::{Cataloger, CommandFfprobeExecutor, CoreConfig};
///
/// let config = CoreConfig::new("/media/anime");
/// let executor = CommandFfprobeExecutor::new(config.probe_program.clone());
/// let catalog = Cataloger::new(&config, &executor).run().unwrap();
/// for record in catalog.records() {
///     println!("{}: {} tracks", record.file_name, record.total_tracks);
/// }
/// ```
pub struct Cataloger<'a> {
    config: &'a CoreConfig,
    executor: &'a dyn FfprobeExecutor,
    progress: &'a dyn ProgressCallback,
    state: CatalogState,
}

impl<'a> Cataloger<'a> {
    pub fn new(config: &'a CoreConfig, executor: &'a dyn FfprobeExecutor) -> Self {
        Self {
            config,
            executor,
            progress: &NullProgressCallback,
            state: CatalogState::Idle,
        }
    }

    /// Sends progress events to `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressCallback) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn state(&self) -> CatalogState {
        self.state
    }

    /// Discovers files under the configured path and catalogs them.
    ///
    /// # Errors
    ///
    /// Discovery errors, an invalid configuration, and probe errors that the
    /// configured [`ProbeErrorPolicy`] does not skip.
    pub fn run(&mut self) -> CoreResult<MediaCatalog> {
        let files = self.discover()?;
        self.catalog_files(&files)
    }

    /// Runs only the discovery step, leaving the cataloger in
    /// [`CatalogState::Discovering`] until [`Cataloger::build`] is called.
    ///
    /// # Errors
    ///
    /// An invalid configuration and discovery errors.
    pub fn discover(&mut self) -> CoreResult<Vec<PathBuf>> {
        self.config.validate()?;
        self.state = CatalogState::Discovering;
        log::info!("Searching {}", self.config.path.display());
        let files = find_media_files(&self.config.path, &self.config.discovery_options())?;
        self.progress
            .on_progress(ProgressEvent::DiscoveryComplete { total: files.len() });
        Ok(files)
    }

    /// Catalogs an already discovered list of files, in order.
    ///
    /// # Errors
    ///
    /// An invalid configuration, an unreadable language table, and probe
    /// errors that the configured [`ProbeErrorPolicy`] does not skip.
    pub fn build(&mut self, files: &[PathBuf]) -> CoreResult<MediaCatalog> {
        self.config.validate()?;
        self.catalog_files(files)
    }

    fn catalog_files(&mut self, files: &[PathBuf]) -> CoreResult<MediaCatalog> {
        let config = self.config;
        let loaded;
        let languages = match &config.language_table {
            Some(path) => {
                loaded = LanguageTable::from_path(path)?;
                &loaded
            }
            None => LanguageTable::builtin(),
        };

        let job = ProbeJob {
            executor: self.executor,
            progress: self.progress,
            extractor: MetadataExtractor::new(languages),
            total: files.len(),
            abort_on_error: config.probe_error_policy == ProbeErrorPolicy::Abort,
            stop: AtomicBool::new(false),
        };

        if self.config.parallel_probing {
            log::debug!("Probing {} files in parallel", files.len());
            let outcomes: Vec<ProbeOutcome<'_>> = files
                .par_iter()
                .enumerate()
                .map(|(i, path)| job.run(i + 1, path))
                .collect();
            self.aggregate(outcomes.into_iter(), files.len())
        } else {
            let outcomes = files
                .iter()
                .enumerate()
                .map(|(i, path)| job.run(i + 1, path));
            self.aggregate(outcomes, files.len())
        }
    }

    fn aggregate<'p>(
        &mut self,
        outcomes: impl Iterator<Item = ProbeOutcome<'p>>,
        total: usize,
    ) -> CoreResult<MediaCatalog> {
        let mut catalog = MediaCatalog::default();
        catalog.stats.files_discovered = total;
        let mut sequence = 0;

        for outcome in outcomes {
            self.state = CatalogState::Probing(outcome.position);
            let path = outcome.path;
            match outcome.result {
                ProbeResult::Cancelled => {
                    log::trace!("Not probed after abort: {}", path.display());
                }
                ProbeResult::NotCandidate => {
                    log::debug!("Not a {CATALOG_EXTENSION} file, skipping {}", path.display());
                    catalog.stats.files_skipped += 1;
                    self.progress.on_progress(ProgressEvent::FileSkipped {
                        path: path.to_path_buf(),
                        reason: format!("not a {CATALOG_EXTENSION} file"),
                    });
                }
                ProbeResult::Probed(Ok(extraction)) => {
                    sequence += 1;
                    catalog.stats.record_cataloged(&extraction.format);
                    let record = MediaRecord::new(sequence, path, extraction);
                    log::info!(
                        "[{sequence}] {}: {} tracks ({} video, {} audio, {} subtitle, {} fonts)",
                        record.file_name,
                        record.total_tracks,
                        record.total_video_tracks,
                        record.total_audio_tracks,
                        record.total_subtitle_tracks,
                        record.total_fonts
                    );
                    catalog.entries.insert(sequence, record);
                    self.progress.on_progress(ProgressEvent::FileCataloged {
                        sequence,
                        path: path.to_path_buf(),
                    });
                }
                ProbeResult::Probed(Err(err)) => {
                    log::error!("Failed to probe {}: {err}", path.display());
                    self.progress.on_progress(ProgressEvent::ProbeFailed {
                        path: path.to_path_buf(),
                        message: err.to_string(),
                    });
                    if err.is_fatal_for_run()
                        || self.config.probe_error_policy == ProbeErrorPolicy::Abort
                    {
                        return Err(err);
                    }
                    catalog.stats.files_failed += 1;
                    catalog.failures.push(ProbeFailure {
                        path: path.to_path_buf(),
                        message: err.to_string(),
                    });
                }
            }
        }

        self.state = CatalogState::Aggregating;
        self.progress.on_progress(ProgressEvent::CatalogComplete {
            entries: catalog.len(),
            total_bytes: catalog.stats.total_bytes,
        });
        self.state = CatalogState::Done;
        Ok(catalog)
    }
}

/// Probe-and-extract work for one discovered file. Shared across rayon
/// workers when probing in parallel.
///
/// Once a probe fails in a way that ends the run, `stop` is raised and files
/// not yet started are returned as [`ProbeResult::Cancelled`] without a
/// `ProbeStarted` event.
struct ProbeJob<'a> {
    executor: &'a dyn FfprobeExecutor,
    progress: &'a dyn ProgressCallback,
    extractor: MetadataExtractor<'a>,
    total: usize,
    abort_on_error: bool,
    stop: AtomicBool,
}

enum ProbeResult {
    NotCandidate,
    Probed(CoreResult<Extraction>),
    Cancelled,
}

struct ProbeOutcome<'p> {
    position: usize,
    path: &'p Path,
    result: ProbeResult,
}

impl ProbeJob<'_> {
    fn run<'p>(&self, position: usize, path: &'p Path) -> ProbeOutcome<'p> {
        if self.stop.load(Ordering::Acquire) {
            return ProbeOutcome {
                position,
                path,
                result: ProbeResult::Cancelled,
            };
        }

        self.progress.on_progress(ProgressEvent::ProbeStarted {
            position,
            total: self.total,
            path: path.to_path_buf(),
        });

        let result = if is_catalog_candidate(path) {
            let probed = self
                .executor
                .probe(path)
                .map(|doc| self.extractor.extract(path, &doc));
            if probed
                .as_ref()
                .is_err_and(|err| self.abort_on_error || err.is_fatal_for_run())
            {
                self.stop.store(true, Ordering::Release);
            }
            ProbeResult::Probed(probed)
        } else {
            ProbeResult::NotCandidate
        };
        ProbeOutcome {
            position,
            path,
            result,
        }
    }
}
