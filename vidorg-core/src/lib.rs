//! Core library for identifying and cataloging video files with ffprobe.
//!
//! This crate walks a directory tree for media files, runs ffprobe on every
//! Matroska file it finds, and maps the JSON report to typed format and track
//! records collected in a [`MediaCatalog`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidorg_core::{Cataloger, CommandFfprobeExecutor, CoreConfigBuilder, find_media_files};
//!
//! let config = CoreConfigBuilder::new()
//!     .path("/media/anime")
//!     .includes(["S01"])
//!     .extensions([".mkv"])
//!     .build();
//! config.validate().unwrap();
//!
//! let files = find_media_files(&config.path, &config.discovery_options()).unwrap();
//! let executor = CommandFfprobeExecutor::new(config.probe_program.clone());
//! let catalog = Cataloger::new(&config, &executor).build(&files).unwrap();
//!
//! if let Some(first) = catalog.get(1) {
//!     println!("{} has {} tracks", first.file_name, first.total_tracks);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod identify;
pub mod progress;
pub mod utils;

// Re-exports for public API
pub use catalog::{
    CatalogState, Cataloger, MediaCatalog, MediaRecord, ProbeFailure, RunStats,
    is_catalog_candidate,
};
pub use config::{
    CATALOG_EXTENSION, CoreConfig, CoreConfigBuilder, DEFAULT_EXTENSIONS, ProbeErrorPolicy,
    parse_keyword_list,
};
pub use discovery::{DiscoveryOptions, find_media_files};
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor};
pub use identify::{
    AttachmentTrack, AudioTrack, Extraction, ExtractionWarnings, FileTracks, FormatSummary,
    LanguageTable, MetadataExtractor, SubtitleTrack, Track, TrackKind, TrackRef, VideoTrack,
};
pub use progress::{NullProgressCallback, ProgressCallback, ProgressEvent};
pub use utils::{format_bytes, format_duration, frame_rate, parse_duration};
