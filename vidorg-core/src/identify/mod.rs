//! Media identification: turning ffprobe JSON into typed track metadata.
//!
//! The [`MetadataExtractor`] is the entry point. It reads the raw document
//! through the lenient accessors in [`fields`], resolves languages with a
//! [`LanguageTable`], labels video tracks from [`tables`], and produces the
//! records defined in [`models`].

pub mod extractor;
pub mod fields;
pub mod language;
pub mod models;
pub mod tables;

pub use extractor::{Extraction, ExtractionWarnings, MetadataExtractor};
pub use language::LanguageTable;
pub use models::{
    AttachmentTrack, AudioTrack, FileTracks, FormatSummary, SubtitleTrack, Track, TrackKind,
    TrackRef, VideoTrack,
};
