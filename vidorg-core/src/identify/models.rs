// ============================================================================
// vidorg-core/src/identify/models.rs
// ============================================================================
//
// TRACK MODELS: Typed Records Built From ffprobe Output
//
// One FormatSummary per file, one record per classified stream, and the
// per-file FileTracks container that buckets tracks by kind and by the
// prober's own stream index.
//
// KEY COMPONENTS:
// - FormatSummary: Container-level metadata
// - VideoTrack / AudioTrack / SubtitleTrack / AttachmentTrack: Per-stream records
// - Track / TrackRef: Tagged union over the four kinds (owned / borrowed)
// - FileTracks: Per-kind buckets, index lookup, and counters

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// FORMAT
// ============================================================================

/// Container-level metadata from the `format` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatSummary {
    /// ffprobe's confidence in the detected format, 0 to 100. Heuristic only.
    pub score: u32,
    /// File size in bytes.
    pub size: u64,
    pub duration_secs: f64,
    /// `duration_secs` as `HH:MM:SS.mmm`.
    pub duration: String,
    pub format_name: String,
    pub format_long_name: String,
    /// Overall bitrate in bits per second.
    pub bit_rate: u64,
    pub encoder: String,
    pub encoding_info: String,
}

// ============================================================================
// TRACKS
// ============================================================================

/// The four stream kinds the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
    Attachment,
}

impl TrackKind {
    /// Maps an ffprobe `codec_type` value to a kind.
    #[must_use]
    pub fn from_codec_type(codec_type: &str) -> Option<Self> {
        match codec_type {
            "video" => Some(TrackKind::Video),
            "audio" => Some(TrackKind::Audio),
            "subtitle" => Some(TrackKind::Subtitle),
            "attachment" => Some(TrackKind::Attachment),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrackKind::Video => "video",
            TrackKind::Audio => "audio",
            TrackKind::Subtitle => "subtitle",
            TrackKind::Attachment => "attachment",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoTrack {
    pub index: u32,
    pub default: bool,
    pub forced: bool,
    pub codec: String,
    pub language: String,
    /// Raw `tags.DURATION` text, empty when the tag is absent.
    pub duration: String,
    pub duration_secs: f64,
    /// `NUMBER_OF_FRAMES / duration_secs`, rounded to five decimals, or 0.
    pub fps: f64,
    /// `tags.BPS`, bits per second.
    pub bps: u64,
    pub display_dimensions: String,
    pub display_width: u32,
    pub display_height: u32,
    pub display_aspect_ratio: String,
    /// Resolution standard for `display_dimensions`, e.g. `1080p`.
    pub display_resolution: String,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_dimensions: String,
    pub pixel_format: String,
    pub color_range: String,
    pub color_space: String,
    pub color_transfer: String,
    pub color_primaries: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioTrack {
    pub index: u32,
    pub codec: String,
    pub channels: u32,
    pub sample_rate: u32,
    pub language: String,
    pub bit_depth: u32,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtitleTrack {
    pub index: u32,
    pub codec: String,
    pub language: String,
    pub forced: bool,
    pub default: bool,
    pub hearing_impaired: bool,
    pub visual_impaired: bool,
    pub font_name: String,
    pub mimetype: String,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentTrack {
    pub index: u32,
    pub codec: String,
    pub filename: String,
    pub mimetype: String,
    /// The stream's `disposition` object, unmodified.
    pub disposition: Map<String, Value>,
}

impl AttachmentTrack {
    /// Codec names counted as embedded fonts.
    pub const FONT_CODECS: [&'static str; 4] = ["ttf", "ttc", "woff", "woff2"];

    #[must_use]
    pub fn is_font_codec(codec: &str) -> bool {
        Self::FONT_CODECS.contains(&codec)
    }
}

/// An owned track of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Track {
    Video(VideoTrack),
    Audio(AudioTrack),
    Subtitle(SubtitleTrack),
    Attachment(AttachmentTrack),
}

impl Track {
    #[must_use]
    pub fn index(&self) -> u32 {
        match self {
            Track::Video(t) => t.index,
            Track::Audio(t) => t.index,
            Track::Subtitle(t) => t.index,
            Track::Attachment(t) => t.index,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        match self {
            Track::Video(_) => TrackKind::Video,
            Track::Audio(_) => TrackKind::Audio,
            Track::Subtitle(_) => TrackKind::Subtitle,
            Track::Attachment(_) => TrackKind::Attachment,
        }
    }
}

/// A borrowed view of a stored track, returned by [`FileTracks::get`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackRef<'a> {
    Video(&'a VideoTrack),
    Audio(&'a AudioTrack),
    Subtitle(&'a SubtitleTrack),
    Attachment(&'a AttachmentTrack),
}

impl TrackRef<'_> {
    #[must_use]
    pub fn index(&self) -> u32 {
        match self {
            TrackRef::Video(t) => t.index,
            TrackRef::Audio(t) => t.index,
            TrackRef::Subtitle(t) => t.index,
            TrackRef::Attachment(t) => t.index,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        match self {
            TrackRef::Video(_) => TrackKind::Video,
            TrackRef::Audio(_) => TrackKind::Audio,
            TrackRef::Subtitle(_) => TrackKind::Subtitle,
            TrackRef::Attachment(_) => TrackKind::Attachment,
        }
    }

    /// Codec display name of the referenced track.
    #[must_use]
    pub fn codec(&self) -> &str {
        match self {
            TrackRef::Video(t) => &t.codec,
            TrackRef::Audio(t) => &t.codec,
            TrackRef::Subtitle(t) => &t.codec,
            TrackRef::Attachment(t) => &t.codec,
        }
    }
}

// ============================================================================
// PER-FILE TRACK SET
// ============================================================================

/// All classified tracks of one file.
///
/// Each kind has its own bucket keyed by stream index; inside a bucket the
/// first track inserted for an index is kept and later ones are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileTracks {
    pub video: BTreeMap<u32, VideoTrack>,
    pub audio: BTreeMap<u32, AudioTrack>,
    pub subtitle: BTreeMap<u32, SubtitleTrack>,
    pub attachment: BTreeMap<u32, AttachmentTrack>,
    /// Stream index to the kind it was last classified as.
    pub by_index: BTreeMap<u32, TrackKind>,
    /// Stream indices per kind, in insertion order.
    pub by_type: BTreeMap<TrackKind, Vec<u32>>,
    /// Attachments whose codec is one of [`AttachmentTrack::FONT_CODECS`].
    pub font_count: u32,
}

impl FileTracks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `track` in its bucket. Returns `false` if the bucket already
    /// holds a track with the same index; the bucket then keeps the earlier
    /// track.
    ///
    /// The index map always takes the kind of the latest track, so when two
    /// kinds share an index, [`FileTracks::get`] returns the later one.
    pub fn insert(&mut self, track: Track) -> bool {
        let index = track.index();
        let kind = track.kind();
        let inserted = match track {
            Track::Video(t) => insert_first(&mut self.video, index, t),
            Track::Audio(t) => insert_first(&mut self.audio, index, t),
            Track::Subtitle(t) => insert_first(&mut self.subtitle, index, t),
            Track::Attachment(t) => insert_first(&mut self.attachment, index, t),
        };
        self.by_index.insert(index, kind);
        if inserted {
            self.by_type.entry(kind).or_default().push(index);
        }
        inserted
    }

    /// Looks up a track by stream index regardless of kind.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<TrackRef<'_>> {
        match self.by_index.get(&index)? {
            TrackKind::Video => self.video.get(&index).map(TrackRef::Video),
            TrackKind::Audio => self.audio.get(&index).map(TrackRef::Audio),
            TrackKind::Subtitle => self.subtitle.get(&index).map(TrackRef::Subtitle),
            TrackKind::Attachment => self.attachment.get(&index).map(TrackRef::Attachment),
        }
    }

    /// Stream indices recorded for `kind`.
    #[must_use]
    pub fn indices_of(&self, kind: TrackKind) -> &[u32] {
        self.by_type.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct stream indices across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_index.len()
    }

    #[must_use]
    pub fn total_of(&self, kind: TrackKind) -> usize {
        match kind {
            TrackKind::Video => self.video.len(),
            TrackKind::Audio => self.audio.len(),
            TrackKind::Subtitle => self.subtitle.len(),
            TrackKind::Attachment => self.attachment.len(),
        }
    }
}

fn insert_first<T>(bucket: &mut BTreeMap<u32, T>, index: u32, track: T) -> bool {
    if bucket.contains_key(&index) {
        return false;
    }
    bucket.insert(index, track);
    true
}
