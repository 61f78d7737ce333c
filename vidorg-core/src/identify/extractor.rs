// ============================================================================
// vidorg-core/src/identify/extractor.rs
// ============================================================================
//
// METADATA EXTRACTOR: ffprobe JSON to Typed Records
//
// Builds the FormatSummary from the `format` block and classifies every entry
// of the `streams` array into a typed track. Streams with an unknown type or
// no index are logged and skipped; they never abort extraction of the file.
//
// KEY COMPONENTS:
// - MetadataExtractor: Stateless mapper parameterized by a LanguageTable
// - Extraction: Result for one file (format, tracks, warning tally)
// - ExtractionWarnings: Counts of the non-fatal conditions met

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::fields::{ProbeValueExt, UNKNOWN};
use super::language::LanguageTable;
use super::models::{
    AttachmentTrack, AudioTrack, FileTracks, FormatSummary, SubtitleTrack, Track, TrackKind,
    VideoTrack,
};
use super::tables::{pixel_format_label, resolution_standard};
use crate::utils::{format_duration, frame_rate, parse_duration};

/// Tally of streams that were skipped or degraded during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionWarnings {
    /// Streams of a known kind that carried no usable `index`.
    pub missing_index: u32,
    /// Streams whose `codec_type` was absent or not one of the four kinds.
    pub unknown_type: u32,
    /// Video streams whose `DURATION` tag could not be parsed.
    pub malformed_duration: u32,
}

impl ExtractionWarnings {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.missing_index + self.unknown_type + self.malformed_duration
    }
}

/// Everything extracted from one probe document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub format: FormatSummary,
    pub tracks: FileTracks,
    pub warnings: ExtractionWarnings,
}

/// Maps ffprobe documents to [`FormatSummary`] and [`Track`] values.
#[derive(Debug, Clone, Copy)]
pub struct MetadataExtractor<'a> {
    languages: &'a LanguageTable,
}

impl Default for MetadataExtractor<'static> {
    fn default() -> Self {
        Self::new(LanguageTable::builtin())
    }
}

impl<'a> MetadataExtractor<'a> {
    #[must_use]
    pub fn new(languages: &'a LanguageTable) -> Self {
        Self { languages }
    }

    /// Extracts the format summary and all classifiable tracks of a file.
    ///
    /// `path` is only used for log messages.
    pub fn extract(&self, path: &Path, doc: &Value) -> Extraction {
        let format = self.format_summary(doc);
        let mut tracks = FileTracks::new();
        let mut warnings = ExtractionWarnings::default();

        let streams = doc
            .field("streams")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for stream in streams {
            let codec_type = stream.text("codec_type");
            let Some(kind) = codec_type.and_then(TrackKind::from_codec_type) else {
                match codec_type {
                    Some(other) => log::warn!(
                        "A track can't be identified: {other} ({})",
                        path.display()
                    ),
                    None => log::warn!(
                        "A track didn't have codec_type: {}",
                        describe_stream(stream, path)
                    ),
                }
                warnings.unknown_type += 1;
                continue;
            };

            let Some(index) = stream_index(stream) else {
                log::warn!(
                    "A {kind} track didn't have an index: {}",
                    describe_stream(stream, path)
                );
                warnings.missing_index += 1;
                continue;
            };

            let track = match kind {
                TrackKind::Video => {
                    Track::Video(self.video_track(index, stream, path, &mut warnings))
                }
                TrackKind::Audio => Track::Audio(self.audio_track(index, stream)),
                TrackKind::Subtitle => Track::Subtitle(self.subtitle_track(index, stream)),
                TrackKind::Attachment => Track::Attachment(attachment_track(index, stream)),
            };

            // Fonts are counted before the duplicate check.
            if kind == TrackKind::Attachment
                && stream
                    .text("codec_name")
                    .is_some_and(AttachmentTrack::is_font_codec)
            {
                tracks.font_count += 1;
            }

            if !tracks.insert(track) {
                log::trace!("Duplicate {kind} index {index} in {}", path.display());
            }
        }

        log::debug!(
            "Extracted {} tracks ({} video, {} audio, {} subtitle, {} attachment, {} fonts) from {}",
            tracks.total(),
            tracks.total_of(TrackKind::Video),
            tracks.total_of(TrackKind::Audio),
            tracks.total_of(TrackKind::Subtitle),
            tracks.total_of(TrackKind::Attachment),
            tracks.font_count,
            path.display()
        );

        Extraction {
            format,
            tracks,
            warnings,
        }
    }

    /// Builds the container summary. Missing numbers are 0, missing strings
    /// are `"Unknown"`, and a missing long name falls back to the short one.
    #[must_use]
    pub fn format_summary(&self, doc: &Value) -> FormatSummary {
        let format = doc.field("format").unwrap_or(&Value::Null);
        let duration_secs = format.float("duration").unwrap_or(0.0);
        let format_name = format.text_or_unknown("format_name");
        let format_long_name = format
            .text("format_long_name")
            .map_or_else(|| format_name.clone(), str::to_string);

        FormatSummary {
            score: to_u32(format.uint("probe_score")),
            size: format.uint("size").unwrap_or(0),
            duration_secs,
            duration: format_duration(duration_secs),
            format_name,
            format_long_name,
            bit_rate: format.uint("bit_rate").unwrap_or(0),
            encoder: format.tag("ENCODER").unwrap_or(UNKNOWN).to_string(),
            encoding_info: format.tag("ENCODING_INFO").unwrap_or(UNKNOWN).to_string(),
        }
    }

    fn video_track(
        &self,
        index: u32,
        stream: &Value,
        path: &Path,
        warnings: &mut ExtractionWarnings,
    ) -> VideoTrack {
        let disposition = stream.field("disposition").unwrap_or(&Value::Null);

        let display_width = to_u32(stream.uint("width"));
        let display_height = to_u32(stream.uint("height"));
        let pixel_width = to_u32(stream.uint("coded_width"));
        let pixel_height = to_u32(stream.uint("coded_height"));
        let display_dimensions = format!("{display_width}x{display_height}");
        let pixel_dimensions = format!("{pixel_width}x{pixel_height}");

        let duration = stream.tag("DURATION");
        let duration_secs = match duration {
            Some(text) => parse_duration(text).unwrap_or_else(|| {
                log::warn!(
                    "Unparsable DURATION tag '{text}' on video track {index} of {}",
                    path.display()
                );
                warnings.malformed_duration += 1;
                0.0
            }),
            None => 0.0,
        };
        let frame_count = stream.tag_uint("NUMBER_OF_FRAMES").unwrap_or(0);

        VideoTrack {
            index,
            default: disposition.flag("default"),
            forced: disposition.flag("forced"),
            codec: codec_display_name(stream),
            language: self.language_of(stream),
            duration: duration.unwrap_or_default().to_string(),
            duration_secs,
            fps: frame_rate(frame_count, duration_secs),
            bps: stream.tag_uint("BPS").unwrap_or(0),
            display_resolution: resolution_standard(&display_dimensions)
                .unwrap_or(UNKNOWN)
                .to_string(),
            display_dimensions,
            display_width,
            display_height,
            display_aspect_ratio: stream.text_or_unknown("display_aspect_ratio"),
            pixel_width,
            pixel_height,
            pixel_dimensions,
            pixel_format: pixel_format_label(stream.text("pix_fmt").unwrap_or(UNKNOWN)),
            color_range: stream.text_or_unknown("color_range"),
            color_space: stream.text_or_unknown("color_space"),
            color_transfer: stream.text_or_unknown("color_transfer"),
            color_primaries: stream.text_or_unknown("color_primaries"),
        }
    }

    fn audio_track(&self, index: u32, stream: &Value) -> AudioTrack {
        AudioTrack {
            index,
            codec: codec_display_name(stream),
            channels: to_u32(stream.uint("channels")),
            sample_rate: to_u32(stream.uint("sample_rate")),
            language: self.language_of(stream),
            bit_depth: to_u32(stream.uint("bits_per_sample")),
            duration_secs: stream.float("duration").unwrap_or(0.0),
        }
    }

    fn subtitle_track(&self, index: u32, stream: &Value) -> SubtitleTrack {
        let disposition = stream.field("disposition").unwrap_or(&Value::Null);
        SubtitleTrack {
            index,
            codec: stream.text_or_unknown("codec_name"),
            language: self.language_of(stream),
            forced: disposition.flag("forced"),
            default: disposition.flag("default"),
            hearing_impaired: disposition.flag("hearing_impaired"),
            visual_impaired: disposition.flag("visual_impaired"),
            font_name: stream.tag("filename").unwrap_or(UNKNOWN).to_string(),
            mimetype: stream.tag("mimetype").unwrap_or(UNKNOWN).to_string(),
            duration_secs: stream.float("duration").unwrap_or(0.0),
        }
    }

    /// Resolves `tags.language` (or a top-level `language`) to a name.
    fn language_of(&self, stream: &Value) -> String {
        let code = stream.tag("language").or_else(|| stream.text("language"));
        self.languages.name_or_unknown(code)
    }
}

fn attachment_track(index: u32, stream: &Value) -> AttachmentTrack {
    AttachmentTrack {
        index,
        codec: stream.text_or_unknown("codec_name"),
        filename: stream.tag("filename").unwrap_or(UNKNOWN).to_string(),
        mimetype: stream.tag("mimetype").unwrap_or(UNKNOWN).to_string(),
        disposition: stream
            .field("disposition")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
    }
}

/// `codec_long_name`, else `codec_name`, else `"Unknown"`.
fn codec_display_name(stream: &Value) -> String {
    stream
        .text("codec_long_name")
        .or_else(|| stream.text("codec_name"))
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn stream_index(stream: &Value) -> Option<u32> {
    stream.uint("index").and_then(|n| u32::try_from(n).ok())
}

fn to_u32(value: Option<u64>) -> u32 {
    value.and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}

fn describe_stream(stream: &Value, path: &Path) -> String {
    match stream.text("codec_name") {
        Some(codec) => codec.to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(doc: &Value) -> Extraction {
        MetadataExtractor::default().extract(Path::new("test.mkv"), doc)
    }

    #[test]
    fn test_format_defaults() {
        let summary = MetadataExtractor::default().format_summary(&json!({}));
        assert_eq!(summary.score, 0);
        assert_eq!(summary.size, 0);
        assert_eq!(summary.duration, "00:00:00.000");
        assert_eq!(summary.format_name, "Unknown");
        assert_eq!(summary.format_long_name, "Unknown");
        assert_eq!(summary.encoder, "Unknown");
        assert_eq!(summary.encoding_info, "Unknown");
    }

    #[test]
    fn test_format_fields() {
        let doc = json!({"format": {
            "probe_score": 100,
            "size": "734003200",
            "duration": "3723.456000",
            "format_name": "matroska,webm",
            "bit_rate": "1577000",
            "tags": {"ENCODER": "libebml v1.4.4 + libmatroska v1.7.1"}
        }});
        let summary = MetadataExtractor::default().format_summary(&doc);
        assert_eq!(summary.score, 100);
        assert_eq!(summary.size, 734_003_200);
        assert_eq!(summary.duration, "01:02:03.456");
        assert_eq!(summary.format_long_name, "matroska,webm");
        assert_eq!(summary.bit_rate, 1_577_000);
        assert_eq!(summary.encoder, "libebml v1.4.4 + libmatroska v1.7.1");
        assert_eq!(summary.encoding_info, "Unknown");
    }

    #[test]
    fn test_video_derived_fields() {
        let doc = json!({"streams": [{
            "index": 0,
            "codec_type": "video",
            "codec_name": "hevc",
            "width": 3840,
            "height": 2160,
            "coded_width": 3840,
            "coded_height": 2176,
            "pix_fmt": "yuv420p10le",
            "color_primaries": "bt2020",
            "disposition": {"default": 1, "forced": 0},
            "tags": {
                "language": "jpn",
                "DURATION": "00:23:40.045000000",
                "NUMBER_OF_FRAMES": "34046",
                "BPS": "8000000"
            }
        }]});
        let result = extract(&doc);
        let video = &result.tracks.video[&0];
        assert_eq!(video.codec, "hevc");
        assert_eq!(video.language, "Japanese");
        assert_eq!(video.display_resolution, "2160p");
        assert_eq!(video.pixel_dimensions, "3840x2176");
        assert_eq!(video.pixel_format, "YUV420P10LE");
        assert_eq!(video.fps, 23.9753);
        assert_eq!(video.bps, 8_000_000);
        assert_eq!(video.color_primaries, "bt2020");
        assert_eq!(video.color_range, "Unknown");
        assert!(video.default);
        assert!(!video.forced);
    }

    #[test]
    fn test_malformed_duration_is_counted() {
        let doc = json!({"streams": [{
            "index": 0,
            "codec_type": "video",
            "tags": {"DURATION": "garbage", "NUMBER_OF_FRAMES": "100"}
        }]});
        let result = extract(&doc);
        let video = &result.tracks.video[&0];
        assert_eq!(video.duration, "garbage");
        assert_eq!(video.duration_secs, 0.0);
        assert_eq!(video.fps, 0.0);
        assert_eq!(video.pixel_format, "UNKNOWN");
        assert_eq!(result.warnings.malformed_duration, 1);
    }

    #[test]
    fn test_unknown_types_are_skipped() {
        let doc = json!({"streams": [
            {"index": 0, "codec_name": "h264"},
            {"index": 1, "codec_type": "data"},
            {"index": 2, "codec_type": "audio", "codec_name": "aac"}
        ]});
        let result = extract(&doc);
        assert_eq!(result.tracks.total(), 1);
        assert_eq!(result.warnings.unknown_type, 2);
        assert_eq!(result.tracks.audio[&2].codec, "aac");
    }

    #[test]
    fn test_streams_not_an_array() {
        let result = extract(&json!({"streams": {"index": 0}}));
        assert_eq!(result.tracks.total(), 0);
        assert_eq!(result.warnings.total(), 0);
    }
}
