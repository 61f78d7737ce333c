// vidorg-core/tests/common/mod.rs
//
// Shared fixtures for the integration tests: a scripted FfprobeExecutor and
// builders for ffprobe-shaped JSON documents.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Value, json};
use vidorg_core::{CoreError, CoreResult, FfprobeExecutor};

/// How the mock answers a probe for a given file name.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Document(Value),
    ToolMissing,
    EmptyOutput,
    #[cfg(unix)]
    ExitFailure(i32),
}

/// Scripted executor keyed by file name. Unscripted files get an empty
/// Matroska document.
#[derive(Default)]
pub struct MockFfprobeExecutor {
    responses: Mutex<HashMap<String, MockResponse>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, file_name: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(file_name.to_string(), response);
    }

    pub fn respond_with(&self, file_name: &str, doc: Value) {
        self.respond(file_name, MockResponse::Document(doc));
    }

    /// Paths probed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<Value> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let response = self.responses.lock().unwrap().get(&name).cloned();
        match response {
            None => Ok(document(1024, vec![])),
            Some(MockResponse::Document(doc)) => Ok(doc),
            Some(MockResponse::ToolMissing) => Err(CoreError::ToolNotFound("ffprobe".into())),
            Some(MockResponse::EmptyOutput) => Err(CoreError::ProbeOutput {
                path: path.to_path_buf(),
                reason: "empty output".into(),
            }),
            #[cfg(unix)]
            Some(MockResponse::ExitFailure(code)) => {
                use std::os::unix::process::ExitStatusExt;
                Err(CoreError::ProbeExecution {
                    path: path.to_path_buf(),
                    status: std::process::ExitStatus::from_raw(code << 8),
                    stderr: "Invalid data found when processing input".into(),
                })
            }
        }
    }
}

// ---- Document builders ----

pub fn document(size: u64, streams: Vec<Value>) -> Value {
    json!({
        "streams": streams,
        "format": {
            "filename": "movie.mkv",
            "nb_streams": streams.len(),
            "format_name": "matroska,webm",
            "format_long_name": "Matroska / WebM",
            "duration": "1420.045000",
            "size": size.to_string(),
            "bit_rate": "4000000",
            "probe_score": 100,
            "tags": {
                "ENCODER": "libebml v1.4.4 + libmatroska v1.7.1"
            }
        }
    })
}

pub fn video_stream(index: u64, width: u32, height: u32, language: &str) -> Value {
    json!({
        "index": index,
        "codec_name": "h264",
        "codec_long_name": "H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10",
        "codec_type": "video",
        "width": width,
        "height": height,
        "coded_width": width,
        "coded_height": height,
        "display_aspect_ratio": "16:9",
        "pix_fmt": "yuv420p",
        "color_range": "tv",
        "color_space": "bt709",
        "color_transfer": "bt709",
        "color_primaries": "bt709",
        "disposition": {"default": 1, "forced": 0},
        "tags": {
            "language": language,
            "BPS": "3500000",
            "DURATION": "00:23:40.045000000",
            "NUMBER_OF_FRAMES": "34046"
        }
    })
}

pub fn audio_stream(index: u64, channels: u32) -> Value {
    json!({
        "index": index,
        "codec_name": "aac",
        "codec_long_name": "AAC (Advanced Audio Coding)",
        "codec_type": "audio",
        "sample_rate": "48000",
        "channels": channels,
        "bits_per_sample": 0,
        "duration": "1420.045000",
        "disposition": {"default": 1, "forced": 0},
        "tags": {"language": "jpn"}
    })
}

pub fn subtitle_stream(index: u64, language: &str) -> Value {
    json!({
        "index": index,
        "codec_name": "ass",
        "codec_long_name": "ASS (Advanced SSA) subtitle",
        "codec_type": "subtitle",
        "disposition": {"default": 0, "forced": 1, "hearing_impaired": 1, "visual_impaired": 0},
        "tags": {"language": language}
    })
}

pub fn attachment_stream(index: u64, codec: &str, filename: &str) -> Value {
    json!({
        "index": index,
        "codec_name": codec,
        "codec_type": "attachment",
        "disposition": {"default": 0, "attached_pic": 0},
        "tags": {"filename": filename, "mimetype": "font/ttf"}
    })
}

/// One H.264 1080p English video stream plus one stereo AAC stream.
pub fn movie_document() -> Value {
    document(
        734_003_200,
        vec![video_stream(0, 1920, 1080, "eng"), audio_stream(1, 2)],
    )
}
