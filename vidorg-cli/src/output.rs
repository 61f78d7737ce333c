// ============================================================================
// vidorg-cli/src/output.rs
// ============================================================================
//
// TERMINAL OUTPUT: Notices, Catalog Rendering and Progress Bar
//
// KEY COMPONENTS:
// - print_heading / print_section / print_info: styled building blocks
// - found_files_message / search_options_lines: discovery notices
// - print_catalog: human-readable rendering of a MediaCatalog
// - ProgressReporter: indicatif bar driven by catalog ProgressEvents

use std::fmt::Display;
use std::path::PathBuf;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use vidorg_core::{
    MediaCatalog, MediaRecord, ProgressCallback, ProgressEvent, TrackRef, format_bytes,
};

/// Print a heading with a separator line below it
pub fn print_heading(text: &str) {
    println!("\n{}", style(text).bold().bright());
    println!("{}", style("=".repeat(50)).blue());
}

/// Print a smaller section heading
pub fn print_section(text: &str) {
    println!("{}", style(text).bold());
}

/// Print a label/value pair, label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("  {}: {}", style(label).cyan(), value);
}

/// Notice printed after discovery.
#[must_use]
pub fn found_files_message(count: usize) -> String {
    match count {
        0 => "No file found.".to_string(),
        1 => "Found 1 file.".to_string(),
        n => format!("Found {n} files."),
    }
}

/// Lines describing the active search filters, empty when none are set.
#[must_use]
pub fn search_options_lines(
    includes: &[String],
    excludes: &[String],
    extensions: &[String],
) -> Vec<String> {
    let entries = [
        ("including", includes),
        ("excluding", excludes),
        ("extensions", extensions),
    ];
    let mut lines: Vec<String> = entries
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(label, values)| format!("  - {label}: {}", values.join(", ")))
        .collect();
    if !lines.is_empty() {
        lines.insert(0, "- with options:".to_string());
    }
    lines
}

pub fn print_file_list(files: &[PathBuf]) {
    for file in files {
        println!("  {}", style(file.display()).dim());
    }
}

/// One-line description of a track.
#[must_use]
pub fn track_line(track: TrackRef<'_>) -> String {
    let details = match track {
        TrackRef::Video(v) => format!(
            "{} {} ({}) {} fps, {}",
            v.codec, v.display_dimensions, v.display_resolution, v.fps, v.language
        ),
        TrackRef::Audio(a) => format!(
            "{} {} ch, {} Hz, {}",
            a.codec, a.channels, a.sample_rate, a.language
        ),
        TrackRef::Subtitle(s) => {
            let mut flags = Vec::new();
            if s.default {
                flags.push("default");
            }
            if s.forced {
                flags.push("forced");
            }
            if s.hearing_impaired {
                flags.push("SDH");
            }
            if flags.is_empty() {
                format!("{}, {}", s.codec, s.language)
            } else {
                format!("{}, {} [{}]", s.codec, s.language, flags.join(", "))
            }
        }
        TrackRef::Attachment(a) => format!("{} {}", a.codec, a.filename),
    };
    format!("#{:<3} {:<10} {}", track.index(), track.kind(), details)
}

fn print_record(record: &MediaRecord) {
    print_section(&format!("[{}] {}", record.sequence, record.file_name));
    print_info("Path", record.file_path.display());
    print_info("Format", &record.format.format_long_name);
    print_info("Size", format_bytes(record.size()));
    print_info("Duration", record.duration());
    print_info("Bitrate", format!("{} kb/s", record.format.bit_rate / 1000));
    print_info(
        "Tracks",
        format!(
            "{} ({} video, {} audio, {} subtitle, {} attachment, {} font)",
            record.total_tracks,
            record.total_video_tracks,
            record.total_audio_tracks,
            record.total_subtitle_tracks,
            record.total_attachment_tracks,
            record.total_fonts
        ),
    );
    for index in record.tracks.by_index.keys() {
        if let Some(track) = record.tracks.get(*index) {
            println!("    {}", track_line(track));
        }
    }
    if record.warnings.total() > 0 {
        println!(
            "    {} {} malformed stream(s) ignored",
            style("!").yellow().bold(),
            record.warnings.total()
        );
    }
}

pub fn print_catalog(catalog: &MediaCatalog) {
    if catalog.is_empty() {
        return;
    }
    print_heading("Catalog");
    for record in catalog.records() {
        print_record(record);
    }
}

pub fn print_summary(catalog: &MediaCatalog) {
    let stats = catalog.stats();
    print_heading("Summary");
    print_info("Files discovered", stats.files_discovered);
    print_info("Files cataloged", stats.files_cataloged);
    print_info("Files skipped", stats.files_skipped);
    if stats.files_failed > 0 {
        print_info("Files failed", style(stats.files_failed).red());
        for failure in catalog.failures() {
            println!("    {}: {}", failure.path.display(), failure.message);
        }
    }
    print_info("Total size", format_bytes(stats.total_bytes));
}

/// Drives a progress bar from catalog events.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// `visible == false` yields a hidden bar that swallows all updates.
    /// The length is set by [`ProgressReporter::start`].
    #[must_use]
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(bar_style) =
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(bar_style.progress_chars("=> "));
        }
        Self { bar }
    }

    pub fn start(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for ProgressReporter {
    fn on_progress(&self, event: ProgressEvent) {
        match &event {
            ProgressEvent::ProbeStarted { position, path, .. } => {
                self.bar.set_position(*position as u64);
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.bar.set_message(name);
            }
            ProgressEvent::ProbeFailed { .. } => {
                self.bar.println(format!("{} {event}", style("!").red().bold()));
            }
            ProgressEvent::FileSkipped { .. } => log::debug!("{event}"),
            ProgressEvent::CatalogComplete { .. } => self.bar.finish_and_clear(),
            ProgressEvent::DiscoveryComplete { .. } | ProgressEvent::FileCataloged { .. } => {
                log::debug!("{event}")
            }
        }
    }
}
