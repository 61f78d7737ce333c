// vidorg-core/tests/catalog_tests.rs

mod common;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use common::{MockFfprobeExecutor, MockResponse, document, movie_document};
use tempfile::tempdir;
use vidorg_core::{
    CatalogState, Cataloger, CommandFfprobeExecutor, CoreConfig, CoreConfigBuilder, CoreError,
    ProbeErrorPolicy, ProgressCallback, ProgressEvent, TrackRef,
};

#[derive(Default)]
struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl ProgressCallback for RecordingProgress {
    fn on_progress(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl RecordingProgress {
    fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| PathBuf::from("/media").join(n)).collect()
}

#[test]
fn test_single_movie_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("movie.mkv"))?;
    let config = CoreConfig::new(dir.path());
    let executor = MockFfprobeExecutor::new();
    executor.respond_with("movie.mkv", movie_document());

    let mut cataloger = Cataloger::new(&config, &executor);
    assert_eq!(cataloger.state(), CatalogState::Idle);
    let catalog = cataloger.run()?;
    assert_eq!(cataloger.state(), CatalogState::Done);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.total_discovered(), 1);
    let record = catalog.get(1).expect("entry 1");
    assert_eq!(record.file_name, "movie.mkv");
    assert_eq!(record.file_path, dir.path().join("movie.mkv"));
    assert_eq!(record.total_tracks, 2);
    assert_eq!(record.total_video_tracks, 1);
    assert_eq!(record.total_audio_tracks, 1);
    assert_eq!(record.total_subtitle_tracks, 0);
    assert_eq!(record.total_fonts, 0);

    match record.track(0) {
        Some(TrackRef::Video(video)) => {
            assert_eq!(video.display_resolution, "1080p");
            assert_eq!(video.language, "English");
        }
        other => panic!("expected a video track, got {other:?}"),
    }
    match record.track(1) {
        Some(TrackRef::Audio(audio)) => assert_eq!(audio.channels, 2),
        other => panic!("expected an audio track, got {other:?}"),
    }
    assert_eq!(catalog.total_bytes(), 734_003_200);
    Ok(())
}

#[test]
fn test_missing_root_fails_before_probing() {
    let config = CoreConfig::new("surely_this_does_not_exist_42_catalog");
    let executor = MockFfprobeExecutor::new();

    let result = Cataloger::new(&config, &executor).run();
    assert!(matches!(result, Err(CoreError::PathNotFound(_))));
    assert!(executor.calls().is_empty());
}

#[test]
fn test_missing_probe_tool_aborts_on_first_probe() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("a.mkv"))?;
    File::create(dir.path().join("b.mkv"))?;
    let config = CoreConfigBuilder::new()
        .path(dir.path())
        .probe_program("vidorg-definitely-missing-ffprobe")
        .build();
    let executor = CommandFfprobeExecutor::new(config.probe_program.clone());
    let progress = RecordingProgress::default();

    let result = Cataloger::new(&config, &executor)
        .with_progress(&progress)
        .run();

    match result {
        Err(CoreError::ToolNotFound(name)) => {
            assert_eq!(name, "vidorg-definitely-missing-ffprobe")
        }
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
    let events = progress.events();
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, ProgressEvent::FileCataloged { .. }))
    );
    let started = events
        .iter()
        .filter(|e| matches!(e, ProgressEvent::ProbeStarted { .. }))
        .count();
    assert_eq!(started, 1);
    Ok(())
}

#[test]
fn test_missing_tool_ignores_skip_policy() {
    let config = CoreConfigBuilder::new()
        .probe_error_policy(ProbeErrorPolicy::Skip)
        .build();
    let executor = MockFfprobeExecutor::new();
    executor.respond("a.mkv", MockResponse::ToolMissing);

    let result = Cataloger::new(&config, &executor).build(&paths(&["a.mkv", "b.mkv"]));
    assert!(matches!(result, Err(CoreError::ToolNotFound(_))));
    assert_eq!(executor.calls().len(), 1);
}

#[test]
fn test_non_matroska_files_are_discovered_but_not_probed()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("readme.txt"))?;
    File::create(dir.path().join("movie.mkv"))?;
    let config = CoreConfigBuilder::new()
        .path(dir.path())
        .extensions(Vec::<String>::new())
        .build();
    let executor = MockFfprobeExecutor::new();

    let catalog = Cataloger::new(&config, &executor).run()?;

    assert_eq!(executor.calls(), vec![dir.path().join("movie.mkv")]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(1).unwrap().file_name, "movie.mkv");
    assert_eq!(catalog.stats().files_discovered, 2);
    assert_eq!(catalog.stats().files_skipped, 1);
    Ok(())
}

#[test]
fn test_sequence_counts_only_probed_files_and_progress_counts_all() {
    let config = CoreConfig::default();
    let executor = MockFfprobeExecutor::new();
    let progress = RecordingProgress::default();
    let files = paths(&["x.mp4", "a.mkv", "b.txt", "c.mkv"]);

    let catalog = Cataloger::new(&config, &executor)
        .with_progress(&progress)
        .build(&files)
        .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).unwrap().file_path, files[1]);
    assert_eq!(catalog.get(2).unwrap().file_path, files[3]);
    assert!(catalog.get(3).is_none());
    assert_eq!(catalog.get(2).unwrap().sequence, 2);

    let started: Vec<(usize, usize)> = progress
        .events()
        .into_iter()
        .filter_map(|e| match e {
            ProgressEvent::ProbeStarted {
                position, total, ..
            } => Some((position, total)),
            _ => None,
        })
        .collect();
    assert_eq!(started, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);

    let events = progress.events();
    assert_eq!(
        events.last(),
        Some(&ProgressEvent::CatalogComplete {
            entries: 2,
            total_bytes: 2048
        })
    );
}

#[test]
fn test_total_bytes_accumulate_across_files() {
    let config = CoreConfig::default();
    let executor = MockFfprobeExecutor::new();
    executor.respond_with("a.mkv", document(1_000, vec![]));
    executor.respond_with("b.mkv", document(2_500, vec![]));
    executor.respond_with("c.mkv", document(40, vec![]));

    let catalog = Cataloger::new(&config, &executor)
        .build(&paths(&["a.mkv", "b.mkv", "c.mkv"]))
        .unwrap();
    assert_eq!(catalog.total_bytes(), 3_540);
    assert_eq!(catalog.stats().files_cataloged, 3);
}

#[test]
fn test_probe_failure_aborts_by_default() {
    let config = CoreConfig::default();
    let executor = MockFfprobeExecutor::new();
    executor.respond("b.mkv", MockResponse::EmptyOutput);

    let result = Cataloger::new(&config, &executor).build(&paths(&["a.mkv", "b.mkv", "c.mkv"]));
    assert!(matches!(result, Err(CoreError::ProbeOutput { .. })));
    // Nothing after the failing file is probed.
    assert_eq!(executor.calls(), paths(&["a.mkv", "b.mkv"]));
}

#[cfg(unix)]
#[test]
fn test_probe_exit_failure_is_reported() {
    let config = CoreConfig::default();
    let executor = MockFfprobeExecutor::new();
    executor.respond("a.mkv", MockResponse::ExitFailure(1));

    match Cataloger::new(&config, &executor).build(&paths(&["a.mkv"])) {
        Err(CoreError::ProbeExecution { path, status, stderr }) => {
            assert_eq!(path, PathBuf::from("/media/a.mkv"));
            assert!(!status.success());
            assert!(stderr.contains("Invalid data"));
        }
        other => panic!("expected ProbeExecution, got {other:?}"),
    }
}

#[test]
fn test_skip_policy_continues_past_failures() {
    let config = CoreConfigBuilder::new()
        .probe_error_policy(ProbeErrorPolicy::Skip)
        .build();
    let executor = MockFfprobeExecutor::new();
    executor.respond("b.mkv", MockResponse::EmptyOutput);
    let progress = RecordingProgress::default();

    let catalog = Cataloger::new(&config, &executor)
        .with_progress(&progress)
        .build(&paths(&["a.mkv", "b.mkv", "c.mkv"]))
        .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(2).unwrap().file_name, "c.mkv");
    assert_eq!(catalog.failures().len(), 1);
    assert_eq!(catalog.failures()[0].path, PathBuf::from("/media/b.mkv"));
    assert_eq!(catalog.stats().files_failed, 1);
    assert!(
        progress
            .events()
            .iter()
            .any(|e| matches!(e, ProgressEvent::ProbeFailed { .. }))
    );
}

#[test]
fn test_parallel_probing_keeps_discovery_order() {
    let config = CoreConfigBuilder::new().parallel_probing(true).build();
    let executor = MockFfprobeExecutor::new();
    let names: Vec<String> = (0..32)
        .map(|i| {
            if i % 5 == 0 {
                format!("extra{i:02}.mp4")
            } else {
                format!("ep{i:02}.mkv")
            }
        })
        .collect();
    for (i, name) in names.iter().enumerate() {
        executor.respond_with(name, document(i as u64 * 10, vec![]));
    }
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let files = paths(&name_refs);

    let catalog = Cataloger::new(&config, &executor).build(&files).unwrap();

    let expected: Vec<&PathBuf> = files.iter().filter(|p| p.extension().unwrap() == "mkv").collect();
    let actual: Vec<&PathBuf> = catalog.records().map(|r| &r.file_path).collect();
    assert_eq!(actual, expected);
    for (i, record) in catalog.records().enumerate() {
        assert_eq!(record.sequence, i + 1);
    }
    let expected_bytes: u64 = (0..32u64).filter(|i| i % 5 != 0).map(|i| i * 10).sum();
    assert_eq!(catalog.total_bytes(), expected_bytes);
    assert_eq!(catalog.stats().files_skipped, 7);
}

#[test]
fn test_parallel_abort_stops_remaining_probes() {
    let config = CoreConfigBuilder::new().parallel_probing(true).build();
    let executor = MockFfprobeExecutor::new();
    executor.respond("ep00.mkv", MockResponse::ToolMissing);
    let names: Vec<String> = (0..16).map(|i| format!("ep{i:02}.mkv")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let files = paths(&name_refs);
    let progress = RecordingProgress::default();

    // One worker makes the probe order deterministic
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    let result = pool.install(|| {
        Cataloger::new(&config, &executor)
            .with_progress(&progress)
            .build(&files)
    });

    assert!(matches!(result, Err(CoreError::ToolNotFound(_))));
    assert_eq!(executor.calls(), vec![files[0].clone()]);
    let started = progress
        .events()
        .iter()
        .filter(|e| matches!(e, ProgressEvent::ProbeStarted { .. }))
        .count();
    assert_eq!(started, 1);
}

#[test]
fn test_parallel_abort_reports_failure_in_discovery_order() {
    let config = CoreConfigBuilder::new().parallel_probing(true).build();
    let executor = MockFfprobeExecutor::new();
    executor.respond("b.mkv", MockResponse::EmptyOutput);
    let files = paths(&["a.mkv", "b.mkv", "c.mkv", "d.mkv"]);

    match Cataloger::new(&config, &executor).build(&files) {
        Err(CoreError::ProbeOutput { path, .. }) => assert_eq!(path, files[1]),
        other => panic!("expected ProbeOutput, got {other:?}"),
    }
}

#[test]
fn test_discover_step_reports_discovery() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("a.mkv"))?;
    File::create(dir.path().join("notes.txt"))?;
    let config = CoreConfigBuilder::new()
        .path(dir.path())
        .extensions([".mkv"])
        .build();
    let executor = MockFfprobeExecutor::new();
    let progress = RecordingProgress::default();

    let mut cataloger = Cataloger::new(&config, &executor).with_progress(&progress);
    let files = cataloger.discover()?;
    assert_eq!(files, vec![dir.path().join("a.mkv")]);
    assert_eq!(cataloger.state(), CatalogState::Discovering);
    assert!(executor.calls().is_empty());

    let catalog = cataloger.build(&files)?;
    assert_eq!(catalog.len(), 1);
    assert_eq!(cataloger.state(), CatalogState::Done);
    assert_eq!(
        progress.events().first(),
        Some(&ProgressEvent::DiscoveryComplete { total: 1 })
    );
    Ok(())
}

#[test]
fn test_language_table_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let table = dir.path().join("languages.json");
    fs::write(&table, r#"{"eng": "Anglais"}"#)?;
    let config = CoreConfigBuilder::new().language_table(&table).build();
    let executor = MockFfprobeExecutor::new();
    executor.respond_with("movie.mkv", movie_document());

    let catalog = Cataloger::new(&config, &executor).build(&paths(&["movie.mkv"]))?;
    match catalog.get(1).unwrap().track(0) {
        Some(TrackRef::Video(video)) => assert_eq!(video.language, "Anglais"),
        other => panic!("expected a video track, got {other:?}"),
    }

    let config = CoreConfigBuilder::new()
        .language_table(dir.path().join("missing.json"))
        .build();
    let result = Cataloger::new(&config, &executor).build(&paths(&["movie.mkv"]));
    assert!(matches!(result, Err(CoreError::LanguageTable(_))));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = CoreConfigBuilder::new().extensions(["mkv"]).build();
    let executor = MockFfprobeExecutor::new();
    let result = Cataloger::new(&config, &executor).run();
    assert!(matches!(result, Err(CoreError::Config(_))));
}

#[test]
fn test_catalog_serializes_to_json() {
    let config = CoreConfig::default();
    let executor = MockFfprobeExecutor::new();
    executor.respond_with("movie.mkv", movie_document());

    let catalog = Cataloger::new(&config, &executor)
        .build(&paths(&["movie.mkv"]))
        .unwrap();
    let json = serde_json::to_value(&catalog).unwrap();

    let entry = &json["entries"]["1"];
    assert_eq!(entry["file_name"], "movie.mkv");
    assert_eq!(entry["total_tracks"], 2);
    assert_eq!(entry["format"]["duration"], "00:23:40.045");
    assert_eq!(entry["tracks"]["video"]["0"]["display_resolution"], "1080p");
    assert_eq!(json["stats"]["total_bytes"], 734_003_200u64);
}
