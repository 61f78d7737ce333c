// ============================================================================
// vidorg-cli/src/commands/info.rs
// ============================================================================
//
// INFO COMMAND: Discover media files and print their metadata
//
// Flow: build the CoreConfig from the arguments, let the Cataloger discover
// files, print the discovery notices, catalog the files with ffprobe behind a
// progress bar, then print the catalog as text or JSON.

use std::io;

use log::{debug, info};
use vidorg_core::{
    Cataloger, CommandFfprobeExecutor, CoreConfig, CoreConfigBuilder, DEFAULT_EXTENSIONS,
    ProbeErrorPolicy, parse_keyword_list,
};

use crate::cli::InfoArgs;
use crate::error::CliResult;
use crate::logging::OutputMode;
use crate::output::{
    ProgressReporter, found_files_message, print_catalog, print_file_list, print_summary,
    search_options_lines,
};

/// Maps command-line arguments to a core configuration.
///
/// An empty extension list falls back to the default media extensions.
#[must_use]
pub fn config_from_args(args: &InfoArgs) -> CoreConfig {
    let mut extensions = parse_keyword_list(&args.extensions);
    if extensions.is_empty() {
        extensions = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
    }
    let policy = if args.keep_going {
        ProbeErrorPolicy::Skip
    } else {
        ProbeErrorPolicy::Abort
    };

    let mut builder = CoreConfigBuilder::new()
        .path(args.path.clone())
        .no_subdirs(args.no_subdir)
        .includes(parse_keyword_list(&args.includes))
        .excludes(parse_keyword_list(&args.excludes))
        .extensions(extensions)
        .probe_program(args.probe_program.clone())
        .probe_error_policy(policy)
        .parallel_probing(args.parallel);
    if let Some(table) = &args.language_table {
        builder = builder.language_table(table.clone());
    }
    builder.build()
}

pub fn run_info(args: InfoArgs, mode: OutputMode) -> CliResult<()> {
    let config = config_from_args(&args);
    debug!("Configuration: {config:?}");

    let executor = CommandFfprobeExecutor::new(config.probe_program.clone());
    let reporter = ProgressReporter::new(mode.shows_flow() && !args.json);
    let mut cataloger = Cataloger::new(&config, &executor).with_progress(&reporter);
    let files = cataloger.discover()?;

    // JSON output keeps stdout machine readable
    if !args.json {
        println!("{}", found_files_message(files.len()));
        if mode.shows_flow() && !files.is_empty() {
            print_file_list(&files);
        }
        if mode.shows_search_options() {
            for line in search_options_lines(&config.includes, &config.excludes, &config.extensions)
            {
                println!("{line}");
            }
        }
    }
    if files.is_empty() {
        return Ok(());
    }

    info!("Getting files...");
    reporter.start(files.len());
    let result = cataloger.build(&files);
    reporter.finish();
    let catalog = result?;

    if args.json {
        let text = serde_json::to_string_pretty(&catalog).map_err(io::Error::from)?;
        println!("{text}");
        return Ok(());
    }

    if !mode.is_quiet() {
        print_catalog(&catalog);
    }
    print_summary(&catalog);
    Ok(())
}
