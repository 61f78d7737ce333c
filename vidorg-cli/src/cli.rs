// vidorg-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidorg: Video organizer",
    long_about = "Reads the encode information of video files with ffprobe and catalogs \
                  their container and track metadata."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output (overrides --quiet and --quiet-flow)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Display necessary messages only
    #[arg(short = 'Q', long, global = true)]
    pub quiet: bool,

    /// Display fewer messages (no file list, no progress bar)
    #[arg(long = "quiet-flow", global = true)]
    pub quiet_flow: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify media files and display their metadata
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Directory or file to process
    #[arg(short = 'P', long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Do not process subdirectories
    #[arg(long)]
    pub no_subdir: bool,

    /// Only process directories/files whose names contain one of these
    /// comma-separated keywords
    #[arg(long, value_name = "KEYWORDS", default_value = "")]
    pub includes: String,

    /// Skip directories/files whose names contain any of these
    /// comma-separated keywords
    #[arg(long, value_name = "KEYWORDS", default_value = "")]
    pub excludes: String,

    /// Comma-separated file extensions to process, with leading dots
    /// (default: .mkv,.mp4,.avi,.mov,.wmv)
    #[arg(long, value_name = "EXTS", default_value = "")]
    pub extensions: String,

    /// Print the catalog as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Skip files whose probe fails instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Probe files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// ffprobe executable to use
    #[arg(long, value_name = "PROGRAM", default_value = "ffprobe", env = "VIDORG_FFPROBE")]
    pub probe_program: String,

    /// JSON file mapping ISO 639-2 codes to language names
    #[arg(long, value_name = "FILE")]
    pub language_table: Option<PathBuf>,
}
