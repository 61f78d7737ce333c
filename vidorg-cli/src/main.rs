// vidorg-cli/src/main.rs
//
// Entry point for the `vidorg` binary: parse arguments, set up logging,
// dispatch the subcommand and turn errors into a non-zero exit status.

use clap::Parser;
use console::style;
use std::process;
use vidorg_cli::{Cli, Commands, OutputMode, init_logging, run_info};

fn main() {
    let cli = Cli::parse();

    let (mode, ignored) = OutputMode::resolve(cli.debug, cli.quiet, cli.quiet_flow);
    init_logging(mode, &ignored);

    let result = match cli.command {
        Commands::Info(args) => run_info(args, mode),
    };

    if let Err(e) = result {
        log::debug!("Run failed: {e:?}");
        eprintln!("{} {e}", style("Error:").red().bold());
        process::exit(1);
    }
}
