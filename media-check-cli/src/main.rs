// media-check-cli/src/main.rs
//
// Entry point for the `check_media` binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up logging to stderr.
// - Resolving the project root and building the directory manager.
// - Running the selected mode and mapping the outcome to an exit code.

use clap::Parser;
use log::error;
use media_check_cli::error::CliErrorContext;
use media_check_cli::{Cli, CliResult, EXIT_SETUP_ERROR, build_manager, dispatch, logging, output};
use std::io::Write;
use std::process;

fn run(cli: &Cli) -> CliResult<i32> {
    let exe = std::env::current_exe().cli_context("Failed to locate the check_media executable")?;
    let manager = build_manager(cli, &exe)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = dispatch(cli, &manager, &mut out, output::should_use_color())?;
    out.flush()?;
    Ok(code)
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            EXIT_SETUP_ERROR
        }
    };

    process::exit(exit_code);
}
