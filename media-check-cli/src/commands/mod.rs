//! Command implementations for the CLI.
//!
//! Each submodule implements one of the `check_media` modes and returns the
//! process exit code.

/// Default mode: read-only validation with remediation hints.
pub mod check;
/// `--fix`: create missing directories.
pub mod fix;
/// `--info`: detailed per-directory report.
pub mod info;

use log::debug;
use media_check_core::{DirectoryRegistry, MediaDirectoryManager, resolve_project_root};
use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, Mode};
use crate::error::{CliErrorContext, CliResult};
use crate::output::write_banner;

/// Builds the manager described by the arguments.
///
/// `exe` is the path of the running binary, used to derive the project root
/// when `--root` is not given.
pub fn build_manager(cli: &Cli, exe: &Path) -> CliResult<MediaDirectoryManager> {
    let root = resolve_project_root(cli.root.clone(), exe)?;
    debug!("Project root: {}", root.display());

    let registry = match &cli.registry {
        Some(file) => DirectoryRegistry::from_json_file(root, file)
            .cli_with_context(|| format!("Failed to load registry '{}'", file.display()))?,
        None => DirectoryRegistry::with_defaults(root),
    };

    Ok(MediaDirectoryManager::new(registry))
}

/// Runs the mode selected by `cli` and returns the process exit code.
pub fn dispatch<W: Write>(
    cli: &Cli,
    manager: &MediaDirectoryManager,
    out: &mut W,
    color: bool,
) -> CliResult<i32> {
    let mode = cli.mode();
    debug!("Running in {:?} mode", mode);

    if !cli.json {
        write_banner(out, color)?;
    }

    match mode {
        Mode::Fix => fix::run_fix(manager, out, color),
        Mode::Info => info::run_info(manager, out, cli.json, color),
        Mode::Check => check::run_check(manager, out, cli.verbose, color),
    }
}
