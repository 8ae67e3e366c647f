// media-check-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use media_check_core::ROOT_ENV_VAR;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Check EchoBot media directories",
    long_about = "Verifies that the expected media directories exist, are directories and are \
                  writable. Use --fix to create missing directories and --info for a detailed report."
)]
pub struct Cli {
    /// Create missing directories
    #[arg(long)]
    pub fix: bool,

    /// Show detailed information for every directory
    #[arg(long)]
    pub info: bool,

    /// Verbose output (prints the directory summary and enables debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional: Project root the media paths are resolved against
    /// (defaults to the parent of the executable's directory)
    #[arg(long, value_name = "ROOT_DIR", env = ROOT_ENV_VAR)]
    pub root: Option<PathBuf>,

    /// Optional: JSON file listing the directories to check
    /// (an array of {"name": ..., "path": ...} objects)
    #[arg(long, value_name = "REGISTRY_FILE")]
    pub registry: Option<PathBuf>,

    /// Emit the --info report as JSON
    #[arg(long, requires = "info", conflicts_with = "fix")]
    pub json: bool,
}

/// The operation selected by the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Check,
    Fix,
    Info,
}

impl Cli {
    /// `--fix` takes precedence over `--info`.
    pub fn mode(&self) -> Mode {
        if self.fix {
            Mode::Fix
        } else if self.info {
            Mode::Info
        } else {
            Mode::Check
        }
    }
}
