// ============================================================================
// media-check-core/src/manager.rs
// ============================================================================
//
// DIRECTORY MANAGER: Inspection and Creation of Media Directories
//
// The manager walks the registry in order, classifies each directory and,
// in fix mode, creates the ones that are simply missing. Problems with an
// individual directory never abort the run; they are reported through the
// entry's `DirectoryState`.
//
// KEY COMPONENTS:
// - MediaDirectoryManager: Owns a registry and runs the checks
// - FixOutcome: Overall success flag plus the directories created
//
// AI-ASSISTANT-INFO: Media directory validation and creation

// ---- External crate imports ----
use log::{debug, info, warn};

// ---- Standard library imports ----
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

// ---- Internal crate imports ----
use crate::registry::DirectoryRegistry;
use crate::status::{DirectoryReport, DirectoryState, DirectoryStatus};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Result of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOutcome {
    /// True when every registry directory ended in `DirectoryState::Ok`
    pub success: bool,
    /// Directories created during this call, in registry order
    pub created: Vec<PathBuf>,
}

// ============================================================================
// MANAGER
// ============================================================================

/// Checks and repairs the directories named by a [`DirectoryRegistry`].
#[derive(Debug, Clone)]
pub struct MediaDirectoryManager {
    registry: DirectoryRegistry,
}

impl MediaDirectoryManager {
    pub fn new(registry: DirectoryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DirectoryRegistry {
        &self.registry
    }

    /// Inspects every registry directory and returns their statuses.
    pub fn get_directory_info(&self) -> DirectoryReport {
        let statuses = self
            .registry
            .entries()
            .iter()
            .map(|entry| DirectoryStatus::inspect(&entry.name, &self.registry.resolve(entry)))
            .collect();
        DirectoryReport::new(statuses)
    }

    /// Read-only validation. `created` is always empty.
    pub fn check_directories(&self) -> FixOutcome {
        let report = self.get_directory_info();
        for status in report.failures() {
            warn!(
                "Media directory {} ({}) is {}",
                status.name,
                status.path.display(),
                status.state
            );
        }
        FixOutcome {
            success: report.all_ok(),
            created: Vec::new(),
        }
    }

    /// Validates every directory, creating the ones that are missing.
    ///
    /// Only `Missing` entries are created (parents included). Entries that
    /// exist as files or are not writable are left untouched and keep the
    /// run from succeeding.
    pub fn validate_and_create_directories(&self) -> FixOutcome {
        let mut success = true;
        let mut created = Vec::new();

        for entry in self.registry.entries() {
            let path = self.registry.resolve(entry);
            let mut status = DirectoryStatus::inspect(&entry.name, &path);

            if status.state == DirectoryState::Missing {
                match fs::create_dir_all(&path) {
                    Ok(()) => {
                        status = DirectoryStatus::inspect(&entry.name, &path);
                        if status.is_directory {
                            info!("Created media directory {}: {}", entry.name, path.display());
                            created.push(path.clone());
                        }
                    }
                    Err(e) => {
                        warn!(
                            "Failed to create media directory {} at {}: {}",
                            entry.name,
                            path.display(),
                            e
                        );
                        status = DirectoryStatus::inspect(&entry.name, &path);
                    }
                }
            }

            if status.is_ok() {
                debug!("Media directory {} is ok: {}", entry.name, path.display());
            } else {
                warn!(
                    "Media directory {} ({}) is {}",
                    entry.name,
                    path.display(),
                    status.state
                );
                success = false;
            }
        }

        FixOutcome { success, created }
    }

    /// Writes a human-readable status summary.
    pub fn write_directory_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let report = self.get_directory_info();
        let ok = report.iter().filter(|s| s.is_ok()).count();

        writeln!(out, "Media root: {}", self.registry.root().display())?;
        for status in &report {
            writeln!(
                out,
                "  {} {:<12} {} ({})",
                status.state.symbol(),
                status.name,
                status.path.display(),
                status.state
            )?;
        }
        writeln!(out, "{}/{} media directories ok", ok, report.len())
    }

    /// Prints [`MediaDirectoryManager::write_directory_status`] to stdout.
    pub fn print_directory_status(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_directory_status(&mut handle) {
            warn!("Failed to print directory status: {}", e);
        }
    }
}
