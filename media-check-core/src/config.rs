// ============================================================================
// media-check-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Default Registry Table and Project Root Resolution
//
// This module defines the constants used to build the default directory
// registry and the helpers that determine which project root the registry
// paths are resolved against.
//
// KEY COMPONENTS:
// - DEFAULT_MEDIA_DIRECTORIES: The built-in name -> relative path table
// - ROOT_ENV_VAR: Environment variable consulted by the CLI for the root
// - project_root_from_exe: Derives the root from the binary's location
//
// AI-ASSISTANT-INFO: Default configuration for the media directory checker

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Built-in media directories, in the order they are checked.
///
/// Paths are relative to the project root.
pub const DEFAULT_MEDIA_DIRECTORIES: &[(&str, &str)] = &[
    ("music", "media/music"),
    ("cache", "media/cache"),
    ("uploads", "media/uploads"),
    ("playlists", "media/playlists"),
    ("temp", "media/temp"),
];

/// Environment variable that overrides the project root.
pub const ROOT_ENV_VAR: &str = "MEDIA_CHECK_ROOT";

/// Prefix used for the temporary files that probe directory writability.
pub const WRITE_PROBE_PREFIX: &str = ".media_check_probe";

// ============================================================================
// PROJECT ROOT RESOLUTION
// ============================================================================

/// Derives the project root from the location of the running executable.
///
/// The binary is expected to live one level below the project root (for
/// example `<root>/bin/check_media` or `<root>/scripts/check_media`), so the
/// root is the parent of the executable's directory.
///
/// # Errors
///
/// Returns `CoreError::PathError` if the path has fewer than two ancestors.
pub fn project_root_from_exe(exe: &Path) -> CoreResult<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .filter(|root| !root.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            CoreError::PathError(format!(
                "Could not determine project root from executable '{}'",
                exe.display()
            ))
        })
}

/// Resolves the project root, preferring an explicit value.
pub fn resolve_project_root(explicit: Option<PathBuf>, exe: &Path) -> CoreResult<PathBuf> {
    match explicit {
        Some(root) => Ok(root),
        None => project_root_from_exe(exe),
    }
}
