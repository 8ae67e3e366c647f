//! Directory status model and filesystem inspection.
//!
//! Each check produces a fresh `DirectoryStatus`. Filesystem errors raised
//! while inspecting a path are folded into the status instead of being
//! returned to the caller.

use crate::config::WRITE_PROBE_PREFIX;

use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Classification of a single media directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectoryState {
    /// Exists, is a directory and is writable
    Ok,
    /// Nothing exists at the path
    Missing,
    /// Something other than a directory exists at the path
    NotADirectory,
    /// A directory that cannot be written to
    NotWritable,
}

impl DirectoryState {
    /// Short status glyph used in reports.
    pub fn symbol(self) -> &'static str {
        match self {
            DirectoryState::Ok => "✅",
            DirectoryState::Missing => "❌",
            DirectoryState::NotADirectory => "⚠️",
            DirectoryState::NotWritable => "🔒",
        }
    }

    pub fn is_ok(self) -> bool {
        self == DirectoryState::Ok
    }
}

impl fmt::Display for DirectoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DirectoryState::Ok => "OK",
            DirectoryState::Missing => "MISSING",
            DirectoryState::NotADirectory => "NOT_A_DIRECTORY",
            DirectoryState::NotWritable => "NOT_WRITABLE",
        };
        f.write_str(label)
    }
}

/// Observed state of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryStatus {
    pub name: String,
    /// Resolved path that was inspected
    pub path: PathBuf,
    pub exists: bool,
    pub is_directory: bool,
    pub writable: bool,
    #[serde(rename = "status")]
    pub state: DirectoryState,
}

impl DirectoryStatus {
    /// Inspects `path` and classifies it.
    ///
    /// Writability is only probed on directories; a missing path or a
    /// non-directory always reports `writable == false`.
    pub fn inspect(name: &str, path: &Path) -> Self {
        let (exists, is_directory, writable) = match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => (true, true, is_writable(path, &meta)),
            Ok(_) => (true, false, false),
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    debug!("{} not found at {}", name, path.display());
                } else {
                    warn!("Could not inspect {} at {}: {}", name, path.display(), e);
                }
                (false, false, false)
            }
        };

        let state = if !exists {
            DirectoryState::Missing
        } else if !is_directory {
            DirectoryState::NotADirectory
        } else if !writable {
            DirectoryState::NotWritable
        } else {
            DirectoryState::Ok
        };

        Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            exists,
            is_directory,
            writable,
            state,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.state.is_ok()
    }
}

/// A directory counts as writable when its permission bits allow writes and
/// a probe file can actually be created inside it.
fn is_writable(path: &Path, meta: &Metadata) -> bool {
    if meta.permissions().readonly() {
        debug!("{} is marked read-only", path.display());
        return false;
    }

    match tempfile::Builder::new()
        .prefix(WRITE_PROBE_PREFIX)
        .tempfile_in(path)
    {
        Ok(_probe) => true,
        Err(e) => {
            debug!("Write probe failed in {}: {}", path.display(), e);
            false
        }
    }
}

/// Statuses for every registry entry, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectoryReport {
    statuses: Vec<DirectoryStatus>,
}

impl DirectoryReport {
    pub fn new(statuses: Vec<DirectoryStatus>) -> Self {
        Self { statuses }
    }

    /// Looks up the status of a directory by its logical name.
    pub fn get(&self, name: &str) -> Option<&DirectoryStatus> {
        self.statuses.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectoryStatus> {
        self.statuses.iter()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// True when every directory is `Ok`. An empty report is trivially ok.
    pub fn all_ok(&self) -> bool {
        self.statuses.iter().all(DirectoryStatus::is_ok)
    }

    /// Entries that are not `Ok`.
    pub fn failures(&self) -> impl Iterator<Item = &DirectoryStatus> {
        self.statuses.iter().filter(|s| !s.is_ok())
    }
}

impl<'a> IntoIterator for &'a DirectoryReport {
    type Item = &'a DirectoryStatus;
    type IntoIter = std::slice::Iter<'a, DirectoryStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.statuses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn existing_directory_is_ok() {
        let dir = tempdir().unwrap();
        let status = DirectoryStatus::inspect("music", dir.path());

        assert!(status.exists);
        assert!(status.is_directory);
        assert!(status.writable);
        assert_eq!(status.state, DirectoryState::Ok);
    }

    #[test]
    fn missing_path_is_missing() {
        let dir = tempdir().unwrap();
        let status = DirectoryStatus::inspect("music", &dir.path().join("nope"));

        assert!(!status.exists);
        assert!(!status.is_directory);
        assert!(!status.writable);
        assert_eq!(status.state, DirectoryState::Missing);
    }

    #[test]
    fn regular_file_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("cache");
        File::create(&file).unwrap();

        let status = DirectoryStatus::inspect("cache", &file);
        assert!(status.exists);
        assert!(!status.is_directory);
        assert_eq!(status.state, DirectoryState::NotADirectory);
    }

    #[test]
    fn path_below_a_file_is_missing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("media");
        File::create(&file).unwrap();

        let status = DirectoryStatus::inspect("music", &file.join("music"));
        assert_eq!(status.state, DirectoryState::Missing);
    }

    #[test]
    fn write_probe_leaves_no_files_behind() {
        let dir = tempdir().unwrap();
        DirectoryStatus::inspect("music", dir.path());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn state_labels_match_serialized_form() {
        for state in [
            DirectoryState::Ok,
            DirectoryState::Missing,
            DirectoryState::NotADirectory,
            DirectoryState::NotWritable,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state));
        }
    }
}
