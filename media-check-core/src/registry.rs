//! Registry of expected media directories.
//!
//! A `DirectoryRegistry` is an ordered list of logical directory names, each
//! mapped to a path that is resolved against the project root. The registry
//! is a plain value handed to the manager, so tests can build one against a
//! temporary root.

use crate::config::DEFAULT_MEDIA_DIRECTORIES;
use crate::error::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A single logical media directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Unique logical name (e.g. "music")
    pub name: String,
    /// Path relative to the project root, or absolute
    pub path: PathBuf,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Ordered mapping from logical directory name to path.
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    root: PathBuf,
    entries: Vec<DirectoryEntry>,
}

impl DirectoryRegistry {
    /// Creates an empty registry rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Creates a registry holding the built-in media directories.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        let mut registry = Self::new(root);
        for (name, path) in DEFAULT_MEDIA_DIRECTORIES {
            registry.insert(*name, *path);
        }
        registry
    }

    /// Loads a registry from a JSON array of `{"name": ..., "path": ...}` objects.
    pub fn from_json_str(root: impl Into<PathBuf>, json: &str) -> CoreResult<Self> {
        let entries: Vec<DirectoryEntry> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(CoreError::Config(
                    "registry entry with an empty name".to_string(),
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CoreError::Config(format!(
                    "duplicate registry entry '{}'",
                    entry.name
                )));
            }
        }

        Ok(Self {
            root: root.into(),
            entries,
        })
    }

    /// Loads a registry from a JSON file. See [`DirectoryRegistry::from_json_str`].
    pub fn from_json_file(root: impl Into<PathBuf>, file: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(file).map_err(|e| {
            CoreError::Config(format!(
                "failed to read registry file '{}': {}",
                file.display(),
                e
            ))
        })?;
        Self::from_json_str(root, &json)
    }

    /// Adds an entry. An existing entry with the same name keeps its position
    /// and has its path replaced.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let entry = DirectoryEntry::new(name, path);
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => existing.path = entry.path,
            None => self.entries.push(entry),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves an entry's path against the project root.
    ///
    /// Absolute entry paths are returned unchanged.
    pub fn resolve(&self, entry: &DirectoryEntry) -> PathBuf {
        self.root.join(&entry.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_table_order() {
        let registry = DirectoryRegistry::with_defaults("/srv/echobot");
        let names: Vec<_> = registry.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["music", "cache", "uploads", "playlists", "temp"]);
        assert_eq!(
            registry.resolve(registry.get("music").unwrap()),
            PathBuf::from("/srv/echobot/media/music")
        );
    }

    #[test]
    fn insert_replaces_existing_name_in_place() {
        let mut registry = DirectoryRegistry::new("/root");
        registry.insert("music", "media/music");
        registry.insert("cache", "media/cache");
        registry.insert("music", "library/music");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].name, "music");
        assert_eq!(registry.entries()[0].path, PathBuf::from("library/music"));
    }

    #[test]
    fn absolute_paths_ignore_root() {
        let mut registry = DirectoryRegistry::new("/root");
        registry.insert("shared", "/mnt/shared");
        assert_eq!(
            registry.resolve(registry.get("shared").unwrap()),
            PathBuf::from("/mnt/shared")
        );
    }
}
