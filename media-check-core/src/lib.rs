//! Core library for checking the media storage directories of a project.
//!
//! This crate provides the registry of expected media directories, the
//! status model used to describe them, and the manager that inspects and
//! creates them.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use media_check_core::{DirectoryRegistry, MediaDirectoryManager};
//!
//! let registry = DirectoryRegistry::with_defaults("/srv/echobot");
//! let manager = MediaDirectoryManager::new(registry);
//!
//! let outcome = manager.validate_and_create_directories();
//! for path in &outcome.created {
//!     println!("created {}", path.display());
//! }
//! if !outcome.success {
//!     manager.print_directory_status();
//! }
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod registry;
pub mod status;

// Re-exports for public API
pub use config::{DEFAULT_MEDIA_DIRECTORIES, ROOT_ENV_VAR, project_root_from_exe, resolve_project_root};
pub use error::{CoreError, CoreResult};
pub use manager::{FixOutcome, MediaDirectoryManager};
pub use registry::{DirectoryEntry, DirectoryRegistry};
pub use status::{DirectoryReport, DirectoryState, DirectoryStatus};
