// ============================================================================
// media-check-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Fatal Error Types for the Core Library
//
// Directory conditions (missing, not a directory, not writable) are NOT
// errors; they are reported as `DirectoryState` values. The types here only
// cover setup problems that stop a run before any directory is inspected,
// such as an unreadable registry file or an unresolvable project root.
//
// AI-ASSISTANT-INFO: Core error type and result alias

use thiserror::Error;

/// Errors that can abort a media-check run.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid registry file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for media-check operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
