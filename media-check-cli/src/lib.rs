// media-check-cli/src/lib.rs
//
// Library portion of the check_media CLI application.
// Contains argument definitions, output formatting and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Mode};
pub use commands::{build_manager, dispatch};
pub use error::{CliResult, EXIT_SETUP_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};
