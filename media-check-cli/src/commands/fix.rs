use log::info;
use media_check_core::MediaDirectoryManager;
use std::io::Write;

use crate::error::{CliResult, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};
use crate::output::write_fix_result;

/// Execute fix mode: create missing directories, then report what changed.
pub fn run_fix<W: Write>(manager: &MediaDirectoryManager, out: &mut W, color: bool) -> CliResult<i32> {
    writeln!(out, "🔧 Fixing missing directories...")?;

    let outcome = manager.validate_and_create_directories();
    info!(
        "Fix finished: {} created, success = {}",
        outcome.created.len(),
        outcome.success
    );
    write_fix_result(out, outcome.success, &outcome.created, color)?;

    Ok(if outcome.success {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    })
}
