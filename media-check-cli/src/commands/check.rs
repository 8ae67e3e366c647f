use log::info;
use media_check_core::MediaDirectoryManager;
use std::io::Write;

use crate::error::{CliResult, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};
use crate::output::write_check_result;

/// Execute the default check. With `verbose`, the manager's status summary
/// is printed after the result.
pub fn run_check<W: Write>(
    manager: &MediaDirectoryManager,
    out: &mut W,
    verbose: bool,
    color: bool,
) -> CliResult<i32> {
    writeln!(out, "🔍 Checking media directory status...")?;
    info!(
        "Checking {} media directories under {}",
        manager.registry().len(),
        manager.registry().root().display()
    );

    let outcome = manager.check_directories();
    write_check_result(out, outcome.success, color)?;

    if verbose {
        writeln!(out)?;
        writeln!(out, "📋 Directory Summary:")?;
        manager.write_directory_status(out)?;
    }

    Ok(if outcome.success {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    })
}
