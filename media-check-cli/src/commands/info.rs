use media_check_core::MediaDirectoryManager;
use std::io::Write;

use crate::error::{CliResult, EXIT_SUCCESS};
use crate::output::{write_info_json, write_info_table};

/// Execute info mode. The report is informational and always exits 0.
pub fn run_info<W: Write>(
    manager: &MediaDirectoryManager,
    out: &mut W,
    json: bool,
    color: bool,
) -> CliResult<i32> {
    let report = manager.get_directory_info();
    if json {
        write_info_json(out, &report)?;
    } else {
        write_info_table(out, &report, color)?;
    }
    Ok(EXIT_SUCCESS)
}
