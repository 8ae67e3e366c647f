//! Human-readable output for the `check_media` commands.
//!
//! Every function writes to a caller-supplied writer so that the commands
//! can target stdout while tests capture the text.

use media_check_core::{DirectoryReport, DirectoryStatus};
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// Width of the name column in the info table.
const NAME_WIDTH: usize = 20;

/// Check if color should be used (respects NO_COLOR and terminal support)
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Pads `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn success_line<W: Write, T: Display>(out: &mut W, message: T, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "✅ {}", message.to_string().green())
    } else {
        writeln!(out, "✅ {}", message)
    }
}

fn failure_line<W: Write, T: Display>(out: &mut W, message: T, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "❌ {}", message.to_string().bright_red().bold())
    } else {
        writeln!(out, "❌ {}", message)
    }
}

/// Print the tool banner
pub fn write_banner<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    let title = "🎵 EchoBot Media Directory Checker";
    if color {
        writeln!(out, "{}", title.bold())?;
        writeln!(out, "{}", "=".repeat(50).bright_blue())
    } else {
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "=".repeat(50))
    }
}

/// Print the result of the default (read-only) check
pub fn write_check_result<W: Write>(out: &mut W, success: bool, color: bool) -> io::Result<()> {
    if success {
        return success_line(out, "All media directories are valid", color);
    }

    failure_line(out, "Media directory validation failed", color)?;
    writeln!(out)?;
    writeln!(out, "💡 To fix issues, run:")?;
    writeln!(out, "   check_media --fix")?;
    writeln!(out)?;
    writeln!(out, "📊 For detailed info, run:")?;
    writeln!(out, "   check_media --info")
}

/// Print the directories created by fix mode and the overall result
pub fn write_fix_result<W: Write>(
    out: &mut W,
    success: bool,
    created: &[PathBuf],
    color: bool,
) -> io::Result<()> {
    if created.is_empty() {
        writeln!(out, "ℹ️  No missing directories to create")?;
    } else {
        success_line(
            out,
            format!("Created {} missing directories:", created.len()),
            color,
        )?;
        for path in created {
            writeln!(out, "   - {}", path.display())?;
        }
    }

    if success {
        success_line(out, "All media directories are now valid", color)
    } else {
        failure_line(out, "Some issues remain - check logs for details", color)
    }
}

fn write_status_row<W: Write>(out: &mut W, status: &DirectoryStatus, color: bool) -> io::Result<()> {
    let exists = if status.exists { "EXISTS" } else { "MISSING" };
    let writable = if status.writable { "WRITABLE" } else { "NOT_WRITABLE" };
    let is_dir = if status.is_directory { "DIR" } else { "NOT_DIR" };
    let name = pad(&status.name, NAME_WIDTH);

    if color {
        writeln!(
            out,
            "{} {} | {}",
            status.state.symbol(),
            name.bright_cyan(),
            status.path.display()
        )?;
    } else {
        writeln!(out, "{} {} | {}", status.state.symbol(), name, status.path.display())?;
    }
    writeln!(
        out,
        "     {} | {} | {} | {} | {}",
        pad("", NAME_WIDTH),
        status.state,
        exists,
        writable,
        is_dir
    )?;
    writeln!(out)
}

/// Print the detailed per-directory table
pub fn write_info_table<W: Write>(out: &mut W, report: &DirectoryReport, color: bool) -> io::Result<()> {
    writeln!(out, "📊 Detailed Media Directory Information:")?;
    writeln!(out)?;
    for status in report {
        write_status_row(out, status, color)?;
    }
    Ok(())
}

/// Print the report as a pretty JSON array
pub fn write_info_json<W: Write>(out: &mut W, report: &DirectoryReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
