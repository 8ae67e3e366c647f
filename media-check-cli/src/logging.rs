// ============================================================================
// media-check-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization
//
// Diagnostic logging goes to stderr through the standard `log` facade so
// that stdout only carries the report itself.
//
// USAGE:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug (or --verbose): Per-directory details
// - RUST_LOG=trace: Very verbose debugging information
//
// AI-ASSISTANT-INFO: Logging initialization for the CLI

use log::LevelFilter;
use std::io::Write;

/// Returns the level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes env_logger. RUST_LOG, when set, overrides the default level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {}", level_str, record.args())
        });

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized with level: {}", default_level(verbose));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level_to_debug() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }
}
