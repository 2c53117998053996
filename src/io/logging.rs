//! Stderr output for the `log` records emitted across the crate
//!
//! The library only talks to the `log` facade. Binaries opt in to seeing the
//! records by installing [`StderrLogger`] through [`init`].

use crate::io::error::{LatticeError, Result};
use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: StderrLogger = StderrLogger;

/// Writes each enabled record to stderr as one line
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    #[allow(clippy::print_stderr)]
    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

/// Most detailed level shown for a count of `-v` flags
///
/// Warnings always pass; each flag adds one level down to `trace`.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Render a record as `[LEVEL target] message`
pub fn format_record(record: &Record<'_>) -> String {
    let level = record.level();
    format!("[{level} {}] {}", record.target(), record.args())
}

/// Install [`StderrLogger`] for the process at the level of `verbosity`
///
/// # Errors
///
/// Returns [`LatticeError::LoggerInstalled`] if a logger is already in
/// place; the existing logger and level are left untouched
pub fn init(verbosity: u8) -> Result<()> {
    log::set_logger(&LOGGER)
        .map_err(|source| LatticeError::LoggerInstalled { source })?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}
