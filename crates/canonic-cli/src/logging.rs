//! Minimal stderr logger for the `log` facade.
//!
//! `-v` enables debug output (fallbacks taken by the engine), `-vv` adds
//! per-position trace output. Without flags only warnings and errors print.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".cyan(),
            Level::Debug => "debug".dimmed(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!("{} [{}] {}", tag, record.target().dimmed(), record.args());
    }

    fn flush(&self) {}
}

/// Level filter for a `-v` count.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the logger. Fails if another logger is already set.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(5), LevelFilter::Trace);
    }
}
