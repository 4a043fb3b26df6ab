//! Platform logging initialization for report_desk.
//!
//! The terminal is also the UI, so logs go to a file unless asked otherwise.
//! Sessions append to the same file so earlier runs stay readable.

use std::fs::{File, OpenOptions};
use std::path::Path;

use desk_logging::{desk_config, level_for};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogDestination {
    /// Append to the log file.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Both of the above.
    Both,
}

impl LogDestination {
    fn to_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }

    fn to_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }
}

/// Installs the global logger. A log file that cannot be opened is reported on
/// stderr and skipped; the desk still runs.
pub fn initialize(destination: LogDestination, verbose: bool, log_file: &Path) {
    let loggers = build_loggers(destination, level_for(verbose), log_file);
    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    log_file: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            desk_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.to_file() {
        match open_log_file(log_file) {
            Ok(file) => loggers.push(WriteLogger::new(level, desk_config(), file)),
            Err(err) => eprintln!("Warning: could not open log file {:?}: {}", log_file, err),
        }
    }
    loggers
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn destinations_pick_their_loggers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("desk.log");

        assert_eq!(build_loggers(LogDestination::Terminal, LevelFilter::Info, &path).len(), 1);
        assert!(!path.exists());
        assert_eq!(build_loggers(LogDestination::File, LevelFilter::Info, &path).len(), 1);
        assert!(path.exists());
        assert_eq!(build_loggers(LogDestination::Both, LevelFilter::Info, &path).len(), 2);
    }

    #[test]
    fn unopenable_log_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("desk.log");

        assert!(build_loggers(LogDestination::File, LevelFilter::Info, &path).is_empty());
        assert_eq!(build_loggers(LogDestination::Both, LevelFilter::Info, &path).len(), 1);
    }

    #[test]
    fn log_file_keeps_earlier_sessions() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("desk.log");

        open_log_file(&path).unwrap().write_all(b"first\n").unwrap();
        open_log_file(&path).unwrap().write_all(b"second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
