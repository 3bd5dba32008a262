//! Logger writing to `stdout`, which the Golem host captures per worker.

use chrono::{SecondsFormat, Utc};
use log::{Level, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};

pub const DEFAULT_LEVEL: Level = Level::Info;

pub struct Logger {
    level: Level,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{} {:<5} {:<8} {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Nowhere left to report a failed write to stdout.
            let _ = writeln!(io::stdout(), "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Installs the stdout logger. Fails if a logger is already set for this
/// process.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger::new(level)))?;
    log::set_max_level(level.to_level_filter());

    Ok(())
}

/// Level from the `RUST_LOG` environment variable, if present and valid.
pub fn env_level() -> Option<Level> {
    std::env::var("RUST_LOG").ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_level() {
        let logger = Logger::new(Level::Info);

        let info = Metadata::builder().level(Level::Info).build();
        let error = Metadata::builder().level(Level::Error).build();
        let debug = Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&info));
        assert!(logger.enabled(&error));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn formats_level_target_and_message() {
        let logger = Logger::new(Level::Info);
        let line = logger.format(
            &Record::builder()
                .level(Level::Error)
                .target("address_book::service")
                .args(format_args!("Address delete failed"))
                .build(),
        );

        assert!(line.ends_with("ERROR address_book::service Address delete failed"));
    }
}
