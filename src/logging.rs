//! File sink for the `log` facade.
//!
//! The menu owns the terminal, so log records never go to stdout or stderr. Set
//! `LEMMY_TUI_LOG=<path>` to append them to a file instead.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::EnvConfig;

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>, level: LevelFilter) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let mut file = lock_unpoisoned(&self.file);
        let _ = writeln!(
            file,
            "{}.{:03} {:<5} {}: {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = lock_unpoisoned(&self.file).flush();
    }
}

/// Parse a level name such as `debug` or `WARN`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// Install `logger` as the global logger.
pub fn install(logger: FileLogger) -> io::Result<()> {
    let level = logger.level();
    log::set_boxed_logger(Box::new(logger)).map_err(io::Error::other)?;
    log::set_max_level(level);
    Ok(())
}

/// Install the file logger described by `config`. Returns `false` when logging is disabled.
pub fn init_from_env(config: &EnvConfig) -> io::Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    install(FileLogger::open(path, config.log_level)?)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{parse_level, FileLogger};
    use log::{Level, LevelFilter, Log, Record};

    #[test]
    fn writes_enabled_records_and_skips_the_rest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("menu.log");
        let logger = FileLogger::open(&path, LevelFilter::Info).expect("open log");

        logger.log(
            &Record::builder()
                .args(format_args!("fetched 10 posts"))
                .level(Level::Info)
                .target("lemmy_browser::view")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("raw key"))
                .level(Level::Debug)
                .target("lemmy_tui::runtime::menu")
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("INFO  lemmy_browser::view: fetched 10 posts"));
    }

    #[test]
    fn reopening_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("menu.log");
        for message in ["one", "two"] {
            let logger = FileLogger::open(&path, LevelFilter::Trace).expect("open log");
            logger.log(
                &Record::builder()
                    .args(format_args!("{message}"))
                    .level(Level::Warn)
                    .target("t")
                    .build(),
            );
        }
        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
