// src/logging.rs
//
// File sink for the `log` facade. The library only emits records; binaries
// call `init` once at startup.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    start: Instant,
    lock: Mutex<()>,
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self { path: path.into(), level, start: Instant::now(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn line(&self, record: &Record) -> String {
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        format!("[{elapsed}][{}] {}\n", record.level(), record.args())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.line(record);

        // I/O failures are dropped.
        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install a `FileLogger` as the global logger, creating the log directory.
pub fn init(path: impl Into<PathBuf>, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = FileLogger::new(path, level);
    if let Some(parent) = logger.path().parent() {
        let _ = fs::create_dir_all(parent);
    }
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
