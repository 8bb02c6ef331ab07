//! Rolling Logger
//!
//! A `tracing` subscriber that writes to a size-rotated log file and keeps
//! the most recent lines in a circular in-memory buffer. Records emitted
//! through the `log` facade are bridged into it.
//!
//! Files: `<dir>/<app>.log`, rotated to `<app>.log.1` … `<app>.log.N`.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

static LOGGER: OnceLock<RollingWriter> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger not initialized")]
    NotInitialized,
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: log::LevelFilter,
    /// Rotate once the current file reaches this many bytes
    pub max_bytes: u64,
    /// Rotated files kept besides the current one
    pub max_files: usize,
    /// Lines kept in the in-memory buffer
    pub buffer_lines: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: log::LevelFilter::Info,
            max_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 200,
        }
    }
}

/// Initialize with default settings
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

/// Initialize the global subscriber. `RUST_LOG` takes precedence over
/// `config.level` when set.
pub fn init_logger_with(log_dir: PathBuf, app_name: &str, config: LoggerConfig) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let writer = RollingWriter::open(&log_dir, app_name, &config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_writer(writer.clone())
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER
        .set(writer)
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    Ok(())
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .map(|w| w.state().recent.iter().cloned().collect())
        .unwrap_or_default()
}

fn ensure_initialized() -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        Ok(())
    } else {
        Err(LoggerError::NotInitialized)
    }
}

fn level_directive(level: log::LevelFilter) -> &'static str {
    match level {
        log::LevelFilter::Off => "off",
        log::LevelFilter::Error => "error",
        log::LevelFilter::Warn => "warn",
        log::LevelFilter::Info => "info",
        log::LevelFilter::Debug => "debug",
        log::LevelFilter::Trace => "trace",
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

struct RollingState {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
    recent: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl RollingState {
    fn rotated_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", n));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
        } else {
            // Oldest falls off the end
            let _ = std::fs::remove_file(self.rotated_path(self.max_files));
            for n in (1..self.max_files).rev() {
                let from = self.rotated_path(n);
                if from.exists() {
                    std::fs::rename(&from, self.rotated_path(n + 1))?;
                }
            }
            std::fs::rename(&self.path, self.rotated_path(1))?;
            self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        }
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.capacity == 0 {
            return;
        }
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            if self.recent.len() == self.capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.trim_end().to_string());
        }
    }
}

/// Shared handle the fmt layer writes through
#[derive(Clone)]
struct RollingWriter {
    state: Arc<Mutex<RollingState>>,
}

impl RollingWriter {
    fn open(dir: &Path, app_name: &str, config: &LoggerConfig) -> Result<Self, LoggerError> {
        let path = dir.join(format!("{}.log", app_name));
        let io_err = |source| LoggerError::Io {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(dir).map_err(io_err)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                path,
                file,
                written,
                max_bytes: config.max_bytes,
                max_files: config.max_files,
                recent: VecDeque::with_capacity(config.buffer_lines),
                capacity: config.buffer_lines,
                partial: String::new(),
            })),
        })
    }

    fn state(&self) -> MutexGuard<'_, RollingState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state();
        if state.max_bytes > 0 && state.written >= state.max_bytes {
            state.rotate()?;
        }
        let n = state.file.write(buf)?;
        state.written += n as u64;
        state.remember(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_bytes: u64, max_files: usize, buffer_lines: usize) -> LoggerConfig {
        LoggerConfig {
            level: log::LevelFilter::Debug,
            max_bytes,
            max_files,
            buffer_lines,
        }
    }

    #[test]
    fn test_writes_and_buffers_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::open(dir.path(), "app", &config(0, 2, 10)).unwrap();

        writer.write_all(b"first line\nsecond ").unwrap();
        writer.write_all(b"half\n").unwrap();
        writer.flush().unwrap();

        let content = std::fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(content, "first line\nsecond half\n");
        let recent: Vec<String> = writer.state().recent.iter().cloned().collect();
        assert_eq!(recent, vec!["first line", "second half"]);
    }

    #[test]
    fn test_buffer_is_circular() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::open(dir.path(), "app", &config(0, 1, 2)).unwrap();

        for i in 0..5 {
            writer.write_all(format!("line {}\n", i).as_bytes()).unwrap();
        }

        let recent: Vec<String> = writer.state().recent.iter().cloned().collect();
        assert_eq!(recent, vec!["line 3", "line 4"]);
    }

    #[test]
    fn test_rotation_keeps_max_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::open(dir.path(), "app", &config(10, 2, 0)).unwrap();

        for i in 0..4 {
            writer.write_all(format!("entry-{:04}\n", i).as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        let current = std::fs::read_to_string(dir.path().join("app.log")).unwrap();
        let first = std::fs::read_to_string(dir.path().join("app.log.1")).unwrap();
        let second = std::fs::read_to_string(dir.path().join("app.log.2")).unwrap();
        assert_eq!(current, "entry-0003\n");
        assert_eq!(first, "entry-0002\n");
        assert_eq!(second, "entry-0001\n");
        assert!(!dir.path().join("app.log.3").exists());
    }

    #[test]
    fn test_helpers_require_init() {
        // The global logger is never installed in unit tests
        if LOGGER.get().is_none() {
            assert!(matches!(info("hello"), Err(LoggerError::NotInitialized)));
            assert!(recent_lines().is_empty());
        }
    }

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive(log::LevelFilter::Warn), "warn");
        assert_eq!(level_directive(log::LevelFilter::Off), "off");
    }
}
