//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stdout and to a size-capped
//! log file. When the active file grows past `max_bytes` it is shifted to
//! `<app>.1.log`, older files move up by one, and anything past `max_files`
//! is discarded.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub type LoggerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Rotation limits for the log file
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Size in bytes after which the active file is rotated
    pub max_bytes: u64,
    /// Number of rotated files kept next to the active one
    pub max_files: usize,
    /// `EnvFilter` directive, e.g. `info` or `focus_pulse_lib=debug`
    pub level: String,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            max_files: 5,
            level: "info".to_string(),
        }
    }
}

/// Initialize logging into `log_dir/<app_name>.log`
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    options: LoggerOptions,
) -> LoggerResult<()> {
    let file = RollingFile::open(log_dir.as_ref(), app_name, options.max_bytes, options.max_files)?;
    let filter = EnvFilter::try_new(&options.level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()?;

    tracing::info!(dir = %log_dir.as_ref().display(), app = app_name, "rolling logger ready");
    Ok(())
}

/// Size-capped log file that rotates itself on write
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let mut rolling = Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            max_bytes,
            max_files,
            file: open_append(&active_path(dir, app_name))?,
            written: 0,
        };
        rolling.written = rolling.file.metadata()?.len();
        rolling.write_header()?;
        Ok(rolling)
    }

    /// Path of the file currently being written
    pub fn active_path(&self) -> PathBuf {
        active_path(&self.dir, &self.app_name)
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.app_name, index))
    }

    fn write_header(&mut self) -> io::Result<()> {
        let header = format!(
            "# {} log opened {}\n",
            self.app_name,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
        self.file.write_all(header.as_bytes())?;
        self.written += header.len() as u64;
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            fs::remove_file(self.active_path())?;
        } else {
            let oldest = self.rotated_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files).rev() {
                let from = self.rotated_path(index);
                if from.exists() {
                    fs::rename(&from, self.rotated_path(index + 1))?;
                }
            }
            fs::rename(self.active_path(), self.rotated_path(1))?;
        }

        self.file = open_append(&self.active_path())?;
        self.written = 0;
        self.write_header()
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn active_path(dir: &Path, app_name: &str) -> PathBuf {
    dir.join(format!("{}.log", app_name))
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_header_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();

        let content = fs::read_to_string(file.active_path()).unwrap();
        assert!(content.starts_with("# app log opened "));
    }

    #[test]
    fn test_rotates_when_size_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 200, 3).unwrap();

        file.write_all(&[b'a'; 100]).unwrap();
        file.write_all(&[b'b'; 100]).unwrap();
        file.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.1.log", "app.log"]);
        let rotated = fs::read_to_string(dir.path().join("app.1.log")).unwrap();
        assert!(rotated.contains(&"a".repeat(100)));
        let active = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert!(active.contains(&"b".repeat(100)));
        assert!(!active.contains(&"a".repeat(100)));
    }

    #[test]
    fn test_keeps_at_most_max_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 128, 2).unwrap();

        for chunk in [b'1', b'2', b'3', b'4', b'5'] {
            file.write_all(&[chunk; 60]).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.1.log", "app.2.log", "app.log"]);
        let newest_rotated = fs::read_to_string(dir.path().join("app.1.log")).unwrap();
        assert!(newest_rotated.contains(&"4".repeat(60)));
        let oldest_rotated = fs::read_to_string(dir.path().join("app.2.log")).unwrap();
        assert!(oldest_rotated.contains(&"3".repeat(60)));
    }

    #[test]
    fn test_reopen_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "app", 4096, 2).unwrap();
            file.write_all(b"first run\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "app", 4096, 2).unwrap();
        file.write_all(b"second run\n").unwrap();
        file.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert!(content.contains("first run"));
        assert!(content.contains("second run"));
    }
}
