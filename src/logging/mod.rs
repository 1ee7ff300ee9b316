#[cfg(test)]
mod tests;

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, NaiveDate};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so `{:<5}` lines up the file columns.
        f.pad(match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        })
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

struct OpenDay {
    day: NaiveDate,
    path: PathBuf,
    file: File,
}

/// `shoplist-YYYY-MM-DD.log` in `dir`, opened in append mode so the desk and
/// the bot can share one file per day. A new file is opened when the date
/// changes under a long-running process.
struct DailyFile {
    dir: PathBuf,
    open: Option<OpenDay>,
    failed_on: Option<NaiveDate>,
}

impl DailyFile {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            open: None,
            failed_on: None,
        }
    }

    fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("shoplist-{}.log", day.format("%Y-%m-%d")))
    }

    fn roll_to(&mut self, day: NaiveDate) -> Option<&mut OpenDay> {
        if self.open.as_ref().is_some_and(|open| open.day == day) {
            return self.open.as_mut();
        }
        if self.failed_on == Some(day) {
            return None;
        }

        let path = self.path_for(day);
        let opened = fs::create_dir_all(&self.dir)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));
        match opened {
            Ok(file) => {
                self.failed_on = None;
                self.open = Some(OpenDay { day, path, file });
                self.open.as_mut()
            }
            Err(err) => {
                // One warning per day is enough.
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                self.failed_on = Some(day);
                self.open = None;
                None
            }
        }
    }

    fn append(&mut self, now: DateTime<Local>, line: &str) {
        if let Some(open) = self.roll_to(now.date_naive()) {
            let _ = writeln!(open.file, "{line}");
        }
    }
}

/// Clones share the file handle and the on/off switch; each clone carries
/// its own scope tag.
#[derive(Clone)]
pub struct Logger {
    file: Arc<Mutex<DailyFile>>,
    file_enabled: Arc<AtomicBool>,
    scope: Option<Arc<str>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            file: Arc::new(Mutex::new(DailyFile::new(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
            scope: None,
        }
    }

    /// A logger writing to the same file with every line tagged `[scope]`.
    pub fn scoped(&self, scope: &str) -> Self {
        let mut child = self.clone();
        child.scope = Some(Arc::from(scope));
        child
    }

    fn compose(&self, message: &str) -> String {
        match &self.scope {
            Some(scope) => format!("[{scope}] {message}"),
            None => message.to_string(),
        }
    }

    fn write_at(&self, level: LogLevel, message: &str, target: LogTarget, now: DateTime<Local>) {
        let line = self.compose(message);

        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            match level {
                LogLevel::Info => println!("{line}"),
                LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
            }
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_logging_enabled()
        {
            if let Ok(mut file) = self.file.lock() {
                let stamp = now.format("%Y-%m-%d %H:%M:%S");
                file.append(now, &format!("[{stamp}] {level:<5} {line}"));
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.write_at(LogLevel::Info, message.as_ref(), target, Local::now());
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.write_at(LogLevel::Warn, message.as_ref(), target, Local::now());
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.write_at(LogLevel::Error, message.as_ref(), target, Local::now());
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Closes any open file; the next file line opens one in `dir`.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut file) = self.file.lock() {
            *file = DailyFile::new(dir.as_ref().to_path_buf());
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.file.lock().ok().map(|file| file.dir.clone())
    }

    /// The file currently written to; `None` until the first file line.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.file
            .lock()
            .ok()
            .and_then(|file| file.open.as_ref().map(|open| open.path.clone()))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("scope", &self.scope)
            .field("log_path", &self.log_path())
            .finish()
    }
}
