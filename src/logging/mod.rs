
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum LogLevel {
    #[strum(serialize = "INFO")]
    Info,
    #[strum(serialize = "WARN")]
    Warn,
    #[strum(serialize = "ERROR")]
    Error,
}

/// Where a line goes. The session file only sees lines that target it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }

    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

/// The append-only file for one shell session.
struct SessionFile {
    path: PathBuf,
    file: File,
}

impl SessionFile {
    fn create(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("timetable-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    fn append(&mut self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(self.file, "[{timestamp}] {level:<5} {message}");
    }
}

/// The file is opened lazily; a failed open is reported once and not retried.
enum FileSlot {
    Unopened(PathBuf),
    Open(SessionFile),
    Unavailable(PathBuf),
}

impl FileSlot {
    fn dir(&self) -> PathBuf {
        match self {
            FileSlot::Unopened(dir) | FileSlot::Unavailable(dir) => dir.clone(),
            FileSlot::Open(session) => session
                .path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    fn open(&mut self) -> Option<&mut SessionFile> {
        if let FileSlot::Unopened(dir) = self {
            *self = match SessionFile::create(dir) {
                Ok(session) => FileSlot::Open(session),
                Err(err) => {
                    eprintln!(
                        "WARN: File logging unavailable; continuing without a log file. ({err})"
                    );
                    FileSlot::Unavailable(dir.clone())
                }
            };
        }
        match self {
            FileSlot::Open(session) => Some(session),
            _ => None,
        }
    }
}

/// Shell logger. INFO prints to stdout, WARN and ERROR to stderr, and
/// file-targeted lines land in one timestamped file per session.
/// Clones share the same file and switches.
#[derive(Clone)]
pub struct Logger {
    slot: Arc<Mutex<FileSlot>>,
    file_enabled: Arc<AtomicBool>,
    console_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(FileSlot::Unopened(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
            console_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Prints nothing; file lines are still written.
    pub fn quiet() -> Self {
        let logger = Self::new();
        logger.set_console_enabled(false);
        logger
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() && self.console_enabled.load(Ordering::SeqCst) {
            match level {
                LogLevel::Info => println!("{message}"),
                LogLevel::Warn | LogLevel::Error => eprintln!("{message}"),
            }
        }
        if target.file() && self.file_enabled.load(Ordering::SeqCst) {
            if let Ok(mut slot) = self.slot.lock() {
                if let Some(session) = slot.open() {
                    session.append(level, message);
                }
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    pub fn set_console_enabled(&self, enabled: bool) {
        self.console_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Ignored once the session file is open.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut slot) = self.slot.lock() {
            if let FileSlot::Unopened(current) = &mut *slot {
                *current = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.slot.lock().ok().map(|slot| slot.dir())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        let slot = self.slot.lock().ok()?;
        match &*slot {
            FileSlot::Open(session) => Some(session.path.clone()),
            _ => None,
        }
    }

    /// Lines written to this session's file so far. Empty before the first one.
    pub fn session_lines(&self) -> io::Result<Vec<String>> {
        match self.log_path() {
            Some(path) => Ok(fs::read_to_string(path)?
                .lines()
                .map(str::to_string)
                .collect()),
            None => Ok(Vec::new()),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
