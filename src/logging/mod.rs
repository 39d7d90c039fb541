
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Session logger for the key viewer. Info lines (key events) go only to a
/// timestamped file under the log directory; warnings and errors also go to
/// stderr. The file is created lazily on the first write so a disabled or
/// never-used logger leaves no empty files behind.
pub struct SessionLog {
    file: Mutex<FileState>,
    file_enabled: bool,
}

struct FileState {
    sink: Option<File>,
    path: Option<PathBuf>,
    attempted: bool,
    dir: PathBuf,
}

impl SessionLog {
    pub fn new(dir: impl AsRef<Path>, file_enabled: bool) -> Self {
        Self {
            file: Mutex::new(FileState {
                sink: None,
                path: None,
                attempted: false,
                dir: dir.as_ref().to_path_buf(),
            }),
            file_enabled,
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message.as_ref());
    }

    /// Path of the session file, once one has been created.
    pub fn path(&self) -> Option<PathBuf> {
        self.file.lock().ok().and_then(|state| state.path.clone())
    }

    fn log(&self, level: LogLevel, message: &str) {
        if matches!(level, LogLevel::Warn | LogLevel::Error) {
            eprintln!("{level}: {message}");
        }
        if !self.file_enabled {
            return;
        }
        let Ok(mut state) = self.file.lock() else {
            return;
        };
        if !state.attempted {
            state.attempted = true;
            match open_session_file(&state.dir) {
                Ok((file, path)) => {
                    state.sink = Some(file);
                    state.path = Some(path);
                }
                Err(err) => {
                    eprintln!("WARN: session log unavailable, continuing without it ({err})");
                }
            }
        }
        if let Some(file) = state.sink.as_mut() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{timestamp}] {level:<5} {message}");
        }
    }
}

fn open_session_file(dir: &Path) -> std::io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("session-{stamp}-{}.log", std::process::id()));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

impl fmt::Debug for SessionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionLog")
            .field("file_enabled", &self.file_enabled)
            .field("path", &self.path())
            .finish()
    }
}
