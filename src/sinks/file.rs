//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Appends rendered lines to a file.
///
/// File sinks are handed out by [`SinkFactory`](crate::sinks::SinkFactory),
/// which keeps one instance per resolved path. Concurrent writers serialize on
/// the file handle so each message lands as one complete line.
///
/// If the file cannot be opened the sink stays inert: every write is dropped.
pub struct FileSink {
    path: PathBuf,
    enabled: AtomicBool,
    handle: Mutex<Option<File>>,
    write_failed: AtomicBool,
}

impl FileSink {
    /// Open (creating if missing) the file at an already resolved path
    pub(crate) fn open(path: PathBuf) -> Self {
        let handle = match Self::open_append(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("[LOGGER ERROR] {}", e);
                None
            }
        };

        Self {
            path,
            enabled: AtomicBool::new(true),
            handle: Mutex::new(handle),
            write_failed: AtomicBool::new(false),
        }
    }

    fn open_append(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::io_operation(
                        "creating log directory",
                        parent.display().to_string(),
                        e,
                    )
                })?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::io_operation("opening log file", path.display().to_string(), e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the sink holds a writable handle
    pub fn is_open(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Append one line, reporting what went wrong.
    ///
    /// [`Sink::write`] wraps this and swallows the error.
    pub fn try_write(&self, message: &str) -> Result<()> {
        let mut guard = self.handle.lock();
        let file = guard
            .as_mut()
            .ok_or_else(|| LoggerError::file_sink(self.path.display().to_string(), "no writable handle"))?;

        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Sink for FileSink {
    fn write(&self, message: &str) {
        if !self.is_enabled() {
            return;
        }
        if let Err(e) = self.try_write(message) {
            // Report once; an inert sink would otherwise flood stderr.
            if !self.write_failed.swap(true, Ordering::AcqRel) && self.is_open() {
                eprintln!("[LOGGER ERROR] File sink write failed: {}", e);
            }
        }
    }

    fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn describe(&self) -> String {
        format!("FileSink filename={}", self.path.display())
    }

    fn flush(&self) {
        if let Some(file) = self.handle.lock().as_mut() {
            let _ = file.flush();
            let _ = file.sync_data();
        }
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.flush();
    }
}
