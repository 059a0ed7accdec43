//! Deduplicating sink factory

use super::{ConsoleSink, FileSink};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::{Arc, OnceLock};

static GLOBAL_FACTORY: OnceLock<Arc<SinkFactory>> = OnceLock::new();

/// Hands out sinks so that each destination has exactly one live instance.
///
/// Requesting the same file twice, directly or through different spellings
/// that resolve to the same path, returns the same [`FileSink`] and therefore
/// the same open handle.
///
/// # Examples
///
/// ```
/// use rust_named_logger::sinks::SinkFactory;
/// use std::sync::Arc;
///
/// let dir = std::env::temp_dir();
/// let factory = SinkFactory::with_default_dir(&dir);
/// let a = factory.file("factory_doc.log");
/// let b = factory.file(dir.join("factory_doc.log").to_str().unwrap());
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct SinkFactory {
    default_dir: Option<PathBuf>,
    files: Mutex<HashMap<PathBuf, Arc<FileSink>>>,
}

impl SinkFactory {
    /// Factory resolving bare file names against the platform documents directory
    pub fn new() -> Self {
        Self {
            default_dir: None,
            files: Mutex::new(HashMap::new()),
        }
    }

    /// Factory resolving bare file names against `dir`
    pub fn with_default_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            default_dir: Some(normalize(&absolute(dir.as_ref()))),
            files: Mutex::new(HashMap::new()),
        }
    }

    /// The factory shared by every registry that was not given its own
    pub fn global() -> Arc<SinkFactory> {
        Arc::clone(GLOBAL_FACTORY.get_or_init(|| Arc::new(SinkFactory::new())))
    }

    pub fn console(&self) -> Arc<ConsoleSink> {
        ConsoleSink::instance()
    }

    /// The file sink for `filename`, opening it on first request
    pub fn file(&self, filename: &str) -> Arc<FileSink> {
        let path = self.resolve_path(filename);
        let mut files = self.files.lock();
        Arc::clone(
            files
                .entry(path)
                .or_insert_with_key(|path| Arc::new(FileSink::open(path.clone()))),
        )
    }

    /// Every file sink handed out so far
    pub fn file_sinks(&self) -> Vec<Arc<FileSink>> {
        self.files.lock().values().cloned().collect()
    }

    /// Resolve a configured file name to the normalized path used as cache key.
    ///
    /// A name containing a path separator is used as given, with a leading
    /// `~/` expanded to the home directory. A bare name is placed in the
    /// default directory. Symlinks and `..` are resolved so that every
    /// spelling of one file yields the same key.
    pub fn resolve_path(&self, filename: &str) -> PathBuf {
        if filename.contains('/') || filename.contains(MAIN_SEPARATOR) {
            let expanded = if filename.starts_with("~/") {
                shellexpand::tilde(filename).into_owned()
            } else {
                filename.to_string()
            };
            return normalize(&absolute(Path::new(&expanded)));
        }

        normalize(&self.default_dir().join(filename))
    }

    /// Directory bare file names are resolved against
    pub fn default_dir(&self) -> PathBuf {
        match &self.default_dir {
            Some(dir) => dir.clone(),
            None => platform_default_dir(),
        }
    }
}

impl Default for SinkFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_default_dir() -> PathBuf {
    let dir = directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .or_else(|| directories::BaseDirs::new().map(|dirs| dirs.data_local_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    absolute(&dir)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Canonicalize the longest existing prefix of an absolute path and apply
/// the remaining components lexically.
///
/// Directories created later by [`FileSink`] are real directories, so a path
/// normalized before the file exists keeps matching afterwards.
fn normalize(path: &Path) -> PathBuf {
    let mut base = path.to_path_buf();
    let mut tail = Vec::new();

    let mut resolved = loop {
        if let Ok(canonical) = fs::canonicalize(&base) {
            break canonical;
        }
        match base.components().next_back() {
            Some(last) => tail.push(last.as_os_str().to_os_string()),
            None => return path.to_path_buf(),
        }
        if !base.pop() {
            return path.to_path_buf();
        }
    };

    for part in tail.iter().rev() {
        if part.as_os_str() == ".." {
            resolved.pop();
        } else if part.as_os_str() != "." {
            resolved.push(part);
        }
    }
    resolved
}
