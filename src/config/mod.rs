//! Configuration documents
//!
//! A document is a flat key/value file, TOML by default or JSON when the file
//! ends in `.json`:
//!
//! ```toml
//! # root scope
//! level = "INFO"
//! quick_format = "LevelNameMessage"
//! location = "console file"
//! location_filename = "~/logs/app.log"
//!
//! # selector rules
//! enable = "Net,Db"
//! disable = ""
//!
//! # one table per named logger
//! [Net]
//! level = "WARN"
//! flex_format = "DATE NAME LEVEL MESSAGE"
//! date_format = "HH:mm:ss"
//! ```

mod scope;

pub use scope::ScopeConfig;

use crate::core::{LoggerError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the document to load
pub const CONFIG_ENV_VAR: &str = "RUST_NAMED_LOGGER_CONFIG";

/// File name searched for in the working and config directories
pub const CONFIG_FILE_NAME: &str = "named_logger.toml";

/// A parsed configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Values given at the top level
    pub root: ScopeConfig,
    /// Comma separated names of loggers to enable
    pub enable: Option<String>,
    /// Comma separated names of loggers to disable
    pub disable: Option<String>,
    /// One scope per named logger
    pub loggers: BTreeMap<String, ScopeConfig>,
}

/// Any top-level value; tables that do not fit a scope are ignored.
///
/// `List` must come before `Scope`: a struct also deserializes from a sequence.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Text(String),
    #[allow(dead_code)]
    List(Vec<serde::de::IgnoredAny>),
    Scope(ScopeConfig),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

impl LoggingConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let entries: BTreeMap<String, Entry> = toml::from_str(content)?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let entries: BTreeMap<String, Entry> = serde_json::from_str(content)?;
        Ok(Self::from_entries(entries))
    }

    /// Read a document, choosing the syntax from the file extension
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading configuration", path.display().to_string(), e)
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            None | Some("toml") | Some("conf") => Self::from_toml_str(&content),
            Some(_) => Err(LoggerError::UnsupportedConfigFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Where the default registry looks for its document.
    ///
    /// In order: the path in [`CONFIG_ENV_VAR`], [`CONFIG_FILE_NAME`] in the
    /// working directory, then in the platform config directory. Only the
    /// environment variable is returned without checking that the file exists.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        directories::ProjectDirs::from("", "", "rust_named_logger")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }

    fn from_entries(entries: BTreeMap<String, Entry>) -> Self {
        let mut config = Self::default();

        for (key, entry) in entries {
            match entry {
                Entry::Text(value) => {
                    let slot = match key.as_str() {
                        "level" => &mut config.root.level,
                        "quick_format" => &mut config.root.quick_format,
                        "flex_format" => &mut config.root.flex_format,
                        "date_format" => &mut config.root.date_format,
                        "location" => &mut config.root.location,
                        "location_filename" => &mut config.root.location_filename,
                        "enable" => &mut config.enable,
                        "disable" => &mut config.disable,
                        _ => continue,
                    };
                    *slot = Some(value);
                }
                Entry::Scope(scope) => {
                    config.loggers.insert(key, scope);
                }
                Entry::List(_) | Entry::Other(_) => {}
            }
        }

        config
    }
}
