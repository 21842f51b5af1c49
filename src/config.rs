//! Runtime configuration: environment defaults, overridden by command-line flags.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::SAVE_EXTENSION;

pub const DEFAULT_SAVE_DIR: &str = "Saved Games";
pub const DEFAULT_SAVE_NAME: &str = "game";
pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.dat";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding save files
    pub save_dir: PathBuf,
    /// File name of the default save, with or without the extension
    pub save_name: String,
    pub highscore_path: PathBuf,
    /// Tracing output file; `None` disables logging
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            save_name: DEFAULT_SAVE_NAME.to_string(),
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Create from `TUI_2048_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        Self {
            save_dir: non_empty("TUI_2048_SAVE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.save_dir),
            save_name: non_empty("TUI_2048_SAVE_NAME").unwrap_or(defaults.save_name),
            highscore_path: non_empty("TUI_2048_HIGHSCORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.highscore_path),
            log_path: non_empty("TUI_2048_LOG_PATH").map(PathBuf::from),
            log_filter: non_empty("TUI_2048_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// Full path of the default save file.
    pub fn save_path(&self) -> PathBuf {
        with_save_extension(&self.save_dir.join(&self.save_name))
    }

    /// Create the save directory if it does not exist yet.
    pub fn ensure_save_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.save_dir)
    }
}

/// Append `.2048` unless the path already ends with it.
pub fn with_save_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == SAVE_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(SAVE_EXTENSION);
    PathBuf::from(name)
}
