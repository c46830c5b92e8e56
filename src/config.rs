//! File locations used by the meter.

use std::path::PathBuf;

use crate::history::HistoryStore;

pub const HISTORY_PATH_ENV: &str = "PWD_HISTORY_PATH";
pub const EXPORT_PATH_ENV: &str = "PWD_EXPORT_PATH";

pub const DEFAULT_HISTORY_PATH: &str = "password_history.csv";
pub const DEFAULT_EXPORT_PATH: &str = "password_history.xlsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub history_path: PathBuf,
    pub export_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// Priority:
    /// 1. Environment variables `PWD_HISTORY_PATH` / `PWD_EXPORT_PATH`
    /// 2. Defaults `./password_history.csv` / `./password_history.xlsx`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            history_path: env_path(HISTORY_PATH_ENV).unwrap_or(defaults.history_path),
            export_path: env_path(EXPORT_PATH_ENV).unwrap_or(defaults.export_path),
        }
    }

    /// Opens a handle on the configured history file.
    pub fn history_store(&self) -> HistoryStore {
        HistoryStore::new(self.history_path.clone())
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
