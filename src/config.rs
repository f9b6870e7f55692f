// src/config.rs
//
// Where the two tables live and which backend holds them.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::repositories::{CsvRecordStore, RecordStore, SqliteRecordStore, DATABASE_FILE};

pub const DATA_DIR_ENV: &str = "COURTBOOK_DATA_DIR";
pub const BACKEND_ENV: &str = "COURTBOOK_BACKEND";

const APP_DIR: &str = "courtbook";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `players.csv` and `matches.csv`
    #[default]
    Csv,

    /// Both tables in `courtbook.db`
    Sqlite,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Csv => write!(f, "csv"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(StorageBackend::Csv),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(AppError::Other(format!(
                "Unknown storage backend '{}' (expected csv or sqlite)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: StorageBackend::default(),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: PathBuf, backend: StorageBackend) -> Self {
        Self { data_dir, backend }
    }

    /// Defaults overridden by `COURTBOOK_DATA_DIR` and `COURTBOOK_BACKEND`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable source.
    /// An unrecognised backend name is ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(BACKEND_ENV) {
            match raw.parse() {
                Ok(backend) => config.backend = backend,
                Err(e) => warn!("Ignoring {}: {}", BACKEND_ENV, e),
            }
        }

        config
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn with_backend(mut self, backend: Option<StorageBackend>) -> Self {
        if let Some(backend) = backend {
            self.backend = backend;
        }
        self
    }

    pub fn open_store(&self) -> AppResult<Arc<dyn RecordStore>> {
        debug!(
            "Opening {} store in {}",
            self.backend,
            self.data_dir.display()
        );
        let store: Arc<dyn RecordStore> = match self.backend {
            StorageBackend::Csv => Arc::new(CsvRecordStore::new(&self.data_dir)),
            StorageBackend::Sqlite => {
                Arc::new(SqliteRecordStore::open(&self.data_dir.join(DATABASE_FILE))?)
            }
        };
        Ok(store)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}
