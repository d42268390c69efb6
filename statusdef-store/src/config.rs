//! Store configuration, read from a TOML file.
//!
//! ```toml
//! database_path = "definitions.db"
//! default_separator = "|"
//! confirm_deletes = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use statusdef_model::DEFAULT_SEPARATOR;
use tracing::{info, warn};

use crate::error::StoreResult;
use crate::session::EditingSession;
use crate::sqlite::SqliteStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite file. In-memory when absent.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// Separator new item drafts start with.
    #[serde(default = "default_separator")]
    pub default_separator: String,
    /// Ask before deleting.
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_confirm_deletes() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            default_separator: default_separator(),
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

impl StoreConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> StoreResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file also
    /// yields the defaults, with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Opens the configured database, or an in-memory one.
    pub fn open_store(&self) -> StoreResult<SqliteStore> {
        match &self.database_path {
            Some(path) => SqliteStore::open(path),
            None => SqliteStore::open_in_memory(),
        }
    }

    /// An editing session seeded with the configured separator.
    pub fn session(&self) -> EditingSession {
        EditingSession::with_default_separator(self.default_separator.clone())
    }
}
