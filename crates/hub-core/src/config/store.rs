//! Hub persistence backend selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which persistence adapter backs the hub store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// A single JSON array on local disk.
    #[default]
    File,
    /// PostgreSQL `hubs` + `blocks` tables.
    Postgres,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Hub store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: StoreBackend,
    /// Path of the JSON file used by the `file` backend.
    #[serde(default = "default_file_path")]
    pub file_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            file_path: default_file_path(),
        }
    }
}

fn default_file_path() -> String {
    "./data/hubs.json".to_string()
}
