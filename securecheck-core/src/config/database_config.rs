//! Database connection configuration.
//!
//! Passed to the storage engine at construction time; there is no global or
//! hardcoded connection state anywhere in the workspace.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the SQLite database holding `traffic_stops`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u64,
    /// Use WAL journal mode. Default: true.
    pub wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("securecheck.db"),
            busy_timeout_ms: 5000,
            wal: true,
        }
    }
}

impl DatabaseConfig {
    /// Config pointing at an explicit database file, other knobs default.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}
