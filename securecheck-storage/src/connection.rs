//! Connection manager — open, pragmas, migrations.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use securecheck_core::config::DatabaseConfig;
use securecheck_core::errors::StorageError;

use crate::migrations;
use crate::sql_err;

/// Owns the SQLite connection for one database file.
///
/// Opening applies pragmas and brings the schema up to date, so a
/// `DatabaseManager` always wraps a ready-to-query connection.
pub struct DatabaseManager {
    conn: Connection,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open (or create) the database described by `config`.
    pub fn open(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let conn = Connection::open(&config.path).map_err(sql_err)?;
        Self::configure(&conn, config)?;
        migrations::run_migrations(&conn)?;
        debug!(path = %config.path.display(), "database opened");
        Ok(Self {
            conn,
            path: Some(config.path.clone()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sql_err)?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(sql_err)?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn, path: None })
    }

    fn configure(conn: &Connection, config: &DatabaseConfig) -> Result<(), StorageError> {
        if config.wal {
            conn.pragma_update(None, "journal_mode", "WAL")
                .map_err(sql_err)?;
        }
        conn.pragma_update(None, "busy_timeout", config.busy_timeout_ms)
            .map_err(sql_err)?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(sql_err)?;
        Ok(())
    }

    /// The underlying connection. Query modules borrow it; nothing else
    /// holds a raw `Connection`.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
