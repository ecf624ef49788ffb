//! # securecheck-storage
//!
//! SQLite persistence layer for the SecureCheck analytics engine.
//! Single connection, WAL mode, forward-only migrations.
//!
//! Booleans cross this boundary exactly once: stored as `INTEGER 0/1`,
//! surfaced as `bool`. Nothing above this layer sees another encoding.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use connection::DatabaseManager;
pub use engine::StorageEngine;

use securecheck_core::errors::StorageError;

/// Helper to convert a rusqlite error into a `StorageError`.
pub(crate) fn sql_err(e: rusqlite::Error) -> StorageError {
    StorageError::sqlite(e.to_string())
}
