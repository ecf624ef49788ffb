//! Migration runner — version tracking, forward-only, transactional per migration.

mod v001_traffic_stops;

use rusqlite::Connection;
use tracing::{debug, info, warn};

use securecheck_core::errors::StorageError;

use crate::sql_err;

/// Latest schema version.
pub const LATEST_VERSION: u32 = 1;

type MigrationFn = fn(&Connection) -> Result<(), StorageError>;

const MIGRATIONS: [(u32, &str, MigrationFn); 1] =
    [(1, "traffic_stops", v001_traffic_stops::migrate)];

/// Get the current schema version from the database.
/// Returns 0 if the schema_version table doesn't exist yet.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    let exists: bool = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version'")
        .and_then(|mut stmt| stmt.exists([]))
        .map_err(sql_err)?;

    if !exists {
        return Ok(0);
    }

    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(sql_err)
}

/// Run all pending migrations. Forward-only, each wrapped in a transaction.
/// Returns the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> Result<u32, StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )
    .map_err(sql_err)?;

    let current = current_version(conn)?;
    if current >= LATEST_VERSION {
        debug!("database schema is up to date (v{current})");
        return Ok(0);
    }

    info!("running migrations: v{current} -> v{LATEST_VERSION}");

    let mut applied = 0;
    for &(version, name, migrate_fn) in &MIGRATIONS {
        if version <= current {
            continue;
        }

        debug!("applying migration v{version:03}: {name}");

        conn.execute_batch("BEGIN IMMEDIATE")
            .map_err(|e| StorageError::MigrationFailed {
                version,
                message: format!("begin transaction: {e}"),
            })?;

        match migrate_fn(conn) {
            Ok(()) => {
                conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
                    .map_err(|e| StorageError::MigrationFailed {
                        version,
                        message: format!("record version: {e}"),
                    })?;
                conn.execute_batch("COMMIT")
                    .map_err(|e| StorageError::MigrationFailed {
                        version,
                        message: format!("commit: {e}"),
                    })?;
                info!("applied migration v{version:03}: {name}");
                applied += 1;
            }
            Err(e) => {
                warn!("migration v{version:03} failed: {e}, rolling back");
                let _ = conn.execute_batch("ROLLBACK");
                return Err(StorageError::MigrationFailed {
                    version,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_apply_once() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_migrations(&conn).unwrap(), 1);
        assert_eq!(current_version(&conn).unwrap(), LATEST_VERSION);
        // Idempotent on a second run.
        assert_eq!(run_migrations(&conn).unwrap(), 0);
    }
}
