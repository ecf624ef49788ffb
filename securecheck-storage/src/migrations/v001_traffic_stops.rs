//! v001 — the `traffic_stops` table and its lookup indexes.

use rusqlite::Connection;

use securecheck_core::errors::StorageError;

use crate::sql_err;

pub fn migrate(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "CREATE TABLE traffic_stops (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            stop_date TEXT,
            stop_time TEXT,
            country_name TEXT,
            driver_gender TEXT,
            driver_age INTEGER,
            driver_race TEXT,
            violation TEXT,
            search_conducted INTEGER NOT NULL DEFAULT 0,
            search_type TEXT,
            stop_duration TEXT,
            drugs_related_stop INTEGER NOT NULL DEFAULT 0,
            stop_outcome TEXT,
            is_arrested INTEGER NOT NULL DEFAULT 0,
            vehicle_number TEXT,
            timestamp TEXT
        );

        CREATE INDEX idx_traffic_stops_driver_age ON traffic_stops (driver_age);
        CREATE INDEX idx_traffic_stops_violation ON traffic_stops (violation);",
    )
    .map_err(sql_err)
}
