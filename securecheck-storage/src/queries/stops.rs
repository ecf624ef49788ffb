//! Row-level queries against `traffic_stops`.

use rusqlite::{params, Connection, Row};

use securecheck_core::errors::StorageError;
use securecheck_core::types::stop::StopRecord;

use crate::sql_err;

const STOP_COLUMNS: &str = "id, stop_date, stop_time, country_name, driver_gender, driver_age,
     driver_race, violation, search_conducted, search_type, stop_duration,
     drugs_related_stop, stop_outcome, is_arrested, vehicle_number, timestamp";

fn row_to_stop(row: &Row<'_>) -> rusqlite::Result<StopRecord> {
    Ok(StopRecord {
        id: row.get(0)?,
        stop_date: row.get(1)?,
        stop_time: row.get(2)?,
        country_name: row.get(3)?,
        driver_gender: row.get(4)?,
        driver_age: row.get(5)?,
        driver_race: row.get(6)?,
        violation: row.get(7)?,
        search_conducted: row.get::<_, i64>(8)? != 0,
        search_type: row.get(9)?,
        stop_duration: row.get(10)?,
        drugs_related_stop: row.get::<_, i64>(11)? != 0,
        stop_outcome: row.get(12)?,
        is_arrested: row.get::<_, i64>(13)? != 0,
        vehicle_number: row.get(14)?,
        timestamp: row.get(15)?,
    })
}

/// Every historical stop, in insertion order.
pub fn fetch_all_stops(conn: &Connection) -> Result<Vec<StopRecord>, StorageError> {
    let sql = format!("SELECT {STOP_COLUMNS} FROM traffic_stops ORDER BY id");
    let mut stmt = conn.prepare_cached(&sql).map_err(sql_err)?;
    let rows = stmt
        .query_map([], row_to_stop)
        .map_err(sql_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(sql_err)?;
    Ok(rows)
}

/// Insert a single stop. The record's `id` is ignored; the assigned rowid is
/// returned.
pub fn insert_stop(conn: &Connection, stop: &StopRecord) -> Result<i64, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO traffic_stops
             (stop_date, stop_time, country_name, driver_gender, driver_age,
              driver_race, violation, search_conducted, search_type, stop_duration,
              drugs_related_stop, stop_outcome, is_arrested, vehicle_number, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        )
        .map_err(sql_err)?;
    stmt.execute(params![
        stop.stop_date,
        stop.stop_time,
        stop.country_name,
        stop.driver_gender,
        stop.driver_age,
        stop.driver_race,
        stop.violation,
        stop.search_conducted as i64,
        stop.search_type,
        stop.stop_duration,
        stop.drugs_related_stop as i64,
        stop.stop_outcome,
        stop.is_arrested as i64,
        stop.vehicle_number,
        stop.timestamp,
    ])
    .map_err(sql_err)?;
    Ok(conn.last_insert_rowid())
}

/// Insert a batch of stops in a single transaction.
pub fn insert_stops(conn: &Connection, stops: &[StopRecord]) -> Result<usize, StorageError> {
    conn.execute_batch("BEGIN IMMEDIATE").map_err(sql_err)?;
    for stop in stops {
        if let Err(e) = insert_stop(conn, stop) {
            let _ = conn.execute_batch("ROLLBACK");
            return Err(e);
        }
    }
    conn.execute_batch("COMMIT").map_err(sql_err)?;
    Ok(stops.len())
}

/// Distinct non-null stop duration labels, in first-seen order.
pub fn distinct_stop_durations(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT stop_duration FROM traffic_stops
             WHERE stop_duration IS NOT NULL
             GROUP BY stop_duration
             ORDER BY MIN(id)",
        )
        .map_err(sql_err)?;
    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(sql_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(sql_err)?;
    Ok(rows)
}

/// Total number of recorded stops.
pub fn count_stops(conn: &Connection) -> Result<u64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM traffic_stops", [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|n| n as u64)
    .map_err(sql_err)
}
