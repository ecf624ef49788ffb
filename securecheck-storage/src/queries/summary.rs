//! Dashboard headline counters.

use rusqlite::Connection;

use securecheck_core::errors::StorageError;
use securecheck_core::types::summary::SummaryMetrics;

use crate::sql_err;

/// Compute the four dashboard metrics in one pass over the table.
///
/// Arrests and tickets are substring matches on the outcome label
/// (`LIKE` is case-insensitive for ASCII), matching how the dashboard has
/// always counted them.
pub fn summary_metrics(conn: &Connection) -> Result<SummaryMetrics, StorageError> {
    conn.query_row(
        "SELECT
            COUNT(*),
            COALESCE(SUM(search_conducted), 0),
            COALESCE(SUM(CASE WHEN stop_outcome LIKE '%arrest%' THEN 1 ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN stop_outcome LIKE '%ticket%' THEN 1 ELSE 0 END), 0)
         FROM traffic_stops",
        [],
        |row| {
            Ok(SummaryMetrics {
                total_stops: row.get::<_, i64>(0)? as u64,
                searches_conducted: row.get::<_, i64>(1)? as u64,
                arrests: row.get::<_, i64>(2)? as u64,
                tickets_issued: row.get::<_, i64>(3)? as u64,
            })
        },
    )
    .map_err(sql_err)
}
