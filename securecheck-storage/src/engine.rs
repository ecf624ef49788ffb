//! `StorageEngine` — the workspace's single owner of the database.
//!
//! Implements the `StopStore` trait from `securecheck-core`; the analysis
//! layer and the CLI only ever talk to that trait or to this engine.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use securecheck_core::config::DatabaseConfig;
use securecheck_core::errors::StorageError;
use securecheck_core::traits::StopStore;
use securecheck_core::types::stop::StopRecord;
use securecheck_core::types::summary::SummaryMetrics;
use securecheck_core::types::table::TableResult;

use crate::connection::DatabaseManager;
use crate::queries;

/// Storage engine over one `traffic_stops` database.
pub struct StorageEngine {
    db: DatabaseManager,
}

impl StorageEngine {
    /// Open a file-backed engine. Runs migrations and applies pragmas.
    pub fn open(config: &DatabaseConfig) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(config)?,
        })
    }

    /// Open an in-memory engine (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Insert one stop record (test fixtures and dataset seeding).
    pub fn insert_stop(&self, stop: &StopRecord) -> Result<i64, StorageError> {
        queries::stops::insert_stop(self.db.conn(), stop)
    }

    /// Insert a batch of stop records in one transaction.
    pub fn insert_stops(&self, stops: &[StopRecord]) -> Result<usize, StorageError> {
        queries::stops::insert_stops(self.db.conn(), stops)
    }

    /// Total number of recorded stops.
    pub fn count_stops(&self) -> Result<u64, StorageError> {
        queries::stops::count_stops(self.db.conn())
    }

    /// Import a stops dataset from a CSV file. Returns the number of rows
    /// loaded. Empty fields become NULL; booleans accept `0/1` and
    /// `true/false` in any case and are stored as `0/1`.
    pub fn import_csv(&self, path: impl AsRef<Path>) -> Result<usize, StorageError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| StorageError::Import {
            message: format!("{}: {e}", path.display()),
        })?;

        let mut stops = Vec::new();
        for (line, result) in reader.deserialize::<RawStop>().enumerate() {
            let raw = result.map_err(|e| StorageError::Import {
                message: format!("row {}: {e}", line + 1),
            })?;
            stops.push(raw.into_record(line)?);
        }

        let count = self.insert_stops(&stops)?;
        info!(count, path = %path.display(), "dataset imported");
        Ok(count)
    }
}

impl StopStore for StorageEngine {
    fn fetch_all(&self) -> Result<Vec<StopRecord>, StorageError> {
        let records = queries::stops::fetch_all_stops(self.db.conn())?;
        debug!(count = records.len(), "fetched reference dataset");
        Ok(records)
    }

    fn distinct_stop_durations(&self) -> Result<Vec<String>, StorageError> {
        queries::stops::distinct_stop_durations(self.db.conn())
    }

    fn summary(&self) -> Result<SummaryMetrics, StorageError> {
        queries::summary::summary_metrics(self.db.conn())
    }

    fn table(&self, sql: &str) -> Result<TableResult, StorageError> {
        queries::table::run_table_query(self.db.conn(), sql)
    }
}

/// A CSV row as it appears in the published dataset: every field optional,
/// numbers sometimes written as floats, booleans in several spellings.
#[derive(Debug, Deserialize)]
struct RawStop {
    #[serde(default)]
    stop_date: Option<String>,
    #[serde(default)]
    stop_time: Option<String>,
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default)]
    driver_gender: Option<String>,
    #[serde(default)]
    driver_age: Option<String>,
    #[serde(default)]
    driver_race: Option<String>,
    #[serde(default)]
    violation: Option<String>,
    #[serde(default)]
    search_conducted: Option<String>,
    #[serde(default)]
    search_type: Option<String>,
    #[serde(default)]
    stop_duration: Option<String>,
    #[serde(default)]
    drugs_related_stop: Option<String>,
    #[serde(default)]
    stop_outcome: Option<String>,
    #[serde(default)]
    is_arrested: Option<String>,
    #[serde(default)]
    vehicle_number: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

impl RawStop {
    fn into_record(self, line: usize) -> Result<StopRecord, StorageError> {
        Ok(StopRecord {
            id: 0,
            stop_date: clean(self.stop_date),
            stop_time: clean(self.stop_time),
            country_name: clean(self.country_name),
            driver_gender: clean(self.driver_gender),
            driver_age: parse_age(clean(self.driver_age), line)?,
            driver_race: clean(self.driver_race),
            violation: clean(self.violation),
            search_conducted: parse_bool(clean(self.search_conducted), line)?,
            search_type: clean(self.search_type),
            stop_duration: clean(self.stop_duration),
            drugs_related_stop: parse_bool(clean(self.drugs_related_stop), line)?,
            stop_outcome: clean(self.stop_outcome),
            is_arrested: parse_bool(clean(self.is_arrested), line)?,
            vehicle_number: clean(self.vehicle_number),
            timestamp: clean(self.timestamp),
        })
    }
}

fn clean(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_age(field: Option<String>, line: usize) -> Result<Option<i64>, StorageError> {
    match field {
        None => Ok(None),
        // Some exports write ages as floats ("27.0").
        Some(s) => s
            .parse::<f64>()
            .map(|v| Some(v as i64))
            .map_err(|_| StorageError::Import {
                message: format!("row {}: unreadable driver_age {s:?}", line + 1),
            }),
    }
}

fn parse_bool(field: Option<String>, line: usize) -> Result<bool, StorageError> {
    let Some(s) = field else { return Ok(false) };
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(StorageError::Import {
            message: format!("row {}: unreadable boolean {s:?}", line + 1),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_blank_fields() {
        assert_eq!(clean(Some("  ".into())), None);
        assert_eq!(clean(Some(" M ".into())), Some("M".into()));
        assert_eq!(clean(None), None);
    }

    #[test]
    fn parse_bool_accepts_both_encodings() {
        assert!(parse_bool(Some("1".into()), 0).unwrap());
        assert!(parse_bool(Some("TRUE".into()), 0).unwrap());
        assert!(!parse_bool(Some("0".into()), 0).unwrap());
        assert!(!parse_bool(Some("false".into()), 0).unwrap());
        assert!(!parse_bool(None, 0).unwrap());
        assert!(parse_bool(Some("yes".into()), 0).is_err());
    }

    #[test]
    fn parse_age_handles_float_exports() {
        assert_eq!(parse_age(Some("27.0".into()), 0).unwrap(), Some(27));
        assert_eq!(parse_age(Some("41".into()), 0).unwrap(), Some(41));
        assert_eq!(parse_age(None, 0).unwrap(), None);
        assert!(parse_age(Some("unknown".into()), 0).is_err());
    }
}
