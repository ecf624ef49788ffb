//! The tabular data-fetch capability consumed by the analysis layer.

use crate::errors::StorageError;
use crate::types::stop::StopRecord;
use crate::types::summary::SummaryMetrics;
use crate::types::table::TableResult;

/// Read access to the historical `traffic_stops` dataset.
///
/// Implemented by the storage engine; the estimator and the insight
/// registry only ever see this trait. The estimator fetches a fresh
/// reference set per call and holds nothing between calls.
pub trait StopStore {
    /// Every historical stop, in insertion order.
    fn fetch_all(&self) -> Result<Vec<StopRecord>, StorageError>;

    /// Distinct non-null `stop_duration` labels, in first-seen order.
    /// The log form offers exactly these as choices.
    fn distinct_stop_durations(&self) -> Result<Vec<String>, StorageError>;

    /// Dashboard headline counters.
    fn summary(&self) -> Result<SummaryMetrics, StorageError>;

    /// Run a registry SELECT and capture its output shape dynamically.
    fn table(&self, sql: &str) -> Result<TableResult, StorageError>;
}
