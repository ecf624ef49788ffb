//! The not-yet-recorded stop being evaluated, and the estimation output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A new stop as entered in the add-log form.
///
/// The first five fields are the matching key the estimator filters on;
/// the rest only feed the narrative summary. `driver_gender` is the raw
/// form literal ("Male"/"Female") — the estimator validates it, so a query
/// built from unchecked input still fails loudly instead of mismatching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopQuery {
    pub driver_gender: String,
    pub driver_age: i64,
    pub search_conducted: bool,
    pub stop_duration: String,
    pub drugs_related_stop: bool,

    pub stop_date: NaiveDate,
    pub county_name: String,
    pub search_type: Option<String>,
    pub vehicle_number: String,
}

/// Most frequent historical outcome and violation for a matching key,
/// or the fixed defaults when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub outcome: String,
    pub violation: String,
}
