//! Outcome estimation by historical precedent.
//!
//! Filters the reference dataset down to stops matching the new stop's
//! attribute key, then takes the mode of the prior outcomes and violations.
//! There is no model here and no partial matching: all five predicates are
//! conjunctive, and an empty match falls back to fixed defaults.

pub mod narrative;

use securecheck_core::errors::EstimateError;
use securecheck_core::types::query::{EstimationResult, StopQuery};
use securecheck_core::types::stop::{Gender, StopRecord};
use securecheck_core::FxHashMap;

/// Outcome returned when no historical stop matches.
pub const DEFAULT_OUTCOME: &str = "warning";
/// Violation returned when no historical stop matches.
pub const DEFAULT_VIOLATION: &str = "speeding";

/// Estimate the likely outcome and violation of a new stop.
///
/// Matching is case-insensitive on gender and duration, exact on age and
/// the two boolean flags. Records missing any matching column are skipped.
/// Fails only on a gender literal outside {"Male", "Female"}.
///
/// Pure: the reference slice is never mutated, and identical inputs always
/// produce identical results.
pub fn estimate(
    query: &StopQuery,
    reference: &[StopRecord],
) -> Result<EstimationResult, EstimateError> {
    let gender_code = Gender::parse(&query.driver_gender)?.code();

    let matched: Vec<&StopRecord> = reference
        .iter()
        .filter(|record| matches_key(record, gender_code, query))
        .collect();

    if matched.is_empty() {
        return Ok(EstimationResult {
            outcome: DEFAULT_OUTCOME.to_string(),
            violation: DEFAULT_VIOLATION.to_string(),
        });
    }

    let outcome = mode(matched.iter().filter_map(|r| r.stop_outcome.as_deref()))
        .unwrap_or(DEFAULT_OUTCOME);
    let violation = mode(matched.iter().filter_map(|r| r.violation.as_deref()))
        .unwrap_or(DEFAULT_VIOLATION);

    Ok(EstimationResult {
        outcome: outcome.to_string(),
        violation: violation.to_string(),
    })
}

/// All five predicates must hold; a NULL in any matching column excludes
/// the record outright.
fn matches_key(record: &StopRecord, gender_code: &str, query: &StopQuery) -> bool {
    let (Some(gender), Some(age), Some(duration)) = (
        record.driver_gender.as_deref(),
        record.driver_age,
        record.stop_duration.as_deref(),
    ) else {
        return false;
    };

    gender.eq_ignore_ascii_case(gender_code)
        && age == query.driver_age
        && record.search_conducted == query.search_conducted
        && duration.eq_ignore_ascii_case(&query.stop_duration)
        && record.drugs_related_stop == query.drugs_related_stop
}

/// Most frequent value. Ties break to the lexicographically smallest, so
/// the result is deterministic regardless of record order.
fn mode<'a>(values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        gender: &str,
        age: i64,
        searched: bool,
        duration: &str,
        drugs: bool,
        outcome: &str,
        violation: &str,
    ) -> StopRecord {
        StopRecord {
            id: 0,
            stop_date: None,
            stop_time: None,
            country_name: None,
            driver_gender: Some(gender.to_string()),
            driver_age: Some(age),
            driver_race: None,
            violation: Some(violation.to_string()),
            search_conducted: searched,
            search_type: None,
            stop_duration: Some(duration.to_string()),
            drugs_related_stop: drugs,
            stop_outcome: Some(outcome.to_string()),
            is_arrested: false,
            vehicle_number: None,
            timestamp: None,
        }
    }

    fn query(gender: &str, age: i64, searched: bool, duration: &str, drugs: bool) -> StopQuery {
        StopQuery {
            driver_gender: gender.to_string(),
            driver_age: age,
            search_conducted: searched,
            stop_duration: duration.to_string(),
            drugs_related_stop: drugs,
            stop_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            county_name: "Norfolk".to_string(),
            search_type: None,
            vehicle_number: "KA01AB1234".to_string(),
        }
    }

    #[test]
    fn single_match_case_insensitive_duration() {
        let reference = vec![record("M", 27, false, "0-15 Min", false, "Citation", "Speeding")];
        let result = estimate(&query("Male", 27, false, "0-15 min", false), &reference).unwrap();
        assert_eq!(result.outcome, "Citation");
        assert_eq!(result.violation, "Speeding");
    }

    #[test]
    fn empty_reference_falls_back_to_defaults() {
        let result = estimate(&query("Female", 40, true, "30+ Min", true), &[]).unwrap();
        assert_eq!(result.outcome, DEFAULT_OUTCOME);
        assert_eq!(result.violation, DEFAULT_VIOLATION);
    }

    #[test]
    fn no_match_falls_back_to_defaults() {
        let reference = vec![record("F", 40, false, "0-15 Min", false, "Warning", "Seatbelt")];
        // Same key except the age.
        let result = estimate(&query("Female", 41, false, "0-15 Min", false), &reference).unwrap();
        assert_eq!(result.outcome, "warning");
        assert_eq!(result.violation, "speeding");
    }

    #[test]
    fn strict_majority_wins() {
        let reference = vec![
            record("M", 27, false, "0-15 Min", false, "Warning", "Speeding"),
            record("M", 27, false, "0-15 Min", false, "Warning", "Speeding"),
            record("M", 27, false, "0-15 Min", false, "Arrest", "DUI"),
        ];
        let result = estimate(&query("Male", 27, false, "0-15 Min", false), &reference).unwrap();
        assert_eq!(result.outcome, "Warning");
    }

    #[test]
    fn tie_breaks_lexicographically() {
        let reference = vec![
            record("M", 27, false, "0-15 Min", false, "Warning", "Speeding"),
            record("M", 27, false, "0-15 Min", false, "Arrest", "DUI"),
        ];
        let result = estimate(&query("Male", 27, false, "0-15 Min", false), &reference).unwrap();
        assert_eq!(result.outcome, "Arrest");
        assert_eq!(result.violation, "DUI");
    }

    #[test]
    fn all_five_predicates_are_conjunctive() {
        let base = record("M", 27, false, "0-15 Min", false, "Citation", "Speeding");
        let q = query("Male", 27, false, "0-15 Min", false);

        let mutations: Vec<StopRecord> = vec![
            StopRecord { driver_gender: Some("F".into()), ..base.clone() },
            StopRecord { driver_age: Some(28), ..base.clone() },
            StopRecord { search_conducted: true, ..base.clone() },
            StopRecord { stop_duration: Some("16-30 Min".into()), ..base.clone() },
            StopRecord { drugs_related_stop: true, ..base.clone() },
        ];
        for mutated in &mutations {
            let result = estimate(&q, std::slice::from_ref(mutated)).unwrap();
            assert_eq!(result.outcome, DEFAULT_OUTCOME, "{mutated:?} should not match");
        }

        let result = estimate(&q, &[base]).unwrap();
        assert_eq!(result.outcome, "Citation");
    }

    #[test]
    fn records_with_null_key_columns_never_match() {
        let mut missing_gender = record("M", 27, false, "0-15 Min", false, "Citation", "Speeding");
        missing_gender.driver_gender = None;
        let mut missing_age = record("M", 27, false, "0-15 Min", false, "Citation", "Speeding");
        missing_age.driver_age = None;
        let mut missing_duration = record("M", 27, false, "0-15 Min", false, "Citation", "Speeding");
        missing_duration.stop_duration = None;

        let reference = vec![missing_gender, missing_age, missing_duration];
        let result = estimate(&query("Male", 27, false, "0-15 Min", false), &reference).unwrap();
        assert_eq!(result.outcome, DEFAULT_OUTCOME);
    }

    #[test]
    fn null_targets_are_skipped_by_the_mode() {
        let mut no_outcome = record("M", 27, false, "0-15 Min", false, "ignored", "Speeding");
        no_outcome.stop_outcome = None;
        let with_outcome = record("M", 27, false, "0-15 Min", false, "Citation", "Speeding");

        let result = estimate(
            &query("Male", 27, false, "0-15 Min", false),
            &[no_outcome, with_outcome],
        )
        .unwrap();
        assert_eq!(result.outcome, "Citation");
    }

    #[test]
    fn invalid_gender_is_rejected() {
        let err = estimate(&query("male", 27, false, "0-15 Min", false), &[]).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidGender { .. }));
    }

    #[test]
    fn reference_is_not_mutated_and_results_are_stable() {
        let reference = vec![
            record("m", 27, false, "0-15 MIN", false, "Citation", "Speeding"),
            record("M", 27, false, "0-15 Min", false, "Citation", "Speeding"),
        ];
        let before = reference.clone();
        let q = query("Male", 27, false, "0-15 min", false);

        let first = estimate(&q, &reference).unwrap();
        let second = estimate(&q, &reference).unwrap();

        assert_eq!(first, second);
        assert_eq!(reference, before);
    }
}
