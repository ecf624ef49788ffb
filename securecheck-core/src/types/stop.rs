//! Historical stop records and the driver gender domain.

use serde::{Deserialize, Serialize};

use crate::errors::EstimateError;

/// Driver gender as collected by the log form.
///
/// This is the only way form input becomes a gender value — `parse` accepts
/// exactly the two literals the form offers and rejects everything else, so
/// code downstream of it never sees an unvalidated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the form literal ("Male" or "Female", case-sensitive).
    pub fn parse(literal: &str) -> Result<Self, EstimateError> {
        match literal {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(EstimateError::InvalidGender {
                literal: other.to_string(),
            }),
        }
    }

    /// Single-letter code used by the historical dataset.
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// The form literal, for narrative output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// One row of the `traffic_stops` table.
///
/// Matching columns are `Option` — a record missing any of them is never
/// considered by the estimator. The remaining columns are carried for the
/// dashboard and insight queries and ignored during matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub id: i64,
    pub stop_date: Option<String>,
    pub stop_time: Option<String>,
    pub country_name: Option<String>,
    /// Free-form in the dataset ("M"/"F", any case); compared case-insensitively.
    pub driver_gender: Option<String>,
    pub driver_age: Option<i64>,
    pub driver_race: Option<String>,
    pub violation: Option<String>,
    pub search_conducted: bool,
    pub search_type: Option<String>,
    /// Categorical label such as "0-15 Min"; compared case-insensitively.
    pub stop_duration: Option<String>,
    pub drugs_related_stop: bool,
    pub stop_outcome: Option<String>,
    pub is_arrested: bool,
    pub vehicle_number: Option<String>,
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_form_literals() {
        assert_eq!(Gender::parse("Male").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("Female").unwrap(), Gender::Female);
    }

    #[test]
    fn parse_rejects_everything_else() {
        for bad in ["male", "FEMALE", "M", "F", "", "Other"] {
            assert!(Gender::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn code_maps_to_dataset_letters() {
        assert_eq!(Gender::Male.code(), "M");
        assert_eq!(Gender::Female.code(), "F");
    }
}
