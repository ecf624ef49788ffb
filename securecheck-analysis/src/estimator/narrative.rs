//! Log-entry narrative formatting.
//!
//! Pure string templating over the submitted form values; no matching
//! logic. The estimated outcome and violation are displayed separately by
//! the presentation layer, so they do not appear in the narrative itself.

use securecheck_core::types::query::StopQuery;

/// Compose the two-part log summary for a submitted stop.
///
/// The search clause only mentions a search when one was conducted *and* a
/// non-empty search type was supplied; otherwise it reads
/// "no search was conducted".
pub fn describe(query: &StopQuery) -> String {
    format!("{}\n{}", part_one(query), part_two(query))
}

fn part_one(query: &StopQuery) -> String {
    let search = match query.search_type.as_deref().map(str::trim) {
        Some(ty) if query.search_conducted && !ty.is_empty() => {
            format!("a search was conducted of type {ty}")
        }
        _ => "no search was conducted".to_string(),
    };
    let drugs = if query.drugs_related_stop {
        "was"
    } else {
        "was not"
    };

    format!(
        "On {date}, a {age}-year-old {gender} driver was stopped in {county}. \
         During the stop, {search}. The stop {drugs} drug-related.",
        date = query.stop_date.format("%B %d, %Y"),
        age = query.driver_age,
        gender = query.driver_gender,
        county = query.county_name,
    )
}

fn part_two(query: &StopQuery) -> String {
    format!(
        "The stop lasted approximately {duration}. \
         The vehicle involved was registered as {vehicle}.",
        duration = query.stop_duration,
        vehicle = query.vehicle_number,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base_query() -> StopQuery {
        StopQuery {
            driver_gender: "Male".to_string(),
            driver_age: 27,
            search_conducted: false,
            stop_duration: "0-15 Min".to_string(),
            drugs_related_stop: false,
            stop_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            county_name: "Norfolk".to_string(),
            search_type: None,
            vehicle_number: "KA01AB1234".to_string(),
        }
    }

    #[test]
    fn no_search_wording() {
        let text = describe(&base_query());
        assert_eq!(
            text,
            "On June 05, 2025, a 27-year-old Male driver was stopped in Norfolk. \
             During the stop, no search was conducted. The stop was not drug-related.\n\
             The stop lasted approximately 0-15 Min. \
             The vehicle involved was registered as KA01AB1234."
        );
    }

    #[test]
    fn search_with_type_wording() {
        let mut query = base_query();
        query.search_conducted = true;
        query.search_type = Some("Vehicle Search".to_string());
        query.drugs_related_stop = true;

        let text = describe(&query);
        assert!(text.contains("During the stop, a search was conducted of type Vehicle Search."));
        assert!(text.contains("The stop was drug-related."));
    }

    #[test]
    fn search_without_type_reads_as_no_search() {
        let mut query = base_query();
        query.search_conducted = true;
        query.search_type = Some("   ".to_string());
        assert!(describe(&query).contains("no search was conducted"));

        query.search_type = None;
        assert!(describe(&query).contains("no search was conducted"));
    }

    #[test]
    fn type_without_search_reads_as_no_search() {
        let mut query = base_query();
        query.search_type = Some("Frisk".to_string());
        assert!(describe(&query).contains("no search was conducted"));
    }
}
