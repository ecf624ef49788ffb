//! The built-in insight catalog.
//!
//! SQL targets SQLite: date parts come from `strftime`, hour-of-day from a
//! `substr` of the `HH:MM:SS` stop time, and booleans are integer `0/1`
//! throughout.

use super::{ChartSpec, InsightCategory, InsightDescriptor};

pub const BUILTIN: [InsightDescriptor; 20] = [
    InsightDescriptor {
        id: "drug-stop-vehicles",
        label: "What are the top 10 vehicles involved in drug-related stops?",
        category: InsightCategory::Vehicle,
        sql: "SELECT vehicle_number, COUNT(*) AS stop_count
              FROM traffic_stops
              WHERE drugs_related_stop = 1 AND vehicle_number IS NOT NULL AND vehicle_number != ''
              GROUP BY vehicle_number
              ORDER BY stop_count DESC
              LIMIT 10",
        chart: ChartSpec::Bar { x: "vehicle_number", y: "stop_count" },
    },
    InsightDescriptor {
        id: "most-searched-vehicles",
        label: "Which vehicles were most frequently searched?",
        category: InsightCategory::Vehicle,
        sql: "SELECT vehicle_number, COUNT(*) AS search_count
              FROM traffic_stops
              WHERE search_conducted = 1 AND vehicle_number IS NOT NULL AND vehicle_number != ''
              GROUP BY vehicle_number
              ORDER BY search_count DESC
              LIMIT 10",
        chart: ChartSpec::Bar { x: "vehicle_number", y: "search_count" },
    },
    InsightDescriptor {
        id: "arrest-rate-by-age-group",
        label: "Which driver age group had the highest arrest rate?",
        category: InsightCategory::Demographic,
        sql: "SELECT
                  CASE
                      WHEN driver_age BETWEEN 18 AND 25 THEN '18-25'
                      WHEN driver_age BETWEEN 26 AND 35 THEN '26-35'
                      WHEN driver_age BETWEEN 36 AND 45 THEN '36-45'
                      WHEN driver_age BETWEEN 46 AND 60 THEN '46-60'
                      ELSE '60+'
                  END AS age_group,
                  ROUND(SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS arrest_rate
              FROM traffic_stops
              WHERE driver_age IS NOT NULL
              GROUP BY age_group
              ORDER BY arrest_rate DESC",
        chart: ChartSpec::Bar { x: "age_group", y: "arrest_rate" },
    },
    InsightDescriptor {
        id: "gender-distribution-by-country",
        label: "What is the gender distribution of drivers stopped in each country?",
        category: InsightCategory::Demographic,
        sql: "SELECT country_name, driver_gender, COUNT(*) AS count
              FROM traffic_stops
              GROUP BY country_name, driver_gender
              ORDER BY country_name, driver_gender",
        chart: ChartSpec::GroupedBar { x: "country_name", y: "count", series: "driver_gender" },
    },
    InsightDescriptor {
        id: "search-rate-by-race-gender",
        label: "Which race and gender combination has the highest search rate?",
        category: InsightCategory::Demographic,
        sql: "SELECT driver_race, driver_gender,
                     ROUND(SUM(CASE WHEN search_conducted = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS search_rate
              FROM traffic_stops
              GROUP BY driver_race, driver_gender
              ORDER BY search_rate DESC
              LIMIT 5",
        chart: ChartSpec::GroupedBar { x: "driver_race", y: "search_rate", series: "driver_gender" },
    },
    InsightDescriptor {
        id: "stops-by-time-of-day",
        label: "What time of day sees the most traffic stops?",
        category: InsightCategory::TimeAndDuration,
        sql: "SELECT
                  CASE
                      WHEN CAST(substr(stop_time, 1, 2) AS INTEGER) BETWEEN 6 AND 11 THEN 'Morning'
                      WHEN CAST(substr(stop_time, 1, 2) AS INTEGER) BETWEEN 12 AND 17 THEN 'Afternoon'
                      WHEN CAST(substr(stop_time, 1, 2) AS INTEGER) BETWEEN 18 AND 21 THEN 'Evening'
                      ELSE 'Night'
                  END AS time_of_day,
                  COUNT(*) AS stop_count
              FROM traffic_stops
              GROUP BY time_of_day
              ORDER BY stop_count DESC",
        chart: ChartSpec::Donut { names: "time_of_day", values: "stop_count" },
    },
    InsightDescriptor {
        id: "avg-duration-by-violation",
        label: "What is the average stop duration for different violations?",
        category: InsightCategory::TimeAndDuration,
        sql: "SELECT violation,
                     ROUND(AVG(
                         CASE stop_duration
                             WHEN '0-15 Min' THEN 7.5
                             WHEN '16-30 Min' THEN 23
                             WHEN '30+ Min' THEN 40
                         END
                     ), 2) AS avg_duration_min
              FROM traffic_stops
              GROUP BY violation
              ORDER BY avg_duration_min DESC",
        chart: ChartSpec::Bar { x: "violation", y: "avg_duration_min" },
    },
    InsightDescriptor {
        id: "night-vs-day-arrests",
        label: "Are stops during the night more likely to lead to arrests?",
        category: InsightCategory::TimeAndDuration,
        sql: "SELECT time_segment,
                     ROUND(SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS arrest_rate
              FROM (
                  SELECT *,
                      CASE
                          WHEN CAST(substr(stop_time, 1, 2) AS INTEGER) BETWEEN 22 AND 23
                               OR CAST(substr(stop_time, 1, 2) AS INTEGER) BETWEEN 0 AND 5 THEN 'Night'
                          ELSE 'Day'
                      END AS time_segment
                  FROM traffic_stops
              )
              GROUP BY time_segment",
        chart: ChartSpec::Donut { names: "time_segment", values: "arrest_rate" },
    },
    InsightDescriptor {
        id: "violation-search-arrest-rates",
        label: "Which violations are most associated with searches or arrests?",
        category: InsightCategory::Violation,
        sql: "SELECT violation,
                     ROUND(SUM(CASE WHEN search_conducted = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS search_rate,
                     ROUND(SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS arrest_rate
              FROM traffic_stops
              GROUP BY violation
              ORDER BY search_rate DESC",
        chart: ChartSpec::MultiBar { x: "violation", columns: &["search_rate", "arrest_rate"] },
    },
    InsightDescriptor {
        id: "violations-under-25",
        label: "Which violations are most common among younger drivers (<25)?",
        category: InsightCategory::Violation,
        sql: "SELECT violation, COUNT(*) AS count
              FROM traffic_stops
              WHERE driver_age < 25
              GROUP BY violation
              ORDER BY count DESC",
        chart: ChartSpec::Donut { names: "violation", values: "count" },
    },
    InsightDescriptor {
        id: "low-intervention-violations",
        label: "Is there a violation that rarely results in search or arrest?",
        category: InsightCategory::Violation,
        sql: "SELECT violation,
                     ROUND(SUM(CASE WHEN search_conducted = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS search_rate,
                     ROUND(SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS arrest_rate
              FROM traffic_stops
              GROUP BY violation
              HAVING search_rate < 50 AND arrest_rate < 50
              ORDER BY violation",
        chart: ChartSpec::None,
    },
    InsightDescriptor {
        id: "drug-stop-rate-by-country",
        label: "Which countries report the highest rate of drug-related stops?",
        category: InsightCategory::Location,
        sql: "SELECT country_name,
                     ROUND(SUM(CASE WHEN drugs_related_stop = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS drug_stop_rate
              FROM traffic_stops
              GROUP BY country_name
              ORDER BY drug_stop_rate DESC",
        chart: ChartSpec::Bar { x: "country_name", y: "drug_stop_rate" },
    },
    InsightDescriptor {
        id: "arrest-rate-by-country-violation",
        label: "What is the arrest rate by country and violation?",
        category: InsightCategory::Location,
        sql: "SELECT country_name, violation,
                     ROUND(SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS arrest_rate
              FROM traffic_stops
              GROUP BY country_name, violation
              ORDER BY country_name, arrest_rate DESC",
        chart: ChartSpec::GroupedBar { x: "violation", y: "arrest_rate", series: "country_name" },
    },
    InsightDescriptor {
        id: "searches-by-country",
        label: "Which country has the most stops with search conducted?",
        category: InsightCategory::Location,
        sql: "SELECT country_name, COUNT(*) AS search_count
              FROM traffic_stops
              WHERE search_conducted = 1
              GROUP BY country_name
              ORDER BY search_count DESC",
        chart: ChartSpec::Donut { names: "country_name", values: "search_count" },
    },
    InsightDescriptor {
        id: "yearly-stops-arrests-by-country",
        label: "Yearly Breakdown of Stops and Arrests by Country",
        category: InsightCategory::Advanced,
        sql: "WITH stop_stats AS (
                  SELECT
                      country_name,
                      strftime('%Y', timestamp) AS year,
                      COUNT(*) AS total_stops,
                      SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) AS total_arrests
                  FROM traffic_stops
                  GROUP BY country_name, strftime('%Y', timestamp)
              )
              SELECT
                  country_name,
                  year,
                  total_stops,
                  total_arrests,
                  ROUND(CASE
                      WHEN total_stops > 0 THEN (total_arrests * 100.0 / total_stops)
                      ELSE 0
                  END, 2) AS arrest_rate_percent
              FROM stop_stats
              ORDER BY year, country_name",
        chart: ChartSpec::GroupedBar { x: "year", y: "total_stops", series: "country_name" },
    },
    InsightDescriptor {
        id: "violation-trends-age-race",
        label: "Driver Violation Trends Based on Age and Race",
        category: InsightCategory::Advanced,
        sql: "SELECT
                  driver_race,
                  violation,
                  CASE
                      WHEN driver_age BETWEEN 18 AND 25 THEN '18-25'
                      WHEN driver_age BETWEEN 26 AND 40 THEN '26-40'
                      WHEN driver_age BETWEEN 41 AND 60 THEN '41-60'
                      ELSE '60+'
                  END AS age_group,
                  COUNT(*) AS count
              FROM traffic_stops
              GROUP BY driver_race, violation, age_group
              ORDER BY count DESC",
        chart: ChartSpec::Sunburst { path: &["driver_race", "age_group", "violation"], values: "count" },
    },
    InsightDescriptor {
        id: "stops-by-year-month-hour",
        label: "Time Period Analysis of Stops (Year, Month, Hour)",
        category: InsightCategory::Advanced,
        sql: "SELECT
                  CAST(strftime('%Y', timestamp) AS INTEGER) AS year,
                  CAST(strftime('%m', timestamp) AS INTEGER) AS month,
                  CAST(strftime('%H', timestamp) AS INTEGER) AS hour,
                  COUNT(*) AS total_stops
              FROM traffic_stops
              GROUP BY year, month, hour
              ORDER BY year, month, hour",
        chart: ChartSpec::Line { x: "hour", y: "total_stops", series: "month" },
    },
    InsightDescriptor {
        id: "high-search-arrest-violations",
        label: "Violations with High Search and Arrest Rates",
        category: InsightCategory::Advanced,
        sql: "WITH violation_summary AS (
                  SELECT
                      violation,
                      COUNT(*) AS total,
                      SUM(CASE WHEN search_conducted = 1 THEN 1 ELSE 0 END) AS searches,
                      SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) AS arrests
                  FROM traffic_stops
                  GROUP BY violation
              )
              SELECT
                  violation,
                  total,
                  searches,
                  arrests,
                  ROUND((searches * 100.0 / total), 2) AS search_rate_percent,
                  ROUND((arrests * 100.0 / total), 2) AS arrest_rate_percent
              FROM violation_summary
              ORDER BY arrest_rate_percent DESC",
        chart: ChartSpec::Scatter {
            x: "search_rate_percent",
            y: "arrest_rate_percent",
            size: "total",
            series: "violation",
        },
    },
    InsightDescriptor {
        id: "demographics-by-country",
        label: "Driver Demographics by Country (Age, Gender, and Race)",
        category: InsightCategory::Advanced,
        sql: "SELECT
                  country_name,
                  driver_gender,
                  driver_race,
                  AVG(driver_age) AS avg_age,
                  COUNT(*) AS total_drivers
              FROM traffic_stops
              GROUP BY country_name, driver_gender, driver_race
              ORDER BY country_name, total_drivers DESC",
        chart: ChartSpec::GroupedBar { x: "country_name", y: "total_drivers", series: "driver_race" },
    },
    InsightDescriptor {
        id: "top-violations-by-arrest-rate",
        label: "Top 5 Violations with Highest Arrest Rates",
        category: InsightCategory::Advanced,
        sql: "WITH violation_stats AS (
                  SELECT
                      violation,
                      COUNT(*) AS total,
                      SUM(CASE WHEN is_arrested = 1 THEN 1 ELSE 0 END) AS arrests
                  FROM traffic_stops
                  GROUP BY violation
              )
              SELECT
                  violation,
                  total,
                  arrests,
                  ROUND((arrests * 100.0 / total), 2) AS arrest_rate_percent
              FROM violation_stats
              ORDER BY arrest_rate_percent DESC
              LIMIT 5",
        chart: ChartSpec::Bar { x: "violation", y: "arrest_rate_percent" },
    },
];
