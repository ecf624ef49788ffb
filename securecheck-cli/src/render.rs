//! Terminal rendering of query results and metrics.

use tabled::builder::Builder;
use tabled::settings::Style;

use securecheck_analysis::ChartSpec;
use securecheck_core::types::summary::SummaryMetrics;
use securecheck_core::types::table::TableResult;

/// Render a dynamic query result as a bordered table.
pub fn render_table(table: &TableResult) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().cloned());
    for row in &table.rows {
        builder.push_record(row.iter().map(ToString::to_string));
    }

    let mut rendered = builder.build();
    rendered.with(Style::sharp());
    rendered.to_string()
}

/// Render the dashboard metrics.
pub fn render_summary(summary: &SummaryMetrics) -> String {
    let mut builder = Builder::default();
    builder.push_record(["metric", "value"]);
    builder.push_record(["Police Stops".to_string(), summary.total_stops.to_string()]);
    builder.push_record([
        "Searches Conducted".to_string(),
        summary.searches_conducted.to_string(),
    ]);
    builder.push_record(["Arrests".to_string(), summary.arrests.to_string()]);
    builder.push_record([
        "Tickets Issued".to_string(),
        summary.tickets_issued.to_string(),
    ]);

    let mut rendered = builder.build();
    rendered.with(Style::sharp());
    rendered.to_string()
}

/// One-line chart hint handed to whatever draws the visualization.
pub fn render_chart_spec(chart: &ChartSpec) -> Option<String> {
    if matches!(chart, ChartSpec::None) {
        return None;
    }
    // Serialization of a static descriptor cannot fail.
    let json = serde_json::to_string(chart).expect("chart spec serializes");
    Some(format!("chart: {json}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use securecheck_core::types::table::CellValue;

    #[test]
    fn table_renders_headers_and_rows() {
        let table = TableResult {
            columns: vec!["violation".into(), "count".into()],
            rows: vec![vec![CellValue::Text("Speeding".into()), CellValue::Int(12)]],
        };
        let rendered = render_table(&table);
        assert!(rendered.contains("violation"));
        assert!(rendered.contains("Speeding"));
        assert!(rendered.contains("12"));
    }

    #[test]
    fn chart_spec_is_json_tagged() {
        let hint = render_chart_spec(&ChartSpec::Bar {
            x: "vehicle_number",
            y: "stop_count",
        })
        .unwrap();
        assert!(hint.contains("\"kind\":\"bar\""));
        assert!(render_chart_spec(&ChartSpec::None).is_none());
    }
}
