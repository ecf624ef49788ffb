//! Predefined analytical questions over the stops dataset.
//!
//! Each insight is a descriptor pairing a SQL aggregation with the chart
//! the presentation layer should draw from its result. Descriptors live in
//! an ordered registry; nothing dispatches on question text.

mod catalog;
mod registry;

use std::fmt;

use serde::Serialize;

pub use registry::InsightRegistry;

/// The question groups offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InsightCategory {
    Vehicle,
    Demographic,
    TimeAndDuration,
    Violation,
    Location,
    /// The multi-dimensional "profound insights" page.
    Advanced,
}

impl InsightCategory {
    pub const ALL: [InsightCategory; 6] = [
        Self::Vehicle,
        Self::Demographic,
        Self::TimeAndDuration,
        Self::Violation,
        Self::Location,
        Self::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle-Based",
            Self::Demographic => "Demographic-Based",
            Self::TimeAndDuration => "Time & Duration Based",
            Self::Violation => "Violation-Based",
            Self::Location => "Location-Based",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the presentation layer should visualize an insight's result table.
/// Field values name result columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Table only, no chart.
    None,
    Bar {
        x: &'static str,
        y: &'static str,
    },
    /// One bar group per `x`, one bar per `series` value.
    GroupedBar {
        x: &'static str,
        y: &'static str,
        series: &'static str,
    },
    /// Grouped bars from wide-format results: every listed column is its
    /// own series.
    MultiBar {
        x: &'static str,
        columns: &'static [&'static str],
    },
    Donut {
        names: &'static str,
        values: &'static str,
    },
    Line {
        x: &'static str,
        y: &'static str,
        series: &'static str,
    },
    Scatter {
        x: &'static str,
        y: &'static str,
        size: &'static str,
        series: &'static str,
    },
    Sunburst {
        path: &'static [&'static str],
        values: &'static str,
    },
}

/// One predefined question: stable id, display label, the aggregation to
/// run, and the chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsightDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub category: InsightCategory,
    pub sql: &'static str,
    pub chart: ChartSpec,
}
