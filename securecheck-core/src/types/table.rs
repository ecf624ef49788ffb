//! Dynamically-typed tabular query results.
//!
//! Insight queries are arbitrary aggregations, so their output shape is only
//! known at runtime: an ordered list of column names plus rows of loosely
//! typed cells. The presentation layer decides how to render them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One cell of an insight result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(""),
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v:.2}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Column-named tabular output of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TableResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_cells() {
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Real(49.505).to_string(), "49.51");
        assert_eq!(CellValue::Text("Speeding".into()).to_string(), "Speeding");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn column_index_finds_named_column() {
        let table = TableResult {
            columns: vec!["violation".into(), "count".into()],
            rows: vec![],
        };
        assert_eq!(table.column_index("count"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }
}
