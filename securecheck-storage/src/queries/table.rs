//! Dynamic execution of registry SELECTs.

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use securecheck_core::errors::StorageError;
use securecheck_core::types::table::{CellValue, TableResult};

use crate::sql_err;

/// Execute an insight SELECT and capture its output shape at runtime.
///
/// The SQL comes from the static registry catalog, never from user input.
pub fn run_table_query(conn: &Connection, sql: &str) -> Result<TableResult, StorageError> {
    let mut stmt = conn.prepare(sql).map_err(sql_err)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let column_count = columns.len();

    let mut rows = Vec::new();
    let mut raw = stmt.query([]).map_err(sql_err)?;
    while let Some(row) = raw.next().map_err(sql_err)? {
        let mut cells = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            let value = match row.get_ref(idx).map_err(sql_err)? {
                ValueRef::Null => CellValue::Null,
                ValueRef::Integer(v) => CellValue::Int(v),
                ValueRef::Real(v) => CellValue::Real(v),
                ValueRef::Text(v) => CellValue::Text(String::from_utf8_lossy(v).into_owned()),
                ValueRef::Blob(v) => CellValue::Text(String::from_utf8_lossy(v).into_owned()),
            };
            cells.push(value);
        }
        rows.push(cells);
    }

    Ok(TableResult { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_columns_and_cell_types() {
        let conn = Connection::open_in_memory().unwrap();
        let table =
            run_table_query(&conn, "SELECT 1 AS n, 2.5 AS r, 'x' AS t, NULL AS missing").unwrap();

        assert_eq!(table.columns, vec!["n", "r", "t", "missing"]);
        assert_eq!(
            table.rows,
            vec![vec![
                CellValue::Int(1),
                CellValue::Real(2.5),
                CellValue::Text("x".into()),
                CellValue::Null,
            ]]
        );
    }
}
