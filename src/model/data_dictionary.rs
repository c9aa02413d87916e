//! Data dictionary formatting
//!
//! Shapes raw example rows into render-ready rows keyed by column name.

use super::catalog::ExampleRow;
use serde_json::Value;
use std::collections::HashMap;

/// A render-ready row: column name to display text
pub type DataRow = HashMap<String, String>;

/// Convert raw rows into data dictionary rows for the given columns
///
/// Tuple rows map position `i` to `columns[i]`. Mapping rows keep only the
/// listed columns. Anything missing renders as an empty string.
pub fn get_data_dictionary(rows: &[ExampleRow], columns: &[String]) -> Vec<DataRow> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let value = match row {
                        ExampleRow::Tuple(values) => values.get(i),
                        ExampleRow::Mapping(map) => map.get(column),
                    };
                    (column.clone(), value.map(display_value).unwrap_or_default())
                })
                .collect()
        })
        .collect()
}

/// Display text for a single cell value
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
