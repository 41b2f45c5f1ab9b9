//! JSON and YAML conversion.
//!
//! Both formats normalize through `serde_json::Value`: an object becomes a
//! single-row table, an array of objects one row per element. Nested objects
//! are flattened one level into dot-path columns (`user.name`); anything
//! deeper, and arrays, are serialized back to JSON text.

use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};
use crate::services::table::{Cell, Table};

/// Convert JSON bytes into a [`Table`].
pub fn convert_json(data: &[u8]) -> ConvertResult<Table> {
    let value: Value = serde_json::from_slice(data)?;
    flatten_value(value, "json")
}

/// Convert YAML bytes into a [`Table`], flattened identically to JSON.
pub fn convert_yaml(data: &[u8]) -> ConvertResult<Table> {
    let yaml: serde_yaml::Value = serde_yaml::from_slice(data)?;
    // Bridge into the JSON data model so both formats share one flatten path.
    let value = serde_json::to_value(yaml)?;
    flatten_value(value, "yaml")
}

fn flatten_value(value: Value, format: &'static str) -> ConvertResult<Table> {
    let records: Vec<Value> = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        other => {
            return Err(ConvertError::Malformed {
                format,
                message: format!("expected an object or an array of objects, got {other}"),
            })
        }
    };

    // One flattened (column, cell) list per record, columns in first-seen order.
    let mut flattened: Vec<Vec<(String, Cell)>> = Vec::with_capacity(records.len());
    let mut columns: Vec<String> = Vec::new();

    for (idx, record) in records.into_iter().enumerate() {
        let obj = match record {
            Value::Object(map) => map,
            other => {
                return Err(ConvertError::Malformed {
                    format,
                    message: format!("element {idx} is not an object: {other}"),
                })
            }
        };

        let mut pairs: Vec<(String, Cell)> = Vec::new();
        for (key, value) in obj {
            match value {
                Value::Object(nested) => {
                    for (sub_key, sub_value) in nested {
                        pairs.push((format!("{key}.{sub_key}"), scalar_cell(sub_value)));
                    }
                }
                other => pairs.push((key, scalar_cell(other))),
            }
        }
        for (column, _) in &pairs {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
        flattened.push(pairs);
    }

    let mut table = Table::new(columns);
    for pairs in flattened {
        let row = table
            .columns()
            .iter()
            .map(|col| {
                pairs
                    .iter()
                    .find(|(name, _)| name == col)
                    .map(|(_, cell)| cell.clone())
                    .unwrap_or(Cell::Empty)
            })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

fn scalar_cell(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Bool(b) => Cell::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cell::Int(i)
            } else {
                Cell::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Cell::Text(s),
        // Arrays and deeper objects keep their JSON rendering.
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_one_level() {
        let table = convert_json(
            br#"[{"id": 1, "user": {"name": "Ada", "address": {"city": "London"}}},
                 {"id": 2, "tags": ["a", "b"]}]"#,
        )
        .unwrap();
        assert_eq!(
            table.columns(),
            ["id", "user.name", "user.address", "tags"]
        );
        assert_eq!(table.rows()[0][0], Cell::Int(1));
        assert_eq!(table.rows()[0][1], Cell::Text("Ada".to_string()));
        // Depth two is stringified, not expanded further.
        assert_eq!(
            table.rows()[0][2],
            Cell::Text(r#"{"city":"London"}"#.to_string())
        );
        assert_eq!(table.rows()[1][1], Cell::Empty);
        assert_eq!(table.rows()[1][3], Cell::Text(r#"["a","b"]"#.to_string()));
    }

    #[test]
    fn single_object_is_one_row() {
        let table = convert_yaml(b"name: test\ncount: 3\n").unwrap();
        assert_eq!(table.columns(), ["name", "count"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0][1], Cell::Int(3));
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(matches!(
            convert_json(b"42"),
            Err(ConvertError::Malformed { .. })
        ));
    }
}
