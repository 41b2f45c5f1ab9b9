//! Plain-text and raw-binary conversion: the degenerate single-column tables.

use crate::error::ConvertResult;
use crate::services::table::{Cell, Table};

/// Split UTF-8 text on line boundaries, one row per line.
pub fn convert_text(data: &[u8]) -> ConvertResult<Table> {
    let text = std::str::from_utf8(data)?;

    let mut table = Table::new(vec!["Text".to_string()]);
    for line in text.lines() {
        table.push_row(vec![Cell::Text(line.to_string())]);
    }
    Ok(table)
}

/// Wrap the entire byte stream, unmodified, in a one-row one-column table.
pub fn convert_binary(data: &[u8]) -> Table {
    let mut table = Table::new(vec!["Binary Data".to_string()]);
    table.push_row(vec![Cell::Bytes(data.to_vec())]);
    table
}
