use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::{ConvertError, ConvertResult};
use crate::services::table::{Cell, Table};

/// Convert an Excel workbook (`.xls`/`.xlsx`) into a [`Table`].
///
/// Only the first sheet is read. The first non-empty row is taken as the
/// header; rows above it are skipped.
pub fn convert(data: &[u8]) -> ConvertResult<Table> {
    let cursor = Cursor::new(data.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConvertError::Malformed {
            format: "spreadsheet",
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet)?;

    let header_row_idx = range
        .rows()
        .position(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .ok_or_else(|| ConvertError::Malformed {
            format: "spreadsheet",
            message: format!("sheet '{sheet}' has no non-empty rows"),
        })?;

    let columns: Vec<String> = range
        .rows()
        .nth(header_row_idx)
        .map(|row| row.iter().map(header_string).collect())
        .unwrap_or_default();
    let mut table = Table::new(columns);

    for row in range.rows().skip(header_row_idx + 1) {
        let mut cells: Vec<Cell> = row.iter().map(convert_cell).collect();
        while cells.len() < table.column_count() {
            cells.push(Cell::Empty);
        }
        cells.truncate(table.column_count());
        table.push_row(cells);
    }

    Ok(table)
}

fn header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => (*f as i64).to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(c: &Data) -> Cell {
    match c {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{e:?}")),
    }
}
