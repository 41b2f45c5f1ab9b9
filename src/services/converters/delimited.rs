use std::io::Cursor;

use csv::ReaderBuilder;

use crate::error::ConvertResult;
use crate::services::table::{Cell, Table};

/// Convert delimited data with a header row into a [`Table`].
///
/// Cells that parse as integers or floats are typed accordingly; everything
/// else stays text. Empty fields become [`Cell::Empty`].
pub fn convert(data: &[u8]) -> ConvertResult<Table> {
    let cursor = Cursor::new(data);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(cursor);

    let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut table = Table::new(columns);

    for result in rdr.records() {
        let record = result?;
        let mut row: Vec<Cell> = Vec::with_capacity(table.column_count());
        for field in record.iter() {
            row.push(infer_cell(field));
        }
        // Short records are padded so ragged CSVs still land in the table.
        while row.len() < table.column_count() {
            row.push(Cell::Empty);
        }
        row.truncate(table.column_count());
        table.push_row(row);
    }

    Ok(table)
}

fn infer_cell(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Cell::Int(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Cell::Float(f);
    }
    Cell::Text(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_typed_cells() {
        let table = convert(b"name,qty,price\nwidget,2,9.5\ngadget,,3\n").unwrap();
        assert_eq!(table.columns(), ["name", "qty", "price"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][1], Cell::Int(2));
        assert_eq!(table.rows()[0][2], Cell::Float(9.5));
        assert_eq!(table.rows()[1][1], Cell::Empty);
    }
}
