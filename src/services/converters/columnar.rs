use bytes::Bytes;
use parquet::file::reader::FileReader;
use parquet::file::serialized_reader::SerializedFileReader;
use parquet::record::Field;

use crate::error::ConvertResult;
use crate::services::table::{Cell, Table};

/// Convert a Parquet file into a [`Table`] using the record API.
///
/// Columns come out in file-schema order (leaf columns, dot-joined paths for
/// nested groups).
pub fn convert(data: &[u8]) -> ConvertResult<Table> {
    let reader = SerializedFileReader::new(Bytes::copy_from_slice(data))?;

    let columns: Vec<String> = reader
        .metadata()
        .file_metadata()
        .schema_descr()
        .columns()
        .iter()
        .map(|c| c.path().string())
        .collect();
    let mut table = Table::new(columns);

    for row_res in reader.get_row_iter(None)? {
        let row = row_res?;
        let mut cells: Vec<Cell> = row
            .get_column_iter()
            .map(|(_, field)| convert_field(field))
            .collect();
        while cells.len() < table.column_count() {
            cells.push(Cell::Empty);
        }
        cells.truncate(table.column_count());
        table.push_row(cells);
    }

    Ok(table)
}

fn convert_field(f: &Field) -> Cell {
    match f {
        Field::Null => Cell::Empty,
        Field::Bool(b) => Cell::Bool(*b),
        Field::Byte(v) => Cell::Int(i64::from(*v)),
        Field::Short(v) => Cell::Int(i64::from(*v)),
        Field::Int(v) => Cell::Int(i64::from(*v)),
        Field::Long(v) => Cell::Int(*v),
        Field::UByte(v) => Cell::Int(i64::from(*v)),
        Field::UShort(v) => Cell::Int(i64::from(*v)),
        Field::UInt(v) => Cell::Int(i64::from(*v)),
        Field::ULong(v) => i64::try_from(*v)
            .map(Cell::Int)
            .unwrap_or_else(|_| Cell::Text(v.to_string())),
        Field::Float(v) => Cell::Float(f64::from(*v)),
        Field::Double(v) => Cell::Float(*v),
        Field::Str(s) => Cell::Text(s.clone()),
        Field::Bytes(b) => Cell::Bytes(b.data().to_vec()),
        // Dates, timestamps, decimals, and nested groups keep their string form.
        other => Cell::Text(other.to_string()),
    }
}
