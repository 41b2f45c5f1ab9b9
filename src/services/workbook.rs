//! The materializer: serialize a [`Table`] to a single-sheet `.xlsx` artifact.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use crate::error::ConvertResult;
use crate::services::shared::constants::SHEET_NAME;
use crate::services::table::{Cell, Table};

/// Path of the artifact for an upload stem: `{stem}_converted.xlsx` under the
/// output directory. An existing artifact at that path is overwritten.
pub fn artifact_path(out_dir: &Path, stem: &str) -> PathBuf {
    out_dir.join(format!("{stem}_converted.xlsx"))
}

/// Write `table` as a single-sheet workbook to `{stem}_converted.xlsx` under
/// `out_dir` and return the path. Header row first, no row-index column.
pub fn materialize(table: &Table, out_dir: &Path, stem: &str) -> ConvertResult<PathBuf> {
    let path = artifact_path(out_dir, stem);
    write_workbook(table, &path)?;
    Ok(path)
}

/// Write `table` to `path` as an `.xlsx` workbook with one sheet labeled
/// [`SHEET_NAME`].
pub fn write_workbook(table: &Table, path: &Path) -> ConvertResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, name.as_str())?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                Cell::Empty => {}
                Cell::Bool(b) => {
                    worksheet.write_boolean(excel_row, col, *b)?;
                }
                Cell::Int(i) => {
                    worksheet.write_number(excel_row, col, *i as f64)?;
                }
                Cell::Float(f) => {
                    worksheet.write_number(excel_row, col, *f)?;
                }
                Cell::Text(s) => {
                    worksheet.write_string(excel_row, col, s.as_str())?;
                }
                // xlsx has no byte type; bytes are rendered as lowercase hex.
                Cell::Bytes(b) => {
                    worksheet.write_string(excel_row, col, hex_string(b))?;
                }
                Cell::List(items) => {
                    worksheet.write_string(excel_row, col, items.join(", "))?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_path_appends_converted_suffix() {
        let path = artifact_path(Path::new("uploads"), "report");
        assert_eq!(path, Path::new("uploads/report_converted.xlsx"));
    }

    #[test]
    fn hex_rendering_is_lowercase_and_padded() {
        assert_eq!(hex_string(&[0x00, 0x9f, 0x92, 0x96]), "009f9296");
    }
}
