use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parquet::column::writer::ColumnWriter;
use parquet::data_type::ByteArray;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::parser::parse_message_type;
use rust_xlsxwriter::Workbook;

use sheetforge::error::ConvertError;
use sheetforge::services::entities::RuleBasedRecognizer;
use sheetforge::services::formats::{classify_filename, convert_bytes, SourceFormat};
use sheetforge::services::table::Cell;

fn tmp_file(name: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("sheetforge-{name}-{nanos}.{ext}"))
}

fn convert(format: SourceFormat, data: &[u8]) -> sheetforge::services::table::Table {
    let recognizer = RuleBasedRecognizer::shared();
    convert_bytes(format, data, recognizer.as_ref()).unwrap()
}

#[test]
fn csv_keeps_shape_and_column_order() {
    let table = convert(
        SourceFormat::Csv,
        b"name,qty,price\nwidget,2,9.5\ngadget,7,3.25\nsprocket,1,0.5\n",
    );
    assert_eq!(table.columns(), ["name", "qty", "price"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows()[0][0], Cell::Text("widget".to_string()));
    assert_eq!(table.rows()[2][1], Cell::Int(1));
}

#[test]
fn excel_first_sheet_first_row_header() {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1").unwrap();
    ws.write_string(0, 0, "id").unwrap();
    ws.write_string(0, 1, "name").unwrap();
    ws.write_number(1, 0, 1).unwrap();
    ws.write_string(1, 1, "Ada").unwrap();
    ws.write_number(2, 0, 2).unwrap();
    ws.write_string(2, 1, "Grace").unwrap();
    let data = wb.save_to_buffer().unwrap();

    let table = convert(SourceFormat::Spreadsheet, &data);
    assert_eq!(table.columns(), ["id", "name"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[1][1], Cell::Text("Grace".to_string()));
}

#[test]
fn json_array_flattens_nested_objects() {
    let table = convert(
        SourceFormat::Json,
        br#"[{"id": 1, "user": {"name": "Ada"}}, {"id": 2, "user": {"name": "Grace"}}]"#,
    );
    assert_eq!(table.columns(), ["id", "user.name"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0][1], Cell::Text("Ada".to_string()));
}

#[test]
fn yaml_flattens_like_json() {
    let table = convert(
        SourceFormat::Yaml,
        b"id: 1\nuser:\n  name: Ada\n  role: admin\n",
    );
    assert_eq!(table.columns(), ["id", "user.name", "user.role"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0][2], Cell::Text("admin".to_string()));
}

#[test]
fn parquet_columns_in_schema_order() {
    let schema = Arc::new(
        parse_message_type(
            r#"
            message schema {
              REQUIRED INT64 id;
              REQUIRED BINARY name (UTF8);
              REQUIRED DOUBLE score;
            }
            "#,
        )
        .unwrap(),
    );
    let props = Arc::new(WriterProperties::builder().build());
    let path = tmp_file("people", "parquet");
    let file = File::create(&path).unwrap();
    let mut writer = SerializedFileWriter::new(file, schema, props).unwrap();

    let mut rg = writer.next_row_group().unwrap();
    while let Some(mut col) = rg.next_column().unwrap() {
        match col.untyped() {
            ColumnWriter::Int64ColumnWriter(w) => {
                w.write_batch(&[1_i64, 2_i64], None, None).unwrap();
            }
            ColumnWriter::ByteArrayColumnWriter(w) => {
                let v1 = ByteArray::from("Ada");
                let v2 = ByteArray::from("Grace");
                w.write_batch(&[v1, v2], None, None).unwrap();
            }
            ColumnWriter::DoubleColumnWriter(w) => {
                w.write_batch(&[98.5_f64, 87.25_f64], None, None).unwrap();
            }
            _ => panic!("unexpected column writer in test"),
        }
        col.close().unwrap();
    }
    rg.close().unwrap();
    writer.close().unwrap();

    let data = std::fs::read(&path).unwrap();
    let table = convert(SourceFormat::Parquet, &data);
    assert_eq!(table.columns(), ["id", "name", "score"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0][0], Cell::Int(1));
    assert_eq!(table.rows()[1][1], Cell::Text("Grace".to_string()));
    assert_eq!(table.rows()[1][2], Cell::Float(87.25));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn text_one_row_per_line() {
    let table = convert(SourceFormat::PlainText, b"alpha\nbeta\ngamma\n");
    assert_eq!(table.columns(), ["Text"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows()[2][0], Cell::Text("gamma".to_string()));
}

#[test]
fn binary_single_cell_is_byte_exact() {
    let payload: Vec<u8> = (0..=255).collect();
    let table = convert(SourceFormat::Binary, &payload);
    assert_eq!(table.columns(), ["Binary Data"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0][0], Cell::Bytes(payload));
}

#[test]
fn unknown_extension_is_rejected() {
    let err = classify_filename("report.xyz").unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedFormat(ext) if ext == "xyz"));
}

#[test]
fn malformed_json_is_a_parse_failure() {
    let recognizer = RuleBasedRecognizer::shared();
    let err = convert_bytes(SourceFormat::Json, b"{not json", recognizer.as_ref()).unwrap_err();
    assert!(matches!(err, ConvertError::Json(_)));
}
