//! sheetforge: convert uploaded files of heterogeneous formats (CSV, Excel,
//! JSON, Parquet, YAML, PDF, plain text, raw binary) into a tabular
//! representation and materialize it as a single-sheet `.xlsx` workbook.

pub mod api;
pub mod cli;
pub mod error;
pub mod services;
