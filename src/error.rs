use thiserror::Error;

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error type shared by every step of the upload-to-workbook pipeline.
///
/// The API layer maps these onto HTTP statuses; the CLI prints them and moves on
/// to the next file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The request carried no `file` part, or the part had an empty filename.
    #[error("no file part in the request")]
    MissingFile,

    /// The filename's extension is not in the recognized set.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// CSV parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Excel workbook parse error.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// JSON parse error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Parquet parse error.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// PDF text extraction error.
    #[error("pdf error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    /// Text input that is not valid UTF-8.
    #[error("text input is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Input parsed, but its shape cannot be normalized into a table
    /// (e.g. a JSON array of scalars, a workbook with no sheets).
    #[error("malformed {format} input: {message}")]
    Malformed {
        format: &'static str,
        message: String,
    },

    /// Workbook serialization failed.
    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Underlying I/O error (e.g. output directory missing, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
