/// Default directory for converted artifacts; override with `OUTPUT_DIR`.
pub const DEFAULT_OUTPUT_DIR: &str = "uploads";

/// Sheet label of every converted workbook.
pub const SHEET_NAME: &str = "Data";

/// Default HTTP port; override with `PORT` or `--port`.
pub const DEFAULT_PORT: u16 = 8084;

/// Upload body cap. Conversions are in-memory, so unbounded bodies are not an
/// option once write failures are reported instead of crashing the worker.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;
