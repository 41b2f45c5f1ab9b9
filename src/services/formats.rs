//! Format detection and dispatch: filename extension in, [`Table`] out.

use crate::error::{ConvertError, ConvertResult};
use crate::services::converters::{
    columnar, delimited, document, raw, spreadsheet, structured,
};
use crate::services::entities::EntityRecognizer;
use crate::services::table::Table;

/// The closed set of supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Spreadsheet,
    Json,
    Parquet,
    Yaml,
    Pdf,
    PlainText,
    Binary,
}

impl SourceFormat {
    /// Map a lowercase extension onto a format. Unknown extensions are the
    /// caller's rejection case, not a fallback.
    pub fn from_extension(ext: &str) -> Option<SourceFormat> {
        match ext {
            "csv" => Some(SourceFormat::Csv),
            "xls" | "xlsx" => Some(SourceFormat::Spreadsheet),
            "json" => Some(SourceFormat::Json),
            "parquet" => Some(SourceFormat::Parquet),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "pdf" => Some(SourceFormat::Pdf),
            "txt" => Some(SourceFormat::PlainText),
            "bin" | "dat" => Some(SourceFormat::Binary),
            _ => None,
        }
    }
}

/// A classified upload: the artifact stem and the dispatch format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadName {
    /// Token before the first dot of the filename; names the output artifact.
    pub stem: String,
    pub format: SourceFormat,
}

/// Classify an uploaded filename.
///
/// The name is first reduced to its final path component so a crafted
/// filename cannot address outside the output directory. The extension is the
/// lowercased token after the last dot; the stem is the token before the
/// first dot.
pub fn classify_filename(filename: &str) -> ConvertResult<UploadName> {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();
    if name.is_empty() {
        return Err(ConvertError::MissingFile);
    }

    let extension = name.rsplit('.').next().unwrap_or(name).to_lowercase();
    let format = match SourceFormat::from_extension(&extension) {
        Some(format) if name.contains('.') => format,
        _ => return Err(ConvertError::UnsupportedFormat(extension)),
    };

    let stem = name.split('.').next().unwrap_or(name).to_string();
    Ok(UploadName { stem, format })
}

/// Run the converter for `format` over the raw upload bytes.
pub fn convert_bytes(
    format: SourceFormat,
    data: &[u8],
    recognizer: &dyn EntityRecognizer,
) -> ConvertResult<Table> {
    match format {
        SourceFormat::Csv => delimited::convert(data),
        SourceFormat::Spreadsheet => spreadsheet::convert(data),
        SourceFormat::Json => structured::convert_json(data),
        SourceFormat::Parquet => columnar::convert(data),
        SourceFormat::Yaml => structured::convert_yaml(data),
        SourceFormat::Pdf => document::convert(data, recognizer),
        SourceFormat::PlainText => raw::convert_text(data),
        SourceFormat::Binary => Ok(raw::convert_binary(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_extension_case_insensitively() {
        for (name, format) in [
            ("a.csv", SourceFormat::Csv),
            ("a.XLS", SourceFormat::Spreadsheet),
            ("a.xlsx", SourceFormat::Spreadsheet),
            ("a.json", SourceFormat::Json),
            ("a.parquet", SourceFormat::Parquet),
            ("a.yaml", SourceFormat::Yaml),
            ("a.yml", SourceFormat::Yaml),
            ("a.pdf", SourceFormat::Pdf),
            ("a.txt", SourceFormat::PlainText),
            ("a.bin", SourceFormat::Binary),
            ("a.dat", SourceFormat::Binary),
        ] {
            assert_eq!(classify_filename(name).unwrap().format, format, "{name}");
        }
    }

    #[test]
    fn rejects_unknown_and_missing_extensions() {
        assert!(matches!(
            classify_filename("report.xyz"),
            Err(ConvertError::UnsupportedFormat(ext)) if ext == "xyz"
        ));
        assert!(matches!(
            classify_filename("noextension"),
            Err(ConvertError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            classify_filename(""),
            Err(ConvertError::MissingFile)
        ));
    }

    #[test]
    fn stem_is_the_token_before_the_first_dot() {
        let name = classify_filename("archive.backup.csv").unwrap();
        assert_eq!(name.stem, "archive");
        assert_eq!(name.format, SourceFormat::Csv);
    }

    #[test]
    fn path_components_are_stripped() {
        let name = classify_filename("../../etc/data.csv").unwrap();
        assert_eq!(name.stem, "data");
    }
}
