//! PDF conversion: layout-preserving text extraction plus entity extraction.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConvertResult;
use crate::services::entities::{spans_of, EntityCategory, EntityRecognizer};
use crate::services::table::{Cell, Table};

static INTRALINE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("whitespace regex is valid"));
static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline regex is valid"));

/// Extract text from a PDF, keeping line and paragraph breaks.
///
/// The extractor reconstructs reading order from positioned glyphs; its
/// grouping tolerances are its own concern. We only normalize the result:
/// ASCII-fold, strip NULs and replacement markers, collapse runs of spaces,
/// and cap blank-line runs at one (a paragraph break).
pub fn extract_pdf_text(file: &[u8]) -> ConvertResult<String> {
    let text = pdf_extract::extract_text_from_mem(file)?;

    let cleaned = deunicode(&text)
        .replace('\0', "")
        .replace("[?]", "")
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let cleaned = INTRALINE_WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = EXCESS_NEWLINES.replace_all(&cleaned, "\n\n");

    Ok(cleaned.trim().to_string())
}

/// Convert a PDF into the degenerate one-row table: the full extracted text
/// plus the person/location/organization spans found in it.
pub fn convert(data: &[u8], recognizer: &dyn EntityRecognizer) -> ConvertResult<Table> {
    let text = extract_pdf_text(data)?;
    Ok(table_from_text(text, recognizer))
}

fn table_from_text(text: String, recognizer: &dyn EntityRecognizer) -> Table {
    let entities = recognizer.analyze(&text);

    let mut table = Table::new(vec![
        "PDF Text".to_string(),
        "Persons".to_string(),
        "Locations".to_string(),
        "Organizations".to_string(),
    ]);
    table.push_row(vec![
        Cell::Text(text),
        Cell::List(spans_of(&entities, EntityCategory::Person)),
        Cell::List(spans_of(&entities, EntityCategory::Location)),
        Cell::List(spans_of(&entities, EntityCategory::Organization)),
    ]);
    table
}
