use std::fs;
use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use crate::services::entities::RuleBasedRecognizer;
use crate::services::files::output_dir;
use crate::services::formats::{classify_filename, convert_bytes};
use crate::services::workbook::materialize;

/// Batch mode: convert one file, or walk a directory and convert every file
/// with a recognized extension. Failures are reported and skipped.
pub async fn convert(path: &str) -> anyhow::Result<()> {
    let out_dir = output_dir();
    let recognizer = RuleBasedRecognizer::shared();

    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file_path = entry.path();

        if let Err(e) = convert_one(file_path, &out_dir, recognizer.as_ref()) {
            eprintln!("Failed to process {}: {:?}", file_path.display(), e);
            continue;
        }
    }
    Ok(())
}

fn convert_one(
    file_path: &Path,
    out_dir: &Path,
    recognizer: &RuleBasedRecognizer,
) -> anyhow::Result<()> {
    let filename = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let upload = classify_filename(&filename)?;
    let data = fs::read(file_path)?;
    let table = convert_bytes(upload.format, &data, recognizer)?;
    let output_path = materialize(&table, out_dir, &upload.stem)?;

    info!(target: "convert", "wrote {}", output_path.display());
    Ok(())
}
