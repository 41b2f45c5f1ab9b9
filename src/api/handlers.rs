use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use bytes::Bytes;

use super::errors::ApiError;
use crate::error::ConvertError;
use crate::services::entities::EntityRecognizer;
use crate::services::formats::{classify_filename, convert_bytes};
use crate::services::workbook::materialize;

/// Shared, read-only request context: where artifacts go and which recognizer
/// the PDF path uses.
#[derive(Clone)]
pub struct AppState {
    pub out_dir: Arc<PathBuf>,
    pub recognizer: Arc<dyn EntityRecognizer>,
}

/// The static upload form.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Accept a multipart upload, convert it, and answer with the artifact path.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, String), ApiError> {
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("failed to read file part: {e}")))?;
            file = Some((filename, data));
        }
    }

    let (filename, data) = file.ok_or(ConvertError::MissingFile)?;
    if filename.is_empty() {
        return Err(ConvertError::MissingFile.into());
    }

    tracing::info!(filename = %filename, size = data.len(), "converting upload");

    let recognizer = state.recognizer.clone();
    let out_dir = state.out_dir.clone();

    // Conversion is synchronous CPU-bound work; keep it off the async executor.
    let output_path = tokio::task::spawn_blocking(move || {
        let upload = classify_filename(&filename)?;
        let table = convert_bytes(upload.format, &data, recognizer.as_ref())?;
        materialize(&table, &out_dir, &upload.stem)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("conversion task failed: {e}")))??;

    Ok((
        StatusCode::OK,
        format!(
            "File has been uploaded and saved as {}.",
            output_path.display()
        ),
    ))
}
