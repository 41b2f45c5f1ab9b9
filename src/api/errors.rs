use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::ConvertError;

/// API-facing wrapper that maps pipeline failures onto HTTP responses with
/// plain-text bodies.
#[derive(Debug)]
pub enum ApiError {
    /// The multipart request itself could not be read.
    BadRequest(String),
    /// The conversion task died before producing a result.
    Internal(String),
    /// A conversion pipeline failure.
    Convert(ConvertError),
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        ApiError::Convert(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::Convert(err) => {
                let status = match &err {
                    ConvertError::MissingFile | ConvertError::UnsupportedFormat(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    ConvertError::Workbook(_) | ConvertError::Io(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, err.to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!("upload failed: {message}");
        }
        (status, message).into_response()
    }
}
