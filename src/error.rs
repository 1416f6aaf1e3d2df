use crate::models::DocumentFormat;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Failure inside a format extractor. Carries the decoder's own message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExtractError {
    pub format: DocumentFormat,
    pub message: String,
}

impl ExtractError {
    pub fn new(format: DocumentFormat, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
        }
    }
}

/// Every way a request can fail. Each variant maps to one status and an
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("No file uploaded")]
    MissingFile,

    #[error("{}", .0.invalid_type_message().unwrap_or("Invalid file type"))]
    InvalidFileType(DocumentFormat),

    #[error("Failed to read {} file: {message}", .format.label())]
    Decode {
        format: DocumentFormat,
        message: String,
    },

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn decode(format: DocumentFormat, message: impl ToString) -> Self {
        ApiError::Decode {
            format,
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingFile | ApiError::InvalidFileType(_) | ApiError::Decode { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        ApiError::Decode {
            format: e.format,
            message: e.message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}
