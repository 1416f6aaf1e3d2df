use crate::error::ApiError;
use crate::extractor;
use crate::models::DocumentFormat;
use crate::server::upload::{check_extension, read_upload};
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "PDF Text Extractor API".to_string(),
    })
}

// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// POST /extract-pdf, POST /extract
pub async fn extract_pdf(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    extract_upload(DocumentFormat::Pdf, multipart).await
}

// POST /extract-doc
pub async fn extract_doc(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    extract_upload(DocumentFormat::Docx, multipart).await
}

// POST /extract-txt
pub async fn extract_txt(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    extract_upload(DocumentFormat::Txt, multipart).await
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn extract_upload(
    format: DocumentFormat,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let file = read_upload(multipart, format).await?;

    if let Err(e) = check_extension(&file, format) {
        warn!(format = %format, file = file.display_name(), "rejected upload with wrong extension");
        return Err(e);
    }

    let name = file.display_name().to_string();
    let size = file.bytes.len();

    let raw_text = extractor::extract(format, file.bytes).await.map_err(|e| {
        warn!(format = %format, file = %name, error = %e, "extraction failed");
        ApiError::from(e)
    })?;

    info!(
        format = %format,
        file = %name,
        bytes = size,
        chars = raw_text.len(),
        "extracted text"
    );

    Ok(Json(ExtractResponse { raw_text }))
}
