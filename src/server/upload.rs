use crate::error::ApiError;
use crate::models::{DocumentFormat, UploadedFile};
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use tracing::debug;

/// Name of the multipart field carrying the document
pub const FILE_FIELD: &str = "file";

/// Pull the uploaded file out of a multipart body.
///
/// Only a `file` field sent as a file part (with a filename) counts; a body
/// that is not multipart at all is treated as having no file. Errors while
/// streaming the part are reported as decode errors for `format`.
pub async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
    format: DocumentFormat,
) -> Result<UploadedFile, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        debug!(error = %e.body_text(), "request body is not multipart");
        ApiError::MissingFile
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::decode(format, e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            debug!("ignoring `file` field without a filename");
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::decode(format, e.body_text()))?;

        return Ok(UploadedFile::new(Some(filename), bytes.to_vec()));
    }

    Err(ApiError::MissingFile)
}

/// Enforce the format's extension rule on the declared filename
pub fn check_extension(file: &UploadedFile, format: DocumentFormat) -> Result<(), ApiError> {
    match format.required_extensions() {
        Some(extensions) if !file.has_extension(extensions) => {
            Err(ApiError::InvalidFileType(format))
        }
        _ => Ok(()),
    }
}
