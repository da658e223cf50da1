use axum::body::Bytes;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use axum::response::Response;

use super::error::error_response;
use crate::domain::{ContentType, Document};

/// Maps a multipart read failure to the status axum assigns it, so an
/// oversized body surfaces as 413 rather than a generic 400.
pub fn multipart_error_response(error: &MultipartError) -> Response {
    let status = error.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %error, "Multipart body exceeds the upload limit");
    } else {
        tracing::error!(error = %error, status = %status, "Failed to read multipart");
    }
    error_response(status, format!("Failed to read multipart: {}", error.body_text()))
}

/// Reads a multipart file part, accepting only PDFs no larger than `max_bytes`.
pub async fn read_pdf_field(
    field: Field<'_>,
    max_bytes: usize,
) -> Result<(Document, Bytes), Response> {
    let filename = field.file_name().unwrap_or("upload.pdf").to_string();
    let content_type_str = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    tracing::debug!(filename = %filename, content_type = %content_type_str, "Processing file upload");

    let Some(content_type) = ContentType::from_mime(&content_type_str) else {
        tracing::warn!(content_type = %content_type_str, "Unsupported content type");
        return Err(error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Unsupported content type: {}", content_type_str),
        ));
    };

    let data = field
        .bytes()
        .await
        .map_err(|e| multipart_error_response(&e))?;

    if data.len() > max_bytes {
        tracing::warn!(bytes = data.len(), max_bytes, "Upload too large");
        return Err(error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("File exceeds the {} byte limit", max_bytes),
        ));
    }

    tracing::debug!(bytes = data.len(), "File data received");

    let document = Document::new(filename, content_type, data.len() as u64);
    Ok((document, data))
}
