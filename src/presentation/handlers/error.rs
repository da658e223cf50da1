use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoaderError, LlmClientError};
use crate::application::services::SummarizeError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn summarize_error_response(error: &SummarizeError) -> Response {
    let status = match error {
        SummarizeError::EmptyText => StatusCode::UNPROCESSABLE_ENTITY,
        SummarizeError::Extraction(FileLoaderError::UnsupportedContentType(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        SummarizeError::Extraction(FileLoaderError::ExtractionFailed(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        SummarizeError::Completion(LlmClientError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        SummarizeError::Completion(LlmClientError::ApiRequestFailed(_)) => StatusCode::BAD_GATEWAY,
        SummarizeError::Completion(LlmClientError::InvalidConfiguration(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Summarization failed");
    } else {
        tracing::warn!(error = %error, "Summarization rejected");
    }

    error_response(status, error.to_string())
}
