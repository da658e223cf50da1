use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use super::error::{error_response, summarize_error_response};
use super::upload::{multipart_error_response, read_pdf_field};
use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub text: String,
    pub characters: usize,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("file") => break f,
            Ok(Some(f)) => tracing::debug!(field = ?f.name(), "Ignoring multipart field"),
            Ok(None) => {
                tracing::warn!("Extract request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => return multipart_error_response(&e),
        }
    };

    let max_bytes = state.settings.extraction.max_file_size_bytes();
    let (document, data) = match read_pdf_field(field, max_bytes).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    match state.summarization_service.extract(&data, &document).await {
        Ok(text) => {
            let characters = text.char_count();
            (
                StatusCode::OK,
                Json(ExtractResponse {
                    filename: document.filename,
                    text: text.into_inner(),
                    characters,
                }),
            )
                .into_response()
        }
        Err(e) => summarize_error_response(&e),
    }
}
