use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::error::{error_response, summarize_error_response};
use super::summarize::SummaryResponse;
use super::upload::{multipart_error_response, read_pdf_field};
use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::SummarizeError;
use crate::domain::{Document, ModelId, SummaryStyle};
use crate::presentation::state::AppState;

/// Extracts and summarizes in one request. Expects `file`, `style` and `model` parts.
#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_document_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let max_bytes = state.settings.extraction.max_file_size_bytes();
    let mut upload: Option<(Document, Bytes)> = None;
    let mut style: Option<String> = None;
    let mut model: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => return multipart_error_response(&e),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => match read_pdf_field(field, max_bytes).await {
                Ok(file) => upload = Some(file),
                Err(response) => return response,
            },
            Some("style") => match field.text().await {
                Ok(text) => style = Some(text),
                Err(e) => return multipart_error_response(&e),
            },
            Some("model") => match field.text().await {
                Ok(text) => model = Some(text),
                Err(e) => return multipart_error_response(&e),
            },
            other => tracing::debug!(field = ?other, "Ignoring multipart field"),
        }
    }

    let Some(style) = style else {
        return error_response(StatusCode::BAD_REQUEST, "Missing summary style");
    };
    let style = match style.parse::<SummaryStyle>() {
        Ok(style) => style,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let Some(model) = model.map(ModelId::new) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing model");
    };
    let Some((document, data)) = upload else {
        return summarize_error_response(&SummarizeError::EmptyText);
    };

    match state
        .summarization_service
        .summarize_document(&data, &document, style, &model)
        .await
    {
        Ok(summary) => {
            tracing::info!(
                document_id = %document.id.as_uuid(),
                filename = %document.filename,
                "Document summarized"
            );
            (StatusCode::OK, Json(SummaryResponse::from(summary))).into_response()
        }
        Err(e) => summarize_error_response(&e),
    }
}
