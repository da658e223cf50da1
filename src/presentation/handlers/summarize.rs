use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::{error_response, summarize_error_response};
use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{DocumentText, ModelId, Summary, SummaryStyle};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    pub style: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub heading: String,
    pub style: String,
    pub model: String,
    pub summary: String,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            heading: summary.heading(),
            style: summary.style.label().to_string(),
            model: summary.model.to_string(),
            summary: summary.text,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    tracing::debug!(style = %request.style, model = %request.model, "Processing summary request");

    let style = match request.style.parse::<SummaryStyle>() {
        Ok(style) => style,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let model = ModelId::new(request.model);
    let text = DocumentText::new(request.text.trim());

    match state
        .summarization_service
        .summarize(&text, style, &model)
        .await
    {
        Ok(summary) => {
            tracing::info!(chars = summary.text.len(), "Summary generated");
            (StatusCode::OK, Json(SummaryResponse::from(summary))).into_response()
        }
        Err(e) => summarize_error_response(&e),
    }
}
