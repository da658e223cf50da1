use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{AVAILABLE_MODELS, SummaryStyle};

#[derive(Serialize)]
pub struct OptionsResponse {
    pub styles: Vec<&'static str>,
    pub models: Vec<&'static str>,
}

pub async fn options_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(OptionsResponse {
            styles: SummaryStyle::ALL.iter().map(SummaryStyle::label).collect(),
            models: AVAILABLE_MODELS.to_vec(),
        }),
    )
}
