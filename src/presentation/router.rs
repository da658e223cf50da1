use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    extract_handler, health_handler, options_handler, summarize_document_handler,
    summarize_handler,
};
use crate::presentation::state::AppState;

/// Room for multipart framing and the text fields on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router<F, L>(state: AppState<F, L>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.settings.extraction.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/options", get(options_handler))
        .route("/api/v1/extract", post(extract_handler::<F, L>))
        .route("/api/v1/summarize", post(summarize_handler::<F, L>))
        .route(
            "/api/v1/summarize/document",
            post(summarize_document_handler::<F, L>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
