use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pdf_summarizer::application::services::SummarizationService;
use pdf_summarizer::infrastructure::llm::create_llm_client;
use pdf_summarizer::infrastructure::observability::{TracingConfig, init_tracing};
use pdf_summarizer::infrastructure::text_processing::PdfAdapter;
use pdf_summarizer::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    let log_format = std::env::var("LOG_FORMAT").ok();
    init_tracing(
        &TracingConfig::new(
            environment.as_str(),
            settings.logging.level.clone(),
            settings.logging.json,
        )
        .with_log_format(log_format.as_deref()),
    );

    tracing::debug!(llm = ?settings.llm, "Settings loaded");

    let file_loader = Arc::new(PdfAdapter::new());
    let llm_client = Arc::new(create_llm_client(&settings.llm)?);
    let summarization_service = Arc::new(SummarizationService::new(file_loader, llm_client));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState {
        summarization_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
