use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::domain::{Document, DocumentText, ModelId, Summary, SummaryStyle};

/// Shown to the user when a summary is requested before any text exists.
pub const EMPTY_TEXT_MESSAGE: &str = "Please upload a PDF to summarize.";

pub struct SummarizationService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
}

impl<F, L> SummarizationService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    pub async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<DocumentText, SummarizeError> {
        self.file_loader
            .extract_text(data, document)
            .await
            .map_err(SummarizeError::Extraction)
    }

    /// Builds the prompt for `style` and makes a single completion call.
    ///
    /// Empty text is rejected before the model is contacted. A reply the
    /// client could not read still yields a `Summary`, carrying the
    /// unrecognized-response message as its text.
    #[tracing::instrument(
        skip(self, text, style, model),
        fields(style = %style, model = %model, chars = text.char_count())
    )]
    pub async fn summarize(
        &self,
        text: &DocumentText,
        style: SummaryStyle,
        model: &ModelId,
    ) -> Result<Summary, SummarizeError> {
        if text.is_empty() {
            tracing::warn!("Summary requested without extracted text");
            return Err(SummarizeError::EmptyText);
        }

        let prompt = style.build_prompt(text.as_str());

        let outcome = self
            .llm_client
            .complete(model, &prompt)
            .await
            .map_err(SummarizeError::Completion)?;

        Ok(Summary {
            style,
            model: model.clone(),
            text: outcome.into_summary_text(),
        })
    }

    pub async fn summarize_document(
        &self,
        data: &[u8],
        document: &Document,
        style: SummaryStyle,
        model: &ModelId,
    ) -> Result<Summary, SummarizeError> {
        let text = self.extract(data, document).await?;
        self.summarize(&text, style, model).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("{}", EMPTY_TEXT_MESSAGE)]
    EmptyText,
    #[error("extraction: {0}")]
    Extraction(FileLoaderError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
