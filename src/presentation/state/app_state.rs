use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::SummarizationService;
use crate::presentation::config::Settings;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub summarization_service: Arc<SummarizationService<F, L>>,
    pub settings: Settings,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            summarization_service: Arc::clone(&self.summarization_service),
            settings: self.settings.clone(),
        }
    }
}
