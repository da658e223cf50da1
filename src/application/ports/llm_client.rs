use async_trait::async_trait;

use crate::domain::{CompletionOutcome, ModelId};

/// One request/response exchange with a hosted language model.
///
/// Implementations decide whether the reply carried text. A reply without a
/// recognizable text field is `CompletionOutcome::Unrecognized`, not an error.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        model: &ModelId,
        prompt: &str,
    ) -> Result<CompletionOutcome, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
