use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{CompletionOutcome, ModelId};

/// Replies with a fixed outcome and remembers what it was asked.
pub struct MockLlmClient {
    outcome: CompletionOutcome,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockLlmClient {
    pub fn new(outcome: CompletionOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn answering(text: &str) -> Self {
        Self::new(CompletionOutcome::Success(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|last| (*last).clone())
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        _model: &ModelId,
        prompt: &str,
    ) -> Result<CompletionOutcome, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        Ok(self.outcome.clone())
    }
}
