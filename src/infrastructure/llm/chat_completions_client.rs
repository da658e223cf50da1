use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{CompletionOutcome, ModelId};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::{LlmProvider, LlmSettings};

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for any provider exposing an OpenAI-compatible `/chat/completions` route.
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    api_key: String,
    max_tokens: Option<usize>,
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl ChatCompletionsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<usize>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Reads the generated text out of a provider reply.
///
/// A top-level `text` field wins. Otherwise the first choice is consulted,
/// either as a chat message (`message.content`) or as a plain completion
/// (`text`). Anything else is unrecognized.
pub fn classify_completion(body: &Value) -> CompletionOutcome {
    if let Some(text) = body.get("text").and_then(Value::as_str) {
        return CompletionOutcome::Success(text.to_string());
    }

    let first_choice = body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first());

    let choice_text = first_choice.and_then(|choice| {
        choice
            .pointer("/message/content")
            .and_then(Value::as_str)
            .or_else(|| choice.get("text").and_then(Value::as_str))
    });

    match choice_text {
        Some(text) => CompletionOutcome::Success(text.to_string()),
        None => CompletionOutcome::Unrecognized,
    }
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    #[tracing::instrument(skip(self, model, prompt), fields(model = %model, prompt_chars = prompt.chars().count()))]
    async fn complete(
        &self,
        model: &ModelId,
        prompt: &str,
    ) -> Result<CompletionOutcome, LlmClientError> {
        tracing::debug!(prompt = %sanitize_prompt(prompt), "Requesting completion");

        let request_body = ChatCompletionRequest {
            model: model.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Completion request rate limited");
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let outcome = match serde_json::from_str::<Value>(&raw) {
            Ok(body) => classify_completion(&body),
            Err(e) => {
                tracing::warn!(error = %e, "Completion reply is not JSON");
                CompletionOutcome::Unrecognized
            }
        };

        if outcome == CompletionOutcome::Unrecognized {
            tracing::warn!("Completion reply had no recognizable text");
        }

        Ok(outcome)
    }
}

pub fn create_llm_client(settings: &LlmSettings) -> Result<ChatCompletionsClient, LlmClientError> {
    let base_url = match settings.provider {
        LlmProvider::Groq => settings
            .base_url
            .clone()
            .unwrap_or_else(|| GROQ_BASE_URL.to_string()),
        LlmProvider::OpenAi => settings
            .base_url
            .clone()
            .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
        LlmProvider::Custom => settings.base_url.clone().ok_or_else(|| {
            LlmClientError::InvalidConfiguration(
                "base_url required for custom provider".to_string(),
            )
        })?,
    };

    if settings.api_key.is_empty() && settings.provider != LlmProvider::Custom {
        tracing::warn!(provider = ?settings.provider, "No API key configured for LLM provider");
    }

    Ok(ChatCompletionsClient::new(base_url, settings.api_key.clone())
        .with_max_tokens(settings.max_tokens)
        .with_temperature(settings.temperature))
}
