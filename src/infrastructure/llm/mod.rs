mod chat_completions_client;
mod mock_llm_client;

pub use chat_completions_client::{ChatCompletionsClient, classify_completion, create_llm_client};
pub use mock_llm_client::MockLlmClient;
