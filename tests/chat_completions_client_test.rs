use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use pdf_summarizer::application::ports::{LlmClient, LlmClientError};
use pdf_summarizer::domain::{CompletionOutcome, ModelId};
use pdf_summarizer::infrastructure::llm::{
    ChatCompletionsClient, classify_completion, create_llm_client,
};
use pdf_summarizer::presentation::config::{LlmProvider, LlmSettings};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn_provider(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn provider_replying(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/v1/chat/completions",
        post(move || async move { (status, body) }),
    )
}

#[test]
fn given_mapping_with_text_field_when_classifying_then_succeeds() {
    let body = json!({ "text": "  X  " });

    assert_eq!(
        classify_completion(&body),
        CompletionOutcome::Success("  X  ".to_string())
    );
}

#[test]
fn given_chat_choice_when_classifying_then_reads_message_content() {
    let body = json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": "Y" } }]
    });

    assert_eq!(
        classify_completion(&body),
        CompletionOutcome::Success("Y".to_string())
    );
}

#[test]
fn given_legacy_completion_choice_when_classifying_then_reads_choice_text() {
    let body = json!({ "choices": [{ "text": "legacy" }] });

    assert_eq!(
        classify_completion(&body),
        CompletionOutcome::Success("legacy".to_string())
    );
}

#[test]
fn given_top_level_text_and_choices_when_classifying_then_prefers_text_field() {
    let body = json!({
        "text": "direct",
        "choices": [{ "message": { "content": "nested" } }]
    });

    assert_eq!(
        classify_completion(&body),
        CompletionOutcome::Success("direct".to_string())
    );
}

#[test]
fn given_unknown_shapes_when_classifying_then_unrecognized() {
    let shapes = [
        json!({}),
        json!({ "choices": [] }),
        json!({ "choices": [{ "message": { "content": null } }] }),
        json!({ "text": 42 }),
        json!(["text"]),
        json!("just a string"),
        Value::Null,
    ];

    for body in shapes {
        assert_eq!(
            classify_completion(&body),
            CompletionOutcome::Unrecognized,
            "{body}"
        );
    }
}

#[test]
fn given_groq_provider_when_creating_client_then_uses_groq_endpoint() {
    let settings = LlmSettings {
        api_key: "gsk_test".to_string(),
        ..LlmSettings::default()
    };

    let client = create_llm_client(&settings).unwrap();

    assert_eq!(client.base_url(), "https://api.groq.com/openai/v1");
}

#[test]
fn given_openai_provider_when_creating_client_then_uses_openai_endpoint() {
    let settings = LlmSettings {
        provider: LlmProvider::OpenAi,
        ..LlmSettings::default()
    };

    let client = create_llm_client(&settings).unwrap();

    assert_eq!(client.base_url(), "https://api.openai.com/v1");
}

#[test]
fn given_custom_provider_without_base_url_when_creating_client_then_fails() {
    let settings = LlmSettings {
        provider: LlmProvider::Custom,
        ..LlmSettings::default()
    };

    let result = create_llm_client(&settings);

    assert!(matches!(
        result,
        Err(LlmClientError::InvalidConfiguration(_))
    ));
}

#[test]
fn given_custom_provider_with_trailing_slash_when_creating_client_then_trims_it() {
    let settings = LlmSettings {
        provider: LlmProvider::Custom,
        base_url: Some("http://localhost:1234/v1/".to_string()),
        ..LlmSettings::default()
    };

    let client = create_llm_client(&settings).unwrap();

    assert_eq!(client.base_url(), "http://localhost:1234/v1");
}

#[tokio::test]
async fn given_chat_reply_when_completing_then_sends_model_prompt_and_credential() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                == Some("Bearer gsk_secret");
            let echoed = format!(
                "{}|{}|{}",
                authorized,
                body["model"].as_str().unwrap_or_default(),
                body["messages"][0]["content"].as_str().unwrap_or_default()
            );
            Json(json!({
                "choices": [{ "message": { "role": "assistant", "content": echoed } }]
            }))
            .into_response()
        }),
    );
    let base_url = spawn_provider(router).await;
    let client = ChatCompletionsClient::new(base_url, "gsk_secret");

    let outcome = client
        .complete(&ModelId::new("llama3-70b-8192"), "Give a summary of the text: hi")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CompletionOutcome::Success("true|llama3-70b-8192|Give a summary of the text: hi".to_string())
    );
}

#[tokio::test]
async fn given_reply_without_text_when_completing_then_unrecognized() {
    let base_url = spawn_provider(provider_replying(StatusCode::OK, r#"{"id":"abc"}"#)).await;
    let client = ChatCompletionsClient::new(base_url, "key");

    let outcome = client
        .complete(&ModelId::new("Gemma-7b-It"), "prompt")
        .await
        .unwrap();

    assert_eq!(outcome, CompletionOutcome::Unrecognized);
}

#[tokio::test]
async fn given_non_json_reply_when_completing_then_unrecognized() {
    let base_url = spawn_provider(provider_replying(StatusCode::OK, "<html>oops</html>")).await;
    let client = ChatCompletionsClient::new(base_url, "key");

    let outcome = client
        .complete(&ModelId::new("Gemma-7b-It"), "prompt")
        .await
        .unwrap();

    assert_eq!(outcome, CompletionOutcome::Unrecognized);
}

#[tokio::test]
async fn given_too_many_requests_when_completing_then_rate_limited() {
    let base_url = spawn_provider(provider_replying(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"error":"slow down"}"#,
    ))
    .await;
    let client = ChatCompletionsClient::new(base_url, "key");

    let result = client
        .complete(&ModelId::new("Gemma-7b-It"), "prompt")
        .await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_unauthorized_when_completing_then_api_request_failed_with_status() {
    let base_url = spawn_provider(provider_replying(
        StatusCode::UNAUTHORIZED,
        r#"{"error":"invalid api key"}"#,
    ))
    .await;
    let client = ChatCompletionsClient::new(base_url, "bad");

    let result = client
        .complete(&ModelId::new("Gemma-7b-It"), "prompt")
        .await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("401"));
            assert!(message.contains("invalid api key"));
        }
        other => panic!("expected ApiRequestFailed, got {other:?}"),
    }
}
