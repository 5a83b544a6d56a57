//! Integration Test: OpenAI provider against a local stub endpoint

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use coach_core::{LLMProvider, LLMRequest, Message, ProviderError};
use coach_llm::{OpenAIProvider, ProviderSettings};
use serde_json::{json, Value};

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer sk-local") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "bad key"}})),
        );
    }

    let last = body["messages"]
        .as_array()
        .and_then(|m| m.last())
        .and_then(|m| m["content"].as_str())
        .unwrap_or_default()
        .to_string();

    (
        StatusCode::OK,
        Json(json!({
            "model": body["model"],
            "choices": [{"message": {"role": "assistant", "content": format!("echo: {}", last)}}],
            "usage": {"prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8},
            "presence_penalty_seen": body.get("presence_penalty").is_some(),
        })),
    )
}

fn request() -> LLMRequest {
    LLMRequest::new("gpt-4", vec![Message::system("be brief"), Message::user("ping")])
        .with_temperature(0.7)
        .with_max_tokens(50)
}

#[tokio::test]
async fn completes_against_compatible_endpoint() {
    let base = spawn_stub(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
    let provider = OpenAIProvider::new(ProviderSettings::new("sk-local").with_base_url(base)).unwrap();

    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "echo: ping");
    assert_eq!(response.model, "gpt-4");
    assert_eq!(response.provider, "openai");
    assert_eq!(response.usage.total_tokens, 8);
}

#[tokio::test]
async fn maps_unauthorized_to_authentication_error() {
    let base = spawn_stub(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
    let provider = OpenAIProvider::new(ProviderSettings::new("sk-wrong").with_base_url(base)).unwrap();

    let error = provider.complete(request()).await.unwrap_err();
    assert_eq!(error, ProviderError::Authentication("bad key".to_string()));
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/v1/chat/completions",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (StatusCode::TOO_MANY_REQUESTS, "quota exceeded")
            }
        }),
    );
    let base = spawn_stub(router).await;
    let provider = OpenAIProvider::new(ProviderSettings::new("sk-local").with_base_url(base)).unwrap();

    let error = provider.complete(request()).await.unwrap_err();
    assert!(matches!(error, ProviderError::RateLimited(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = OpenAIProvider::new(
        ProviderSettings::new("sk-local").with_base_url(format!("http://{}/v1", addr)),
    )
    .unwrap();

    let error = provider.complete(request()).await.unwrap_err();
    assert!(matches!(error, ProviderError::Network(_) | ProviderError::Timeout(_)));
}
