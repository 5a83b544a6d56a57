//! OpenAI-compatible chat completions provider
//!
//! Single attempt per call: no retries, no backoff. Every failure is mapped
//! onto [`ProviderError`] so the orchestrator can pick its canned fallback.

use async_trait::async_trait;
use coach_core::{LLMProvider, LLMRequest, LLMResponse, ProviderError, TokenUsage};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

use crate::config::{LlmConfigError, ProviderSettings};

/// Caps in-flight requests across all sessions sharing the provider
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    max_concurrent: usize,
}

impl ConcurrencyLimiter {
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
        }
    }

    pub async fn acquire(&self) -> Result<tokio::sync::SemaphorePermit<'_>, ProviderError> {
        self.semaphore
            .acquire()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("limiter closed: {}", e)))
    }

    /// Permits currently held
    pub fn in_flight(&self) -> usize {
        self.max_concurrent.saturating_sub(self.semaphore.available_permits())
    }

    pub fn capacity(&self) -> usize {
        self.max_concurrent
    }
}

/// OpenAI Provider
pub struct OpenAIProvider {
    name: String,
    client: reqwest::Client,
    settings: ProviderSettings,
    limiter: ConcurrencyLimiter,
}

impl OpenAIProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, LlmConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| LlmConfigError::Client(e.to_string()))?;

        // Reject keys that cannot be sent as a header before the first call
        HeaderValue::from_str(&format!("Bearer {}", settings.api_key)).map_err(|_| {
            LlmConfigError::InvalidValue {
                key: "OPENAI_API_KEY",
                value: "<non-ascii>".to_string(),
            }
        })?;

        let limiter = ConcurrencyLimiter::new(settings.max_concurrent);
        Ok(Self {
            name: "openai".to_string(),
            client,
            settings,
            limiter,
        })
    }

    /// Build from `OPENAI_API_KEY` and the `COACH_LLM_*` variables.
    pub fn from_env() -> Result<Self, LlmConfigError> {
        Self::new(ProviderSettings::from_env()?)
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.settings.api_key))
            .map_err(|_| ProviderError::Authentication("API key is not a valid header".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

/// Chat-completions request body; absent penalties are omitted.
pub fn build_body(request: &LLMRequest) -> Value {
    let mut body = json!({
        "model": request.model,
        "messages": request.messages.iter().map(|m| {
            json!({
                "role": m.role.as_str(),
                "content": m.content,
            })
        }).collect::<Vec<_>>(),
        "temperature": request.temperature,
        "max_tokens": request.max_tokens,
        "stream": false,
    });

    if let Some(penalty) = request.presence_penalty {
        body["presence_penalty"] = json!(penalty);
    }
    if let Some(penalty) = request.frequency_penalty {
        body["frequency_penalty"] = json!(penalty);
    }
    body
}

/// Completion text, model and usage extracted from a response body
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCompletion {
    pub content: String,
    pub model: String,
    pub usage: TokenUsage,
}

pub fn parse_response(body: &Value, requested_model: &str) -> Result<ParsedCompletion, ProviderError> {
    let content = body["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ProviderError::MalformedResponse("missing choices[0].message.content".to_string()))?
        .to_string();

    let model = body["model"].as_str().unwrap_or(requested_model).to_string();

    let usage = TokenUsage {
        prompt_tokens: body["usage"]["prompt_tokens"].as_u64().unwrap_or(0) as u32,
        completion_tokens: body["usage"]["completion_tokens"].as_u64().unwrap_or(0) as u32,
        total_tokens: body["usage"]["total_tokens"].as_u64().unwrap_or(0) as u32,
    };

    Ok(ParsedCompletion {
        content,
        model,
        usage,
    })
}

/// Map a non-success status and its body onto a provider error.
pub fn error_for_status(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ProviderError::Timeout(message),
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => ProviderError::Unavailable(message),
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(e.to_string())
    } else {
        ProviderError::Network(e.to_string())
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: LLMRequest) -> Result<LLMResponse, ProviderError> {
        let _permit = self.limiter.acquire().await?;
        tracing::debug!(
            model = %request.model,
            in_flight = self.limiter.in_flight(),
            capacity = self.limiter.capacity(),
            "Sending completion"
        );
        let start = Instant::now();

        let response = self
            .client
            .post(self.settings.completions_url())
            .headers(self.build_headers()?)
            .json(&build_body(&request))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let error = error_for_status(status, &text);
            tracing::warn!(provider = %self.name, status = status.as_u16(), "Completion request failed: {}", error);
            return Err(error);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        let parsed = parse_response(&body, &request.model)?;

        Ok(LLMResponse {
            content: parsed.content,
            model: parsed.model,
            provider: self.name.clone(),
            usage: parsed.usage,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
