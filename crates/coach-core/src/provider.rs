//! Completion provider contract
//!
//! The orchestrator only ever talks to the hosted model through
//! [`LLMProvider::complete`]. Concrete HTTP clients live in `coach-llm`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Role of a message sent to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// Role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Completion request
#[derive(Debug, Clone, PartialEq)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub presence_penalty: Option<f64>,
    pub frequency_penalty: Option<f64>,
}

impl LLMRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: 0.7,
            max_tokens: 256,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_penalties(mut self, presence: Option<f64>, frequency: Option<f64>) -> Self {
        self.presence_penalty = presence;
        self.frequency_penalty = frequency;
        self
    }
}

/// Token usage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Completion response
#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
    pub model: String,
    pub provider: String,
    pub usage: TokenUsage,
    pub response_time_ms: u64,
}

/// Provider trait - implemented by all completion backends
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Generate a completion for the given messages
    async fn complete(&self, request: LLMRequest) -> Result<LLMResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = LLMRequest::new("gpt-4", vec![Message::system("be kind")])
            .with_temperature(0.8)
            .with_max_tokens(300)
            .with_penalties(Some(0.3), Some(0.2));

        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.presence_penalty, Some(0.3));
        assert_eq!(request.frequency_penalty, Some(0.2));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert!(json.contains("\"assistant\""));
        assert_eq!(MessageRole::User.as_str(), "user");
    }
}
