//! Per-session conversation state
//!
//! Owns the turn history, the rolling summary, the cached welcome and the
//! session flags. Mutated only by the orchestrator that owns it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::prompts::SUMMARY_INSTRUCTION;
use crate::provider::{LLMProvider, LLMRequest, Message};

const SUMMARY_MAX_TOKENS: u32 = 150;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

/// One message in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn to_message(&self) -> Message {
        match self.role {
            TurnRole::User => Message::user(self.content.clone()),
            TurnRole::Assistant => Message::assistant(self.content.clone()),
        }
    }
}

/// History window and summary cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextLimits {
    /// Most recent turns sent with each reply call
    pub history_window: usize,
    /// Turns between summary refreshes
    pub summary_interval: usize,
    /// Turns fed to the summarizer
    pub summary_span: usize,
    /// Minimum history length before summarizing at all
    pub summary_min_turns: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self {
            history_window: 10,
            summary_interval: 10,
            summary_span: 20,
            summary_min_turns: 4,
        }
    }
}

impl ContextLimits {
    pub fn validate(&self) -> Result<()> {
        if self.history_window == 0 {
            return Err(CoachError::InvalidLimits(
                "history_window must be at least 1".to_string(),
            ));
        }
        if self.summary_interval == 0 {
            return Err(CoachError::InvalidLimits(
                "summary_interval must be at least 1".to_string(),
            ));
        }
        if self.summary_span == 0 {
            return Err(CoachError::InvalidLimits(
                "summary_span must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Conversation state for one session
#[derive(Debug, Clone)]
pub struct ConversationContext {
    turns: Vec<ConversationTurn>,
    summary: String,
    summarized_at: usize,
    welcome: Option<String>,
    new_session: bool,
    blocked: bool,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationContext {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            summary: String::new(),
            summarized_at: 0,
            welcome: None,
            new_session: true,
            blocked: false,
        }
    }

    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent `max_turns` turns, oldest first.
    pub fn windowed_history(&self, max_turns: usize) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(max_turns);
        &self.turns[start..]
    }

    pub fn summary(&self) -> Option<&str> {
        if self.summary.is_empty() {
            None
        } else {
            Some(&self.summary)
        }
    }

    /// True once `summary_interval` turns have accumulated since the last refresh.
    pub fn needs_summary(&self, limits: &ContextLimits) -> bool {
        self.turns.len() >= limits.summary_min_turns
            && self.turns.len() - self.summarized_at >= limits.summary_interval
    }

    /// Compress the last `span` turns into a short synopsis.
    ///
    /// Provider failures are logged and yield an empty string.
    pub async fn summarize(&self, provider: &dyn LLMProvider, model: &str, span: usize) -> String {
        let transcript = self
            .windowed_history(span)
            .iter()
            .map(|turn| format!("{}: {}", turn.role.as_str(), turn.content))
            .collect::<Vec<_>>()
            .join("\n");

        let request = LLMRequest::new(
            model,
            vec![Message::system(SUMMARY_INSTRUCTION), Message::user(transcript)],
        )
        .with_max_tokens(SUMMARY_MAX_TOKENS);

        match provider.complete(request).await {
            Ok(response) => response.content.trim().to_string(),
            Err(e) => {
                tracing::warn!(provider = provider.name(), "Summary generation failed: {}", e);
                String::new()
            }
        }
    }

    /// Store a fresh summary; an empty one keeps the previous summary.
    pub fn record_summary(&mut self, summary: String) {
        self.summarized_at = self.turns.len();
        if !summary.is_empty() {
            self.summary = summary;
        }
    }

    pub fn welcome(&self) -> Option<&str> {
        self.welcome.as_deref()
    }

    pub fn set_welcome(&mut self, welcome: String) {
        self.welcome = Some(welcome);
    }

    pub fn is_new_session(&self) -> bool {
        self.new_session
    }

    pub fn mark_started(&mut self) {
        self.new_session = false;
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn block(&mut self) {
        self.blocked = true;
    }

    /// Back to a fresh, unblocked, empty session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
