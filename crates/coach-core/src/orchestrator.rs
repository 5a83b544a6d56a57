//! Coaching orchestrator
//!
//! One generic state machine drives every persona. Per incoming message, in
//! strict priority order:
//!
//! 1. Blocked session: fixed refusal, no provider call, no history change
//! 2. Greeting: short provider-generated greeting (canned on failure)
//! 3. Crisis: block the session, safety reply with the localized helpline
//!    (canned fallback always carries the helpline)
//! 4. Warning: gentler safety reply, session continues
//! 5. Otherwise: scenario-augmented prompt plus windowed history; on
//!    provider failure a short apology and no assistant turn is recorded
//!
//! ```text
//! Fresh ──message──> Active ──crisis──> Blocked
//!   ^                  │                   │
//!   └──────reset───────┴───────reset───────┘
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::context::{ContextLimits, ConversationContext, ConversationTurn};
use crate::error::{ProviderError, Result};
use crate::helpline::{HelplineDirectory, HelplineEntry};
use crate::persona::{ModelParams, Persona};
use crate::prompts;
use crate::provider::{LLMProvider, LLMRequest, Message};
use crate::scenario::ScenarioMatcher;
use crate::triage::{KeywordClassifier, MatchMode, PhraseSet, SafetyClassifier, SeverityTier};

/// Returned for every message once a session is blocked
pub const REFUSAL_MESSAGE: &str = "I'm unable to continue our conversation right now. Please reach out to the professional resources I shared with you. Your safety is the priority.";

const INTRO_PARAMS: ModelParams = ModelParams::plain(0.9, 80);
const CRISIS_PARAMS: ModelParams = ModelParams::plain(0.7, 350);
const WARNING_PARAMS: ModelParams = ModelParams::plain(0.8, 250);

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No message processed since creation or reset
    Fresh,
    Active,
    /// A crisis was detected; terminal until reset
    Blocked,
}

/// Which branch produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Greeting,
    Coaching,
    Warning,
    Crisis,
    Refusal,
    Apology,
}

/// Reply to one user message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachReply {
    pub text: String,
    pub kind: ReplyKind,
    pub phase: SessionPhase,
    /// True when the text is a canned string rather than model output
    pub fallback: bool,
    /// Scenario used as hidden guidance, coaching replies only
    pub scenario: Option<&'static str>,
}

/// Model names used for reply and summary calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub reply_model: String,
    pub summary_model: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            reply_model: "gpt-4".to_string(),
            summary_model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Builder for [`CoachOrchestrator`]
pub struct OrchestratorBuilder {
    persona: &'static Persona,
    provider: Arc<dyn LLMProvider>,
    country_code: String,
    classifier: Option<Box<dyn SafetyClassifier>>,
    limits: ContextLimits,
    models: ModelSettings,
}

impl OrchestratorBuilder {
    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    pub fn classifier(mut self, classifier: Box<dyn SafetyClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn match_mode(self, mode: MatchMode) -> Self {
        self.classifier(Box::new(KeywordClassifier::with_mode(mode)))
    }

    pub fn limits(mut self, limits: ContextLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn models(mut self, models: ModelSettings) -> Self {
        self.models = models;
        self
    }

    pub fn build(self) -> Result<CoachOrchestrator> {
        self.limits.validate()?;

        let helpline = HelplineDirectory::lookup(&self.country_code);
        Ok(CoachOrchestrator {
            persona: self.persona,
            provider: self.provider,
            classifier: self
                .classifier
                .unwrap_or_else(|| Box::new(KeywordClassifier::default())),
            scenarios: ScenarioMatcher::new(self.persona.scenarios),
            greetings: PhraseSet::new(self.persona.greeting_phrases(), MatchMode::WordBoundary),
            helpline,
            country_code: self.country_code,
            limits: self.limits,
            models: self.models,
            context: ConversationContext::new(),
        })
    }
}

/// Per-session coaching state machine
pub struct CoachOrchestrator {
    persona: &'static Persona,
    provider: Arc<dyn LLMProvider>,
    classifier: Box<dyn SafetyClassifier>,
    scenarios: ScenarioMatcher,
    greetings: PhraseSet,
    helpline: &'static HelplineEntry,
    country_code: String,
    limits: ContextLimits,
    models: ModelSettings,
    context: ConversationContext,
}

impl CoachOrchestrator {
    pub fn builder(persona: &'static Persona, provider: Arc<dyn LLMProvider>) -> OrchestratorBuilder {
        OrchestratorBuilder {
            persona,
            provider,
            country_code: "US".to_string(),
            classifier: None,
            limits: ContextLimits::default(),
            models: ModelSettings::default(),
        }
    }

    pub fn persona(&self) -> &'static Persona {
        self.persona
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn helpline(&self) -> &'static HelplineEntry {
        self.helpline
    }

    pub fn limits(&self) -> &ContextLimits {
        &self.limits
    }

    pub fn history(&self) -> &[ConversationTurn] {
        self.context.turns()
    }

    pub fn summary(&self) -> Option<&str> {
        self.context.summary()
    }

    pub fn is_blocked(&self) -> bool {
        self.context.is_blocked()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.context.is_blocked() {
            SessionPhase::Blocked
        } else if self.context.is_new_session() {
            SessionPhase::Fresh
        } else {
            SessionPhase::Active
        }
    }

    /// Produce the reply to one user message.
    pub async fn generate_response(&mut self, user_message: &str) -> CoachReply {
        if self.context.is_blocked() {
            tracing::info!(persona = self.persona.name, "Blocked session, returning refusal");
            return self.reply(REFUSAL_MESSAGE.to_string(), ReplyKind::Refusal, false);
        }

        self.context.mark_started();

        if self.greetings.matches(user_message) {
            return self.greeting_reply(user_message).await;
        }

        let assessment = self.classifier.assess(user_message);
        match assessment.tier {
            SeverityTier::Crisis => {
                tracing::warn!(
                    persona = self.persona.name,
                    country = %self.country_code,
                    keyword = ?assessment.keyword,
                    "Crisis tier detected, blocking session"
                );
                self.crisis_reply(user_message).await
            }
            SeverityTier::Warning => {
                tracing::warn!(
                    persona = self.persona.name,
                    keyword = ?assessment.keyword,
                    "Warning tier detected"
                );
                self.warning_reply(user_message).await
            }
            SeverityTier::None => self.coaching_reply(user_message).await,
        }
    }

    /// Session welcome, generated on first request and cached until reset.
    pub async fn welcome_message(&mut self) -> String {
        if let Some(welcome) = self.context.welcome() {
            return welcome.to_string();
        }

        let prompt = prompts::welcome_prompt(self.persona);
        let welcome = match self.complete(vec![Message::system(prompt)], INTRO_PARAMS).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(persona = self.persona.name, "Welcome generation failed: {}", e);
                self.persona.canned.welcome.to_string()
            }
        };

        self.context.set_welcome(welcome.clone());
        self.context.append(ConversationTurn::assistant(welcome.clone()));
        welcome
    }

    /// Clear history, summary, welcome and the blocked flag.
    pub fn reset(&mut self) {
        tracing::info!(persona = self.persona.name, "Session reset");
        self.context.reset();
    }

    /// Refresh the rolling summary when enough turns have accumulated.
    ///
    /// Returns true when a refresh was attempted. Blocked sessions never
    /// reach the provider.
    pub async fn refresh_summary(&mut self) -> bool {
        if self.context.is_blocked() || !self.context.needs_summary(&self.limits) {
            return false;
        }

        let summary = self
            .context
            .summarize(
                self.provider.as_ref(),
                &self.models.summary_model,
                self.limits.summary_span,
            )
            .await;
        tracing::debug!(
            persona = self.persona.name,
            turns = self.context.len(),
            refreshed = !summary.is_empty(),
            "Summary refresh"
        );
        self.context.record_summary(summary);
        true
    }

    async fn greeting_reply(&mut self, user_message: &str) -> CoachReply {
        let prompt = prompts::greeting_prompt(self.persona);
        let (text, fallback) = match self.complete(vec![Message::system(prompt)], INTRO_PARAMS).await {
            Ok(text) => (text, false),
            Err(e) => {
                tracing::warn!(persona = self.persona.name, "Greeting generation failed: {}", e);
                (self.persona.canned.greeting.to_string(), true)
            }
        };

        self.record_exchange(user_message, &text);
        self.reply(text, ReplyKind::Greeting, fallback)
    }

    async fn crisis_reply(&mut self, user_message: &str) -> CoachReply {
        self.context.block();

        let prompt = prompts::crisis_prompt(self.persona, user_message, self.helpline);
        let (text, fallback) = match self.complete(vec![Message::system(prompt)], CRISIS_PARAMS).await {
            Ok(text) => (text, false),
            Err(e) => {
                tracing::error!(persona = self.persona.name, "Crisis generation failed, using canned reply: {}", e);
                (prompts::crisis_fallback(self.persona, self.helpline), true)
            }
        };

        self.record_exchange(user_message, &text);
        self.reply(text, ReplyKind::Crisis, fallback)
    }

    async fn warning_reply(&mut self, user_message: &str) -> CoachReply {
        let prompt = prompts::warning_prompt(self.persona, user_message, self.helpline);
        let (text, fallback) = match self.complete(vec![Message::system(prompt)], WARNING_PARAMS).await {
            Ok(text) => (text, false),
            Err(e) => {
                tracing::warn!(persona = self.persona.name, "Warning generation failed, using canned reply: {}", e);
                (prompts::warning_fallback(self.persona, self.helpline), true)
            }
        };

        self.record_exchange(user_message, &text);
        self.reply(text, ReplyKind::Warning, fallback)
    }

    async fn coaching_reply(&mut self, user_message: &str) -> CoachReply {
        let scenario = self.scenarios.find(user_message);
        let prompt = prompts::reply_prompt(self.persona, user_message, scenario);

        self.context.append(ConversationTurn::user(user_message));

        let mut messages = vec![Message::system(prompt)];
        if let Some(summary) = self.context.summary() {
            messages.push(Message::system(prompts::summary_context(summary)));
        }
        messages.extend(
            self.context
                .windowed_history(self.limits.history_window)
                .iter()
                .map(ConversationTurn::to_message),
        );

        let params = self.persona.reply_params;
        let mut reply = match self.complete(messages, params).await {
            Ok(text) => {
                self.context.append(ConversationTurn::assistant(text.clone()));
                self.reply(text, ReplyKind::Coaching, false)
            }
            Err(e) => {
                tracing::warn!(persona = self.persona.name, "Reply generation failed: {}", e);
                self.reply(self.persona.canned.apology.to_string(), ReplyKind::Apology, true)
            }
        };
        reply.scenario = scenario.map(|s| s.name);
        reply
    }

    async fn complete(
        &self,
        messages: Vec<Message>,
        params: ModelParams,
    ) -> std::result::Result<String, ProviderError> {
        let request = LLMRequest::new(&self.models.reply_model, messages)
            .with_temperature(params.temperature)
            .with_max_tokens(params.max_tokens)
            .with_penalties(params.presence_penalty, params.frequency_penalty);

        let response = self.provider.complete(request).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(ProviderError::MalformedResponse("empty completion".to_string()));
        }

        tracing::debug!(
            provider = %response.provider,
            model = %response.model,
            tokens = response.usage.total_tokens,
            elapsed_ms = response.response_time_ms,
            "Completion received"
        );
        Ok(text.to_string())
    }

    fn record_exchange(&mut self, user_message: &str, reply: &str) {
        self.context.append(ConversationTurn::user(user_message));
        self.context.append(ConversationTurn::assistant(reply));
    }

    fn reply(&self, text: String, kind: ReplyKind, fallback: bool) -> CoachReply {
        CoachReply {
            text,
            kind,
            phase: self.phase(),
            fallback,
            scenario: None,
        }
    }
}
