//! E2E Test: Safety Flow
//!
//! Drives full sessions through the orchestrator with a counting provider and
//! checks the blocking, reset and fallback guarantees.

use async_trait::async_trait;
use coach_core::{
    CoachOrchestrator, HelplineDirectory, LLMProvider, LLMRequest, LLMResponse, PersonaId,
    ProviderError, ReplyKind, SessionPhase, TokenUsage, TurnRole, REFUSAL_MESSAGE,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Echoes a fixed reply or always fails, counting calls
struct CountingProvider {
    fail: bool,
    calls: AtomicUsize,
}

impl CountingProvider {
    fn healthy() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMProvider for CountingProvider {
    fn name(&self) -> &str {
        "counting"
    }

    async fn complete(&self, request: LLMRequest) -> Result<LLMResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Api {
                status: 503,
                message: "upstream overloaded".to_string(),
            });
        }
        Ok(LLMResponse {
            content: "I hear you. What matters most right now?".to_string(),
            model: request.model,
            provider: "counting".to_string(),
            usage: TokenUsage::default(),
            response_time_ms: 3,
        })
    }
}

fn session(id: PersonaId, country: &str, provider: Arc<CountingProvider>) -> CoachOrchestrator {
    CoachOrchestrator::builder(id.persona(), provider)
        .country_code(country)
        .build()
        .expect("valid orchestrator")
}

/// E2E test: A crisis blocks the session and later messages never reach the provider
#[tokio::test]
async fn e2e_crisis_blocks_session() {
    let provider = CountingProvider::healthy();
    let mut coach = session(PersonaId::AnneRosental, "US", provider.clone());

    let crisis = coach.generate_response("I want to end my life").await;
    assert_eq!(crisis.kind, ReplyKind::Crisis);
    assert_eq!(coach.phase(), SessionPhase::Blocked);
    let calls = provider.calls();

    for message in ["hello", "I'm overwhelmed", "I feel numb"] {
        let reply = coach.generate_response(message).await;
        assert_eq!(reply.text, REFUSAL_MESSAGE);
        assert_eq!(reply.kind, ReplyKind::Refusal);
    }
    assert_eq!(provider.calls(), calls);
}

/// E2E test: Reset unblocks, and a second crisis blocks again
#[tokio::test]
async fn e2e_reset_rearms_blocking() {
    let provider = CountingProvider::healthy();
    let mut coach = session(PersonaId::HiroLin, "GB", provider);

    coach.generate_response("I keep thinking about suicide").await;
    assert!(coach.is_blocked());

    coach.reset();
    assert!(!coach.is_blocked());
    assert!(coach.history().is_empty());
    assert_eq!(coach.phase(), SessionPhase::Fresh);

    let normal = coach.generate_response("I keep procrastinating on my thesis").await;
    assert_eq!(normal.kind, ReplyKind::Coaching);
    assert_eq!(normal.scenario, Some("Procrastination and Avoidance"));

    coach.generate_response("I might overdose").await;
    assert!(coach.is_blocked());
}

/// E2E test: Crisis fallback still carries the localized helpline
#[tokio::test]
async fn e2e_crisis_fallback_keeps_helpline() {
    for id in PersonaId::ALL {
        let provider = CountingProvider::failing();
        let mut coach = session(id, "DE", provider);

        let reply = coach.generate_response("I want to end my life").await;
        let helpline = HelplineDirectory::lookup("DE");

        assert!(reply.fallback);
        assert_eq!(reply.kind, ReplyKind::Crisis);
        assert!(reply.text.contains(helpline.name), "{}", id);
        assert!(reply.text.contains(helpline.number), "{}", id);
        assert!(reply.text.contains("findahelpline.com"));
        assert!(coach.is_blocked());
    }
}

/// E2E test: Unknown country codes fall back to the international entry
#[tokio::test]
async fn e2e_unknown_country_uses_default_helpline() {
    let provider = CountingProvider::failing();
    let mut coach = session(PersonaId::AnneRosental, "ZZ", provider);

    let reply = coach.generate_response("Honestly I feel empty inside").await;
    assert_eq!(reply.kind, ReplyKind::Warning);
    assert!(reply
        .text
        .contains("International Association for Suicide Prevention"));
    assert_eq!(coach.phase(), SessionPhase::Active);
}

/// E2E test: A failed coaching call yields the apology and no assistant turn
#[tokio::test]
async fn e2e_provider_failure_apologizes() {
    let provider = CountingProvider::failing();
    let mut coach = session(PersonaId::HiroLin, "US", provider.clone());

    let reply = coach.generate_response("Should I change careers?").await;

    assert_eq!(reply.kind, ReplyKind::Apology);
    assert_eq!(reply.text, "Having trouble connecting right now. Try again in a moment.");
    assert!(!reply.text.contains("503"));
    assert_eq!(provider.calls(), 1);

    let roles: Vec<TurnRole> = coach.history().iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![TurnRole::User]);
}

/// E2E test: Both sides of greetings and safety replies are recorded
#[tokio::test]
async fn e2e_history_records_every_exchange() {
    let provider = CountingProvider::healthy();
    let mut coach = session(PersonaId::AnneRosental, "US", provider);

    coach.welcome_message().await;
    coach.generate_response("Good morning").await;
    coach.generate_response("I have nightmares every week").await;
    coach.generate_response("My sister and I keep fighting").await;

    let roles: Vec<TurnRole> = coach.history().iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![
            TurnRole::Assistant,
            TurnRole::User,
            TurnRole::Assistant,
            TurnRole::User,
            TurnRole::Assistant,
            TurnRole::User,
            TurnRole::Assistant,
        ]
    );
}
