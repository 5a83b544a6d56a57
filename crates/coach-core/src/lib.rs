//! Coach Core - safety triage and conversation orchestration
//!
//! This crate holds everything a coaching session needs between the UI and
//! the hosted completion model:
//!
//! 1. **Triage** (`triage`): keyword classification of user text into a
//!    [`SeverityTier`]. A coarse heuristic, not a clinical assessment.
//! 2. **Helplines** (`helpline`): country code to crisis-contact lookup.
//! 3. **Scenarios** (`scenario`): first-match coaching scenario detection.
//! 4. **Personas** (`persona`): static persona data (prompts, catalogs,
//!    fallbacks, model parameters).
//! 5. **Context** (`context`): history, rolling summary and session flags.
//! 6. **Orchestrator** (`orchestrator`): the per-session state machine.
//!
//! The completion provider is an injected [`LLMProvider`]; nothing in this
//! crate talks to the network.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use coach_core::{CoachOrchestrator, LLMProvider, PersonaId};
//!
//! # async fn demo(provider: Arc<dyn LLMProvider>) -> coach_core::Result<()> {
//! let mut coach = CoachOrchestrator::builder(PersonaId::AnneRosental.persona(), provider)
//!     .country_code("DE")
//!     .build()?;
//!
//! let welcome = coach.welcome_message().await;
//! let reply = coach.generate_response("I feel overwhelmed at work").await;
//! println!("{welcome}\n{}", reply.text);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod helpline;
pub mod orchestrator;
pub mod persona;
pub mod prompts;
pub mod provider;
pub mod scenario;
pub mod triage;

pub use context::{ContextLimits, ConversationContext, ConversationTurn, TurnRole};
pub use error::{CoachError, ProviderError, Result};
pub use helpline::{HelplineDirectory, HelplineEntry, INTERNATIONAL_DIRECTORY};
pub use orchestrator::{
    CoachOrchestrator, CoachReply, ModelSettings, OrchestratorBuilder, ReplyKind, SessionPhase,
    REFUSAL_MESSAGE,
};
pub use persona::{ModelParams, Persona, PersonaId, PersonaSummary};
pub use provider::{LLMProvider, LLMRequest, LLMResponse, Message, MessageRole, TokenUsage};
pub use scenario::{Scenario, ScenarioMatcher};
pub use triage::{Assessment, KeywordClassifier, MatchMode, SafetyClassifier, SeverityTier};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
