//! Session management for the Gateway

use chrono::{DateTime, Utc};
use coach_core::{CoachOrchestrator, LLMProvider, PersonaId, SessionPhase};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::GatewayConfig;
use crate::{GatewayError, Result};

/// Unique session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(format!("session:{}", Uuid::new_v4()))
    }

    pub fn from_str(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One coaching conversation.
///
/// The orchestrator sits behind an async mutex so a session never has two
/// provider calls in flight at once.
pub struct CoachSession {
    pub id: SessionId,
    pub persona: PersonaId,
    pub created_at: DateTime<Utc>,
    last_activity: Mutex<DateTime<Utc>>,
    coach: tokio::sync::Mutex<CoachOrchestrator>,
}

impl CoachSession {
    pub fn new(id: SessionId, persona: PersonaId, coach: CoachOrchestrator) -> Self {
        let now = Utc::now();
        Self {
            id,
            persona,
            created_at: now,
            last_activity: Mutex::new(now),
            coach: tokio::sync::Mutex::new(coach),
        }
    }

    /// Exclusive access to the orchestrator
    pub async fn coach(&self) -> tokio::sync::MutexGuard<'_, CoachOrchestrator> {
        self.coach.lock().await
    }

    pub fn touch(&self) {
        *self.last_activity.lock() = Utc::now();
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        *self.last_activity.lock()
    }

    pub fn is_expired(&self, timeout_secs: u64) -> bool {
        let elapsed = Utc::now() - self.last_activity();
        let timeout = i64::try_from(timeout_secs).unwrap_or(i64::MAX);
        elapsed.num_seconds() > timeout
    }

    /// Snapshot for the session info endpoint
    pub async fn info(&self) -> SessionInfo {
        let coach = self.coach().await;
        SessionInfo {
            session_id: self.id.clone(),
            persona: self.persona,
            country_code: coach.country_code().to_string(),
            phase: coach.phase(),
            turns: coach.history().len(),
            blocked: coach.is_blocked(),
            summary: coach.summary().map(str::to_string),
            created_at: self.created_at,
            last_activity: self.last_activity(),
        }
    }
}

/// Session information for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub session_id: SessionId,
    pub persona: PersonaId,
    pub country_code: String,
    pub phase: SessionPhase,
    pub turns: usize,
    pub blocked: bool,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

/// Session manager
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<CoachSession>>>>,
    provider: Arc<dyn LLMProvider>,
    config: GatewayConfig,
}

impl SessionManager {
    pub fn new(config: GatewayConfig, provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            provider,
            config,
        }
    }

    /// Build a fresh orchestrator and register it under a new id.
    pub fn create_session(
        &self,
        persona: PersonaId,
        country_code: Option<&str>,
    ) -> Result<Arc<CoachSession>> {
        let country = country_code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.config.default_country);

        let coach = CoachOrchestrator::builder(persona.persona(), self.provider.clone())
            .country_code(country)
            .match_mode(self.config.match_mode)
            .limits(self.config.limits)
            .models(self.config.models.clone())
            .build()?;

        let mut sessions = self.sessions.write();
        if sessions.len() >= self.config.session.max_sessions {
            return Err(GatewayError::SessionLimit(sessions.len()));
        }

        let id = SessionId::new();
        let session = Arc::new(CoachSession::new(id.clone(), persona, coach));
        sessions.insert(id.clone(), session.clone());

        tracing::info!("Session created: {} ({})", id, persona);
        Ok(session)
    }

    pub fn get_session(&self, id: &SessionId) -> Result<Arc<CoachSession>> {
        self.sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::SessionNotFound(id.to_string()))
    }

    pub fn end_session(&self, id: &SessionId) -> Result<()> {
        match self.sessions.write().remove(id) {
            Some(_) => {
                tracing::info!("Session ended: {}", id);
                Ok(())
            }
            None => Err(GatewayError::SessionNotFound(id.to_string())),
        }
    }

    /// Drop sessions idle past the configured timeout.
    pub fn cleanup_expired(&self) -> usize {
        let timeout = self.config.session.timeout_secs;
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(timeout));
        let removed = before - sessions.len();

        if removed > 0 {
            tracing::info!("Cleaned up {} expired sessions", removed);
        }

        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::{LLMRequest, LLMResponse, ProviderError};

    struct OfflineProvider;

    #[async_trait::async_trait]
    impl LLMProvider for OfflineProvider {
        fn name(&self) -> &str {
            "offline"
        }

        async fn complete(&self, _request: LLMRequest) -> std::result::Result<LLMResponse, ProviderError> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }
    }

    fn manager(config: GatewayConfig) -> SessionManager {
        SessionManager::new(config, Arc::new(OfflineProvider))
    }

    #[test]
    fn test_session_id_format() {
        let id = SessionId::new();
        assert!(id.as_str().starts_with("session:"));
        assert_eq!(SessionId::from_str(id.as_str()), id);
    }

    #[test]
    fn test_create_and_end_session() {
        let manager = manager(GatewayConfig::default());
        let session = manager.create_session(PersonaId::HiroLin, Some("GB")).unwrap();

        assert_eq!(manager.session_count(), 1);
        assert!(manager.get_session(&session.id).is_ok());

        manager.end_session(&session.id).unwrap();
        assert_eq!(manager.session_count(), 0);
        assert!(matches!(
            manager.end_session(&session.id),
            Err(GatewayError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_default_country_applied() {
        let manager = manager(GatewayConfig::default());
        let session = manager.create_session(PersonaId::AnneRosental, Some("  ")).unwrap();

        let info = session.info().await;
        assert_eq!(info.country_code, "US");
        assert_eq!(info.phase, SessionPhase::Fresh);
        assert!(!info.blocked);
    }

    #[test]
    fn test_session_limit() {
        let manager = manager(GatewayConfig::default().with_max_sessions(1));
        manager.create_session(PersonaId::HiroLin, None).unwrap();

        assert!(matches!(
            manager.create_session(PersonaId::HiroLin, None),
            Err(GatewayError::SessionLimit(1))
        ));
    }

    #[test]
    fn test_cleanup_expired() {
        let manager = manager(GatewayConfig::default().with_session_timeout(0));
        let session = manager.create_session(PersonaId::HiroLin, None).unwrap();
        *session.last_activity.lock() = Utc::now() - chrono::Duration::seconds(5);

        assert_eq!(manager.cleanup_expired(), 1);
        assert_eq!(manager.session_count(), 0);
    }

    #[test]
    fn test_clock_step_back_does_not_expire() {
        let manager = manager(GatewayConfig::default().with_session_timeout(60));
        let session = manager.create_session(PersonaId::AnneRosental, None).unwrap();
        *session.last_activity.lock() = Utc::now() + chrono::Duration::seconds(30);

        assert!(!session.is_expired(60));
        assert_eq!(manager.cleanup_expired(), 0);
        assert_eq!(manager.session_count(), 1);
    }
}
