//! Main Gateway implementation

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use coach_core::{
    CoachReply, ConversationTurn, HelplineEntry, LLMProvider, PersonaId, PersonaSummary, ReplyKind,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::session::{CoachSession, SessionId, SessionInfo, SessionManager};
use crate::{GatewayError, Result};

/// Gateway state shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub config: GatewayConfig,
    pub sessions: Arc<SessionManager>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub persona: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: SessionId,
    pub persona: PersonaId,
    pub persona_name: &'static str,
    pub country_code: String,
    pub helpline: HelplineEntry,
    pub welcome: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub session_id: SessionId,
    pub welcome: String,
}

/// Main Gateway server
pub struct Gateway {
    state: Arc<GatewayState>,
}

impl Gateway {
    pub fn new(config: GatewayConfig, provider: Arc<dyn LLMProvider>) -> Self {
        let sessions = Arc::new(SessionManager::new(config.clone(), provider));
        Self {
            state: Arc::new(GatewayState { config, sessions }),
        }
    }

    pub fn state(&self) -> Arc<GatewayState> {
        self.state.clone()
    }

    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/personas", get(Self::handle_personas))
            .route("/sessions", post(Self::handle_create_session))
            .route(
                "/sessions/:id",
                get(Self::handle_session_info).delete(Self::handle_end_session),
            )
            .route("/sessions/:id/messages", post(Self::handle_message))
            .route("/sessions/:id/history", get(Self::handle_history))
            .route("/sessions/:id/reset", post(Self::handle_reset))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    pub async fn start(&self) -> Result<()> {
        self.state.config.validate()?;
        let addr = self.state.config.socket_addr()?;
        let router = self.build_router();

        self.spawn_cleanup();

        tracing::info!("Coach Gateway starting on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;

        axum::serve(listener, router)
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        Ok(())
    }

    /// Periodically evict idle sessions.
    fn spawn_cleanup(&self) {
        let sessions = self.state.sessions.clone();
        let every = Duration::from_secs(self.state.config.session.cleanup_interval_secs.max(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                sessions.cleanup_expired();
            }
        });
    }

    async fn handle_health(State(state): State<Arc<GatewayState>>) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "version": crate::VERSION,
            "sessions": state.sessions.session_count(),
        }))
    }

    async fn handle_personas() -> Json<Vec<PersonaSummary>> {
        Json(PersonaId::ALL.iter().map(|id| id.persona().summary()).collect())
    }

    async fn handle_create_session(
        State(state): State<Arc<GatewayState>>,
        Json(request): Json<CreateSessionRequest>,
    ) -> Result<(StatusCode, Json<CreateSessionResponse>)> {
        let persona = PersonaId::from_str(&request.persona)?;
        let session = state
            .sessions
            .create_session(persona, request.country_code.as_deref())?;

        let mut coach = session.coach().await;
        let welcome = coach.welcome_message().await;

        Ok((
            StatusCode::CREATED,
            Json(CreateSessionResponse {
                session_id: session.id.clone(),
                persona,
                persona_name: coach.persona().name,
                country_code: coach.country_code().to_string(),
                helpline: *coach.helpline(),
                welcome,
            }),
        ))
    }

    async fn handle_session_info(
        State(state): State<Arc<GatewayState>>,
        Path(id): Path<String>,
    ) -> Result<Json<SessionInfo>> {
        let session = state.sessions.get_session(&SessionId::from_str(&id))?;
        Ok(Json(session.info().await))
    }

    async fn handle_message(
        State(state): State<Arc<GatewayState>>,
        Path(id): Path<String>,
        Json(request): Json<MessageRequest>,
    ) -> Result<Json<CoachReply>> {
        if request.text.trim().is_empty() {
            return Err(GatewayError::BadRequest("text must not be empty".to_string()));
        }

        let session = state.sessions.get_session(&SessionId::from_str(&id))?;
        session.touch();

        let reply = session.coach().await.generate_response(&request.text).await;

        match reply.kind {
            ReplyKind::Crisis => tracing::warn!(session = %session.id, "Crisis reply issued"),
            ReplyKind::Warning => tracing::warn!(session = %session.id, "Warning reply issued"),
            _ => {}
        }

        Self::spawn_summary_refresh(session);
        Ok(Json(reply))
    }

    /// Summary refresh runs after the reply is sent, under the session lock.
    fn spawn_summary_refresh(session: Arc<CoachSession>) {
        tokio::spawn(async move {
            session.coach().await.refresh_summary().await;
        });
    }

    async fn handle_history(
        State(state): State<Arc<GatewayState>>,
        Path(id): Path<String>,
    ) -> Result<Json<Vec<ConversationTurn>>> {
        let session = state.sessions.get_session(&SessionId::from_str(&id))?;
        let coach = session.coach().await;
        Ok(Json(coach.history().to_vec()))
    }

    async fn handle_reset(
        State(state): State<Arc<GatewayState>>,
        Path(id): Path<String>,
    ) -> Result<Json<ResetResponse>> {
        let session = state.sessions.get_session(&SessionId::from_str(&id))?;
        session.touch();

        let mut coach = session.coach().await;
        coach.reset();
        let welcome = coach.welcome_message().await;

        Ok(Json(ResetResponse {
            session_id: session.id.clone(),
            welcome,
        }))
    }

    async fn handle_end_session(
        State(state): State<Arc<GatewayState>>,
        Path(id): Path<String>,
    ) -> Result<StatusCode> {
        state.sessions.end_session(&SessionId::from_str(&id))?;
        Ok(StatusCode::NO_CONTENT)
    }
}
