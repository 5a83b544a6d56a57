//! Coach Gateway - HTTP surface for persona coaching sessions
//!
//! Each session owns a [`coach_core::CoachOrchestrator`] bound to one
//! persona and one country's helpline. Sessions live in memory and are
//! evicted after an idle timeout.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 Coach Gateway                 │
//! ├───────────────────────────────────────────────┤
//! │            axum router (CORS, trace)          │
//! │                       │                       │
//! │            ┌──────────▼──────────┐            │
//! │            │   Session Manager   │            │
//! │            └──────────┬──────────┘            │
//! │        ┌──────────────┼──────────────┐        │
//! │   ┌────▼─────┐   ┌────▼─────┐   ┌────▼─────┐  │
//! │   │ Session 1│   │ Session 2│   │ Session N│  │
//! │   │  (Anne)  │   │  (Hiro)  │   │   ...    │  │
//! │   └────┬─────┘   └────┬─────┘   └────┬─────┘  │
//! │        └──────────────┼──────────────┘        │
//! │                 LLM provider                  │
//! └───────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod session;

pub use config::{GatewayConfig, SessionSettings};
pub use error::{GatewayError, Result};
pub use gateway::{
    CreateSessionRequest, CreateSessionResponse, Gateway, GatewayState, MessageRequest,
    ResetResponse,
};
pub use session::{CoachSession, SessionId, SessionInfo, SessionManager};

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8787;

/// Default host
pub const DEFAULT_HOST: &str = "127.0.0.1";
