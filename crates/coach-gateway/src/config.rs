//! Gateway configuration

use coach_core::{ContextLimits, MatchMode, ModelSettings};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::{GatewayError, DEFAULT_HOST, DEFAULT_PORT};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Country code used when a session is created without one
    pub default_country: String,

    /// Session configuration
    pub session: SessionSettings,

    /// History window and summary cadence
    pub limits: ContextLimits,

    /// Reply and summary model names
    pub models: ModelSettings,

    /// Keyword matching mode for safety triage
    pub match_mode: MatchMode,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_country: "US".to_string(),
            session: SessionSettings::default(),
            limits: ContextLimits::default(),
            models: ModelSettings::default(),
            match_mode: MatchMode::Substring,
        }
    }
}

impl GatewayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set max concurrent sessions
    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.session.max_sessions = max;
        self
    }

    /// Set the session idle timeout
    pub fn with_session_timeout(mut self, secs: u64) -> Self {
        self.session.timeout_secs = secs;
        self
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> crate::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| GatewayError::InvalidConfig(format!("{}:{}: {}", self.host, self.port, e)))
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file(&self, path: &str) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `COACH_MODEL` / `COACH_SUMMARY_MODEL` overrides.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("COACH_MODEL").filter(|m| !m.is_empty()) {
            self.models.reply_model = model;
        }
        if let Some(model) = lookup("COACH_SUMMARY_MODEL").filter(|m| !m.is_empty()) {
            self.models.summary_model = model;
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.socket_addr()?;
        self.limits.validate()?;
        if self.session.max_sessions == 0 {
            return Err(GatewayError::InvalidConfig(
                "session.max_sessions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Idle timeout in seconds
    pub timeout_secs: u64,

    /// Maximum concurrent sessions
    pub max_sessions: usize,

    /// Interval between expiry sweeps
    pub cleanup_interval_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 3600, // 1 hour
            max_sessions: 1000,
            cleanup_interval_secs: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.limits.history_window, 10);
        assert_eq!(config.models.reply_model, "gpt-4");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GatewayConfig::new()
            .with_host("0.0.0.0")
            .with_port(8080)
            .with_max_sessions(50)
            .with_session_timeout(60);

        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.session.max_sessions, 50);
        assert_eq!(config.session.timeout_secs, 60);
    }

    #[test]
    fn test_partial_json() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"port": 9000, "models": {"reply_model": "gpt-4o"}}"#).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.models.reply_model, "gpt-4o");
        assert_eq!(config.models.summary_model, "gpt-4o-mini");
        assert_eq!(config.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = GatewayConfig::default();
        config.apply_env_overrides(|key| match key {
            "COACH_MODEL" => Some("gpt-4o".to_string()),
            _ => None,
        });
        assert_eq!(config.models.reply_model, "gpt-4o");
        assert_eq!(config.models.summary_model, "gpt-4o-mini");
    }

    #[test]
    fn test_invalid_host() {
        let config = GatewayConfig::new().with_host("not a host");
        assert!(matches!(config.validate(), Err(GatewayError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_roundtrip_file() {
        let path = std::env::temp_dir().join(format!("coach-gateway-{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        GatewayConfig::new().with_port(9100).to_file(&path).unwrap();
        let loaded = GatewayConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.port, 9100);
    }
}
