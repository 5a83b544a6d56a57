//! Provider settings loaded from the environment

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_CONCURRENT: usize = 16;

/// Provider configuration errors, fatal at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LlmConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Connection settings for an OpenAI-compatible endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_concurrent: usize,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_concurrent", &self.max_concurrent)
            .finish()
    }
}

impl ProviderSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max;
        self
    }

    /// Load from process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, LlmConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(LlmConfigError::MissingApiKey)?;

        let mut settings = Self::new(api_key);

        if let Some(url) = lookup("COACH_LLM_BASE_URL") {
            settings.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup("COACH_LLM_TIMEOUT_SECS") {
            settings.timeout_secs = parse_positive("COACH_LLM_TIMEOUT_SECS", &raw)? as u64;
        }
        if let Some(raw) = lookup("COACH_LLM_MAX_CONCURRENT") {
            settings.max_concurrent = parse_positive("COACH_LLM_MAX_CONCURRENT", &raw)?;
        }

        Ok(settings)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<usize, LlmConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(LlmConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = ProviderSettings::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_secs, 60);
        assert_eq!(settings.max_concurrent, 16);
        assert_eq!(
            settings.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            ProviderSettings::from_lookup(lookup(&[])),
            Err(LlmConfigError::MissingApiKey)
        );
        assert_eq!(
            ProviderSettings::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])),
            Err(LlmConfigError::MissingApiKey)
        );
    }

    #[test]
    fn test_overrides() {
        let settings = ProviderSettings::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("COACH_LLM_BASE_URL", "http://localhost:8080/v1/"),
            ("COACH_LLM_TIMEOUT_SECS", "15"),
            ("COACH_LLM_MAX_CONCURRENT", "4"),
        ]))
        .unwrap();

        assert_eq!(settings.completions_url(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(settings.timeout_secs, 15);
        assert_eq!(settings.max_concurrent, 4);
    }

    #[test]
    fn test_invalid_number() {
        let result = ProviderSettings::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("COACH_LLM_TIMEOUT_SECS", "0"),
        ]));
        assert!(matches!(
            result,
            Err(LlmConfigError::InvalidValue { key: "COACH_LLM_TIMEOUT_SECS", .. })
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let settings = ProviderSettings::new("sk-secret");
        assert!(!format!("{:?}", settings).contains("sk-secret"));
    }
}
