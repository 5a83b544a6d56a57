//! Coach LLM - hosted completion provider
//!
//! Implements [`coach_core::LLMProvider`] over any OpenAI-compatible
//! `/chat/completions` endpoint. Configured from the environment:
//!
//! | Variable | Default |
//! |---|---|
//! | `OPENAI_API_KEY` | required |
//! | `COACH_LLM_BASE_URL` | `https://api.openai.com/v1` |
//! | `COACH_LLM_TIMEOUT_SECS` | `60` |
//! | `COACH_LLM_MAX_CONCURRENT` | `16` |

pub mod config;
pub mod openai;

pub use config::{LlmConfigError, ProviderSettings};
pub use openai::{build_body, error_for_status, parse_response, ConcurrencyLimiter, OpenAIProvider};
