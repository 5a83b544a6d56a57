//! Coaching personas
//!
//! A [`Persona`] is immutable `'static` data: identity, base instruction,
//! scenario catalog, prompt framing, canned fallbacks and reply parameters.
//! The orchestrator is generic over it; no control flow lives here.

mod anne;
mod hiro;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoachError;
use crate::scenario::Scenario;

/// Greetings recognised for every persona
pub const BASE_GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good evening",
    "greetings",
    "hallo",
];

/// Sampling parameters for a completion call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub presence_penalty: Option<f64>,
    pub frequency_penalty: Option<f64>,
}

impl ModelParams {
    pub const fn plain(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }
}

/// Framing for welcome and greeting prompts
#[derive(Debug, Clone, Copy)]
pub struct IntroFraming {
    pub request: &'static str,
    pub bullets: &'static [&'static str],
    pub closing: &'static str,
}

/// Framing for the scenario / open-ended reply prompt
#[derive(Debug, Clone, Copy)]
pub struct ReplyFraming {
    pub context_label: &'static str,
    pub focus_label: &'static str,
    pub scenario_guidance: &'static [&'static str],
    pub scenario_question: &'static str,
    pub open_guidance: &'static [&'static str],
    pub open_closing: &'static str,
}

/// Framing for crisis and warning prompts
#[derive(Debug, Clone, Copy)]
pub struct SafetyFraming {
    pub situation: &'static str,
    pub requirements: &'static [&'static str],
    pub tone: Option<&'static str>,
    pub instructions: &'static [&'static str],
    pub closing_cue: &'static str,
}

/// Fixed strings used whenever the provider fails.
///
/// `crisis` and `warning` are templates with `{name}`, `{number}`, `{hours}`
/// and `{directory}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct CannedReplies {
    pub welcome: &'static str,
    pub greeting: &'static str,
    pub apology: &'static str,
    pub crisis: &'static str,
    pub warning: &'static str,
}

/// Persona identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaId {
    AnneRosental,
    HiroLin,
}

impl PersonaId {
    pub const ALL: [PersonaId; 2] = [PersonaId::AnneRosental, PersonaId::HiroLin];

    pub fn persona(self) -> &'static Persona {
        match self {
            PersonaId::AnneRosental => &anne::PERSONA,
            PersonaId::HiroLin => &hiro::PERSONA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::AnneRosental => "anne_rosental",
            PersonaId::HiroLin => "hiro_lin",
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaId {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anne_rosental" | "anne" | "dr. anne rosental" => Ok(PersonaId::AnneRosental),
            "hiro_lin" | "hiro" | "hiro lin" => Ok(PersonaId::HiroLin),
            _ => Err(CoachError::UnknownPersona(s.to_string())),
        }
    }
}

/// Immutable persona definition
#[derive(Debug)]
pub struct Persona {
    pub id: PersonaId,
    pub name: &'static str,
    /// Lower-case first name used in greeting variants ("hi anne")
    pub greeting_name: &'static str,
    pub title: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
    pub specialties: &'static [&'static str],
    pub style: &'static str,
    pub base_prompt: &'static str,
    pub scenarios: &'static [Scenario],
    pub reply_params: ModelParams,
    pub reply_framing: ReplyFraming,
    pub welcome_framing: IntroFraming,
    pub greeting_framing: IntroFraming,
    pub crisis_framing: SafetyFraming,
    pub warning_framing: SafetyFraming,
    pub canned: CannedReplies,
}

impl Persona {
    /// Base greetings plus the persona-name-suffixed variants
    pub fn greeting_phrases(&self) -> Vec<String> {
        let mut phrases: Vec<String> = BASE_GREETINGS.iter().map(|g| g.to_string()).collect();
        for lead in ["hi", "hello", "hey"] {
            phrases.push(format!("{} {}", lead, self.greeting_name));
        }
        phrases
    }

    pub fn summary(&self) -> PersonaSummary {
        PersonaSummary {
            id: self.id,
            name: self.name,
            title: self.title,
            experience: self.experience,
            description: self.description,
            specialties: self.specialties,
            style: self.style,
        }
    }
}

/// Selection-card view of a persona
#[derive(Debug, Clone, Serialize)]
pub struct PersonaSummary {
    pub id: PersonaId,
    pub name: &'static str,
    pub title: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
    pub specialties: &'static [&'static str],
    pub style: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_complete() {
        for id in PersonaId::ALL {
            let persona = id.persona();
            assert_eq!(persona.id, id);
            assert_eq!(persona.scenarios.len(), 20, "{}", persona.name);
            assert!(persona.scenarios.iter().all(|s| !s.triggers.is_empty()));
        }
    }

    #[test]
    fn test_persona_id_parsing() {
        assert_eq!("anne".parse::<PersonaId>().unwrap(), PersonaId::AnneRosental);
        assert_eq!(" Hiro_Lin ".parse::<PersonaId>().unwrap(), PersonaId::HiroLin);
        assert!(matches!(
            "freud".parse::<PersonaId>(),
            Err(CoachError::UnknownPersona(_))
        ));
    }

    #[test]
    fn test_greeting_phrases_include_name_variants() {
        let phrases = PersonaId::HiroLin.persona().greeting_phrases();
        assert!(phrases.contains(&"hey hiro".to_string()));
        assert!(phrases.contains(&"hallo".to_string()));
    }

    #[test]
    fn test_canned_safety_templates_reference_helpline() {
        for id in PersonaId::ALL {
            let canned = id.persona().canned;
            for template in [canned.crisis, canned.warning] {
                assert!(template.contains("{name}"));
                assert!(template.contains("{number}"));
                assert!(template.contains("{directory}"));
            }
        }
    }

    #[test]
    fn test_reply_params_differ_by_persona() {
        let anne = PersonaId::AnneRosental.persona().reply_params;
        let hiro = PersonaId::HiroLin.persona().reply_params;
        assert_eq!(anne.max_tokens, 300);
        assert_eq!(hiro.max_tokens, 250);
        assert_eq!(anne.presence_penalty, Some(0.3));
        assert_eq!(hiro.frequency_penalty, Some(0.2));
    }
}
