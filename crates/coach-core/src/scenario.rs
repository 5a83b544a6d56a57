//! Coaching scenario detection
//!
//! A persona carries an ordered catalog of scenarios. The matcher returns the
//! first scenario (in catalog order) with any trigger contained in the input;
//! catalog order is the priority order, so specificity and trigger counts
//! play no role.

use serde::Serialize;

use crate::triage::{normalize, MatchMode, PhraseSet};

/// Topic descriptor used as internal guidance for a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub context: &'static str,
    pub focus: &'static [&'static str],
}

/// First-match scenario lookup over a fixed catalog
#[derive(Debug, Clone)]
pub struct ScenarioMatcher {
    catalog: &'static [Scenario],
    triggers: Vec<PhraseSet>,
}

impl ScenarioMatcher {
    pub fn new(catalog: &'static [Scenario]) -> Self {
        let triggers = catalog
            .iter()
            .map(|s| PhraseSet::new(s.triggers.iter(), MatchMode::Substring))
            .collect();
        Self { catalog, triggers }
    }

    /// Best-matching scenario for `text`, if any.
    pub fn find(&self, text: &str) -> Option<&'static Scenario> {
        let normalized = normalize(text);
        self.catalog
            .iter()
            .zip(&self.triggers)
            .find(|(_, triggers)| triggers.find_in(&normalized).is_some())
            .map(|(scenario, _)| scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaId;

    const CATALOG: &[Scenario] = &[
        Scenario {
            name: "First",
            triggers: &["alpha", "Shared"],
            context: "first context",
            focus: &["one"],
        },
        Scenario {
            name: "Second",
            triggers: &["beta", "shared"],
            context: "second context",
            focus: &["two"],
        },
    ];

    #[test]
    fn test_first_declared_wins() {
        let matcher = ScenarioMatcher::new(CATALOG);
        assert_eq!(matcher.find("beta then SHARED").map(|s| s.name), Some("First"));
        assert_eq!(matcher.find("only beta").map(|s| s.name), Some("Second"));
        assert!(matcher.find("nothing here").is_none());
    }

    #[test]
    fn test_catalog_order_beats_position_in_text() {
        let matcher = ScenarioMatcher::new(PersonaId::AnneRosental.persona().scenarios);
        let hit = matcher
            .find("I'm so lonely and honestly overwhelmed by everything")
            .expect("scenario");
        assert_eq!(hit.name, "Emotional Overwhelm");
    }

    #[test]
    fn test_mixed_case_triggers_match() {
        let matcher = ScenarioMatcher::new(PersonaId::HiroLin.persona().scenarios);
        let hit = matcher.find("Honestly, WHO AM I these days").expect("scenario");
        assert_eq!(hit.name, "Identity Crisis or Life Transition");
    }
}
