//! Keyword-based safety triage
//!
//! Maps raw user text to a [`SeverityTier`] by scanning static keyword sets.
//! This is an explainable, zero-latency heuristic with no model dependency.
//! It is NOT a clinical risk assessment: it misses paraphrases and can fire
//! on unrelated words that contain a keyword.
//!
//! Matching rules:
//! - input is case-folded and typographic apostrophes (`’`) are folded to `'`
//! - Crisis keywords are checked first and win over Warning
//! - [`MatchMode::Substring`] (default) is plain containment, so "jump"
//!   matches "jumped"; [`MatchMode::WordBoundary`] only matches whole
//!   words/phrases, trading recall for precision

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Red-zone markers: self-harm, violence, psychosis, eating disorders, abuse
pub const CRISIS_KEYWORDS: &[&str] = &[
    "want to die",
    "kill myself",
    "end it all",
    "suicide",
    "hurt myself",
    "cut myself",
    "better off without me",
    "planning to hurt",
    "end my life",
    "no reason to live",
    "take my life",
    "overdose",
    "jump",
    "hang myself",
    "hurt someone",
    "kill someone",
    "attack",
    "violent thoughts",
    "can't control anger",
    "might do something",
    "hurt them",
    "make them pay",
    "hear voices",
    "voices telling me",
    "people watching me",
    "controlling me",
    "not real",
    "losing reality",
    "dissociating",
    "out of body",
    "starving myself",
    "purging",
    "make myself vomit",
    "he hits me",
    "she hits me",
    "partner hits",
    "physically abusive",
    "scared to go home",
    "threatens me",
    "hurts me physically",
];

/// Amber-zone markers: depression, exhaustion, early distress
pub const WARNING_KEYWORDS: &[&str] = &[
    "feel numb",
    "nothing matters",
    "tired of life",
    "wish i could disappear",
    "can't see the point",
    "can't handle this much longer",
    "want to give up",
    "empty inside",
    "no energy for anything",
    "can't get out of bed",
    "haven't eaten properly in days",
    "feel guilty whenever i eat",
    "constantly weighing myself",
    "keep reliving what happened",
    "nightmares",
    "panic attacks",
    "feel disconnected since",
    "haven't showered",
    "can't take care of myself",
    "drink every night to cope",
    "can't function without",
];

/// Severity tier, ordered `None < Warning < Crisis`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    None,
    Warning,
    Crisis,
}

/// How phrases are compared against normalized input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment
    #[default]
    Substring,
    /// Whole word / whole phrase only
    WordBoundary,
}

/// Case-fold input the same way phrases are folded.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

/// A set of normalized phrases with a fixed match mode
#[derive(Debug, Clone)]
pub struct PhraseSet {
    phrases: Vec<String>,
    mode: MatchMode,
    pattern: Option<Regex>,
}

impl PhraseSet {
    pub fn new<I, S>(phrases: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref().trim()))
            .filter(|p| !p.is_empty())
            .collect();

        let pattern = match mode {
            MatchMode::Substring => None,
            MatchMode::WordBoundary if phrases.is_empty() => None,
            MatchMode::WordBoundary => {
                let alternation = phrases
                    .iter()
                    .map(|p| regex::escape(p))
                    .collect::<Vec<_>>()
                    .join("|");
                match Regex::new(&format!(r"\b(?:{})\b", alternation)) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        tracing::warn!(
                            "Phrase pattern rejected ({}), falling back to substring matching",
                            e
                        );
                        None
                    }
                }
            }
        };

        Self {
            phrases,
            mode,
            pattern,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// First matching phrase in `normalized` (already passed through [`normalize`]).
    pub fn find_in(&self, normalized: &str) -> Option<&str> {
        match &self.pattern {
            Some(re) => {
                let hit = re.find(normalized)?;
                self.phrases
                    .iter()
                    .find(|p| p.as_str() == hit.as_str())
                    .map(String::as_str)
            }
            None => self
                .phrases
                .iter()
                .find(|p| normalized.contains(p.as_str()))
                .map(String::as_str),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.find_in(&normalize(text)).is_some()
    }
}

/// Classification outcome with the keyword that decided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub tier: SeverityTier,
    pub keyword: Option<String>,
}

impl Assessment {
    pub fn clear() -> Self {
        Self {
            tier: SeverityTier::None,
            keyword: None,
        }
    }
}

/// Narrow seam for swapping the triage strategy
pub trait SafetyClassifier: Send + Sync {
    fn assess(&self, text: &str) -> Assessment;

    fn classify(&self, text: &str) -> SeverityTier {
        self.assess(text).tier
    }
}

/// Static keyword-list classifier
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    crisis: PhraseSet,
    warning: PhraseSet,
}

impl KeywordClassifier {
    pub fn new<C, W, S>(crisis: C, warning: W, mode: MatchMode) -> Self
    where
        C: IntoIterator<Item = S>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            crisis: PhraseSet::new(crisis, mode),
            warning: PhraseSet::new(warning, mode),
        }
    }

    /// Built-in keyword lists with the given match mode
    pub fn with_mode(mode: MatchMode) -> Self {
        Self::new(CRISIS_KEYWORDS, WARNING_KEYWORDS, mode)
    }

    pub fn mode(&self) -> MatchMode {
        self.crisis.mode()
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::with_mode(MatchMode::Substring)
    }
}

impl SafetyClassifier for KeywordClassifier {
    fn assess(&self, text: &str) -> Assessment {
        let normalized = normalize(text);

        if let Some(keyword) = self.crisis.find_in(&normalized) {
            return Assessment {
                tier: SeverityTier::Crisis,
                keyword: Some(keyword.to_string()),
            };
        }

        if let Some(keyword) = self.warning.find_in(&normalized) {
            return Assessment {
                tier: SeverityTier::Warning,
                keyword: Some(keyword.to_string()),
            };
        }

        Assessment::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_crisis_detection() {
        let classifier = KeywordClassifier::default();

        assert_eq!(classifier.classify("I want to end my life"), SeverityTier::Crisis);
        assert_eq!(classifier.classify("I keep thinking about SUICIDE"), SeverityTier::Crisis);
        assert_eq!(classifier.classify("Sometimes I hear voices"), SeverityTier::Crisis);
    }

    #[test]
    fn test_crisis_wins_over_warning() {
        let classifier = KeywordClassifier::default();
        let text = "I feel numb and I want to die";

        let assessment = classifier.assess(text);
        assert_eq!(assessment.tier, SeverityTier::Crisis);
        assert_eq!(assessment.keyword.as_deref(), Some("want to die"));
    }

    #[test]
    fn test_warning_detection() {
        let classifier = KeywordClassifier::default();

        assert_eq!(
            classifier.classify("Honestly I can't get out of bed most days"),
            SeverityTier::Warning
        );
        assert_eq!(classifier.classify("I Wish I Could Disappear"), SeverityTier::Warning);
    }

    #[test]
    fn test_typographic_apostrophe_is_folded() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            classifier.classify("I can\u{2019}t take care of myself"),
            SeverityTier::Warning
        );
    }

    #[test]
    fn test_plain_text_is_clear() {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.assess("My manager praised my report"), Assessment::clear());
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            classifier.classify("I jumped at the chance to lead"),
            SeverityTier::Crisis
        );
    }

    #[test]
    fn test_word_boundary_mode_skips_inner_words() {
        let classifier = KeywordClassifier::with_mode(MatchMode::WordBoundary);

        assert_eq!(classifier.mode(), MatchMode::WordBoundary);
        assert_eq!(
            classifier.classify("I jumped at the chance to lead"),
            SeverityTier::None
        );
        assert_eq!(classifier.classify("I might jump"), SeverityTier::Crisis);
        assert_eq!(classifier.classify("I can't see the point."), SeverityTier::Warning);
    }

    #[test]
    fn test_phrase_set_ignores_blank_entries() {
        let set = PhraseSet::new(["", "  ", "Hello"], MatchMode::WordBoundary);
        assert_eq!(set.phrases(), &["hello".to_string()]);
        assert!(set.matches("well, HELLO there"));
        assert!(!set.matches("othello"));
    }

    proptest! {
        #[test]
        fn crisis_keyword_always_classifies_crisis(
            idx in 0..CRISIS_KEYWORDS.len(),
            warn_idx in 0..WARNING_KEYWORDS.len(),
            prefix in "[0-9 .,]{0,16}",
            suffix in "[0-9 .,]{0,16}",
            upper in any::<bool>(),
            with_warning in any::<bool>(),
        ) {
            let keyword = if upper {
                CRISIS_KEYWORDS[idx].to_uppercase()
            } else {
                CRISIS_KEYWORDS[idx].to_string()
            };
            let warning = if with_warning { WARNING_KEYWORDS[warn_idx] } else { "" };
            let text = format!("{prefix}{warning} {keyword}{suffix}");

            prop_assert_eq!(KeywordClassifier::default().classify(&text), SeverityTier::Crisis);
        }

        #[test]
        fn warning_without_crisis_classifies_warning(
            idx in 0..WARNING_KEYWORDS.len(),
            prefix in "[0-9 .,]{0,16}",
            suffix in "[0-9 .,]{0,16}",
        ) {
            let keyword = WARNING_KEYWORDS[idx];
            // "panic attacks" carries the crisis keyword "attack"
            prop_assume!(!CRISIS_KEYWORDS.iter().any(|c| keyword.contains(c)));

            let text = format!("{prefix}{}{suffix}", keyword.to_uppercase());
            prop_assert_eq!(KeywordClassifier::default().classify(&text), SeverityTier::Warning);
        }

        #[test]
        fn keyword_free_text_is_none(text in "[0-9 .,!?]{0,64}") {
            prop_assert_eq!(KeywordClassifier::default().classify(&text), SeverityTier::None);
        }
    }
}
