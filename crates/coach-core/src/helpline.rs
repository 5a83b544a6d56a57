//! Localized crisis-helpline directory

use serde::Serialize;

/// Generic international directory, quoted in every safety message
pub const INTERNATIONAL_DIRECTORY: &str = "findahelpline.com";

/// Crisis contact for one country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelplineEntry {
    pub name: &'static str,
    pub number: &'static str,
    pub hours: &'static str,
}

impl HelplineEntry {
    /// `Name: number (hours)`
    pub fn contact_line(&self) -> String {
        format!("{}: {} ({})", self.name, self.number, self.hours)
    }
}

const US: HelplineEntry = HelplineEntry {
    name: "988 Suicide & Crisis Lifeline",
    number: "988",
    hours: "24/7",
};

const GB: HelplineEntry = HelplineEntry {
    name: "Samaritans",
    number: "116 123",
    hours: "24/7",
};

const DE: HelplineEntry = HelplineEntry {
    name: "TelefonSeelsorge",
    number: "0800 111 0 111",
    hours: "24/7",
};

const BD: HelplineEntry = HelplineEntry {
    name: "Kaan Pete Roi",
    number: "09612-784784",
    hours: "8 AM - 10 PM daily",
};

const DEFAULT: HelplineEntry = HelplineEntry {
    name: "International Association for Suicide Prevention",
    number: "Visit findahelpline.com",
    hours: "24/7",
};

const ENTRIES: &[(&str, HelplineEntry)] = &[("US", US), ("GB", GB), ("DE", DE), ("BD", BD)];

/// Static country-code → helpline table
pub struct HelplineDirectory;

impl HelplineDirectory {
    /// Exact-match lookup; unmapped codes get the international fallback.
    pub fn lookup(country_code: &str) -> &'static HelplineEntry {
        ENTRIES
            .iter()
            .find(|(code, _)| *code == country_code)
            .map(|(_, entry)| entry)
            .unwrap_or(&DEFAULT)
    }

    pub fn fallback() -> &'static HelplineEntry {
        &DEFAULT
    }

    /// Country codes with a dedicated entry
    pub fn supported_codes() -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|(code, _)| *code)
    }
}
