//! Prompt assembly
//!
//! Pure functions that turn persona data, the user's message, the matched
//! scenario and the resolved helpline into system prompts. Nothing here
//! touches session state or the provider.

use crate::helpline::{HelplineEntry, INTERNATIONAL_DIRECTORY};
use crate::persona::{IntroFraming, Persona, SafetyFraming};
use crate::scenario::Scenario;

/// Instruction used when compressing older turns into a summary
pub const SUMMARY_INSTRUCTION: &str = "Summarize this coaching conversation in 2-3 sentences, focusing on key goals, obstacles, and action items.";

const WELCOME_SCENE: &str =
    "You are greeting a new client who just selected you as their coach for the first time.";
const GREETING_SCENE: &str = "A client just said hello/hi to you.";

fn bullets(items: &[&str]) -> String {
    items.iter().map(|item| format!("- {}\n", item)).collect()
}

fn numbered(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}\n", i + 1, item))
        .collect()
}

fn intro(persona: &Persona, scene: &str, framing: &IntroFraming) -> String {
    format!(
        "{}\n\n{}\n\n{}\n{}\n{}\n",
        persona.base_prompt,
        scene,
        framing.request,
        bullets(framing.bullets),
        framing.closing
    )
}

/// First-contact welcome prompt
pub fn welcome_prompt(persona: &Persona) -> String {
    intro(persona, WELCOME_SCENE, &persona.welcome_framing)
}

/// Reply-to-a-greeting prompt
pub fn greeting_prompt(persona: &Persona) -> String {
    intro(persona, GREETING_SCENE, &persona.greeting_framing)
}

fn safety_head(persona: &Persona, banner: &str, lead: &str, user_message: &str, framing: &SafetyFraming) -> String {
    let mut prompt = format!(
        "{}\n\n=== {} ===\n\n{} \"{}\"\n\nSITUATION: {}\n\nRESPONSE REQUIREMENTS:\n{}",
        persona.base_prompt,
        banner,
        lead,
        user_message,
        framing.situation,
        bullets(framing.requirements)
    );
    if let Some(tone) = framing.tone {
        prompt.push_str(&format!("\nTONE: {}\n", tone));
    }
    prompt
}

/// Crisis-tier prompt; the helpline block is mandatory
pub fn crisis_prompt(persona: &Persona, user_message: &str, helpline: &HelplineEntry) -> String {
    let framing = &persona.crisis_framing;
    let mut prompt = safety_head(
        persona,
        "CRITICAL SAFETY SITUATION",
        "The client just shared:",
        user_message,
        framing,
    );
    prompt.push_str(&format!(
        "\nHELPLINE INFORMATION (MUST include this exactly):\n\
         - Helpline Name: {}\n\
         - Number: {}\n\
         - Hours: {}\n\
         - International resources: {}\n\n\
         CRITICAL INSTRUCTIONS:\n{}\n{}\n",
        helpline.name,
        helpline.number,
        helpline.hours,
        INTERNATIONAL_DIRECTORY,
        numbered(framing.instructions),
        framing.closing_cue
    ));
    prompt
}

/// Warning-tier prompt; the helpline is offered, not pressed
pub fn warning_prompt(persona: &Persona, user_message: &str, helpline: &HelplineEntry) -> String {
    let framing = &persona.warning_framing;
    let mut prompt = safety_head(
        persona,
        "EARLY WARNING SITUATION",
        "The client shared:",
        user_message,
        framing,
    );
    prompt.push_str(&format!(
        "\nHELPLINE INFORMATION (include gently):\n\
         - {}\n\
         - International resources: {}\n\n\
         INSTRUCTIONS:\n{}\n{}\n",
        helpline.contact_line(),
        INTERNATIONAL_DIRECTORY,
        numbered(framing.instructions),
        framing.closing_cue
    ));
    prompt
}

/// Augmented system prompt for a normal coaching turn
pub fn reply_prompt(persona: &Persona, user_message: &str, scenario: Option<&Scenario>) -> String {
    let framing = &persona.reply_framing;
    let mut prompt = format!(
        "{}\n\n=== CURRENT INTERACTION CONTEXT ===\n\n",
        persona.base_prompt
    );

    match scenario {
        Some(scenario) => prompt.push_str(&format!(
            "DETECTED SCENARIO: {}\n\n{}:\n{}\n\n{}:\n{}\nIMPORTANT: \n{}\n\
             The client's exact words: \"{}\"\n\n{}\n",
            scenario.name,
            framing.context_label,
            scenario.context,
            framing.focus_label,
            bullets(scenario.focus),
            bullets(framing.scenario_guidance),
            user_message,
            framing.scenario_question
        )),
        None => prompt.push_str(&format!(
            "NO SPECIFIC SCENARIO DETECTED\n\nThe client shared: \"{}\"\n\n\
             GUIDANCE:\n{}\n{}\n",
            user_message,
            bullets(framing.open_guidance),
            framing.open_closing
        )),
    }

    prompt
}

/// System message carrying the rolling summary into a reply call
pub fn summary_context(summary: &str) -> String {
    format!("Previous session context: {}", summary)
}

/// Fill `{name}`, `{number}`, `{hours}` and `{directory}` in a canned template.
pub fn render_helpline_template(template: &str, helpline: &HelplineEntry) -> String {
    template
        .replace("{name}", helpline.name)
        .replace("{number}", helpline.number)
        .replace("{hours}", helpline.hours)
        .replace("{directory}", INTERNATIONAL_DIRECTORY)
}

/// Append the contact line when the helpline name or number is missing from `text`.
pub fn ensure_helpline(mut text: String, helpline: &HelplineEntry) -> String {
    if !text.contains(helpline.name) || !text.contains(helpline.number) {
        tracing::warn!("Safety fallback lacked helpline details, appending contact line");
        text.push_str(&format!(
            "\n\n- {}\n- International helplines: {}",
            helpline.contact_line(),
            INTERNATIONAL_DIRECTORY
        ));
    }
    text
}

/// Canned crisis message with the helpline guaranteed present
pub fn crisis_fallback(persona: &Persona, helpline: &HelplineEntry) -> String {
    ensure_helpline(render_helpline_template(persona.canned.crisis, helpline), helpline)
}

/// Canned warning message with the helpline guaranteed present
pub fn warning_fallback(persona: &Persona, helpline: &HelplineEntry) -> String {
    ensure_helpline(render_helpline_template(persona.canned.warning, helpline), helpline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpline::HelplineDirectory;
    use crate::persona::PersonaId;

    #[test]
    fn test_reply_prompt_with_scenario() {
        let persona = PersonaId::AnneRosental.persona();
        let scenario = &persona.scenarios[0];
        let prompt = reply_prompt(persona, "I'm overwhelmed", Some(scenario));

        assert!(prompt.starts_with(persona.base_prompt));
        assert!(prompt.contains("DETECTED SCENARIO: Emotional Overwhelm"));
        assert!(prompt.contains("PSYCHOLOGICAL CONTEXT:"));
        assert!(prompt.contains("THERAPEUTIC FOCUS AREAS:\n- Create immediate emotional safety"));
        assert!(prompt.contains("do NOT reference it explicitly"));
        assert!(prompt.contains("The client's exact words: \"I'm overwhelmed\""));
    }

    #[test]
    fn test_reply_prompt_without_scenario() {
        let persona = PersonaId::HiroLin.persona();
        let prompt = reply_prompt(persona, "Tell me about planning", None);

        assert!(prompt.contains("NO SPECIFIC SCENARIO DETECTED"));
        assert!(prompt.contains("The client shared: \"Tell me about planning\""));
        assert!(prompt.contains("2-4 sentences maximum"));
        assert!(!prompt.contains("DETECTED SCENARIO:"));
    }

    #[test]
    fn test_crisis_prompt_carries_helpline() {
        let persona = PersonaId::AnneRosental.persona();
        let helpline = HelplineDirectory::lookup("GB");
        let prompt = crisis_prompt(persona, "I want to die", helpline);

        assert!(prompt.contains("=== CRITICAL SAFETY SITUATION ==="));
        assert!(prompt.contains("- Helpline Name: Samaritans"));
        assert!(prompt.contains("- Number: 116 123"));
        assert!(prompt.contains("- International resources: findahelpline.com"));
        assert!(prompt.contains("TONE: Deeply caring but firm"));
        assert!(prompt.contains("1. Generate a response in Anne's compassionate"));
    }

    #[test]
    fn test_hiro_safety_prompts_have_no_tone_line() {
        let persona = PersonaId::HiroLin.persona();
        let helpline = HelplineDirectory::lookup("US");
        let prompt = warning_prompt(persona, "I feel numb", helpline);

        assert!(prompt.contains("=== EARLY WARNING SITUATION ==="));
        assert!(prompt.contains("- 988 Suicide & Crisis Lifeline: 988 (24/7)"));
        assert!(!prompt.contains("TONE:"));
    }

    #[test]
    fn test_crisis_fallback_renders_helpline() {
        let helpline = HelplineDirectory::lookup("BD");
        for id in PersonaId::ALL {
            let text = crisis_fallback(id.persona(), helpline);
            assert!(text.contains("- Kaan Pete Roi: 09612-784784 (8 AM - 10 PM daily)"));
            assert!(text.contains("findahelpline.com"));
            assert!(!text.contains('{'));
        }
    }

    #[test]
    fn test_ensure_helpline_appends_when_missing() {
        let helpline = HelplineDirectory::lookup("DE");
        let text = ensure_helpline("Please reach out for help.".to_string(), helpline);

        assert!(text.contains("TelefonSeelsorge"));
        assert!(text.contains("0800 111 0 111"));

        let complete = ensure_helpline(text.clone(), helpline);
        assert_eq!(complete, text);
    }

    #[test]
    fn test_intro_prompts_differ() {
        let persona = PersonaId::AnneRosental.persona();
        let welcome = welcome_prompt(persona);
        let greeting = greeting_prompt(persona);

        assert!(welcome.contains("selected you as their coach for the first time"));
        assert!(greeting.contains("A client just said hello/hi to you."));
        assert_ne!(welcome, greeting);
    }
}
