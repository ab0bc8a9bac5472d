// Best-effort parser for the provider's free-text reply.
//
// The prompt asks for an "Explanation" heading followed by a "Safety Tips"
// heading with bulleted tips. Models mostly comply; this parser tolerates
// `-`/`•`/`*` bullets, numbered lists, and missing sections.

use super::traits::AiVerdict;

/// Default tips substituted when the reply contains no parseable tip list.
const FALLBACK_TIPS: [&str; 5] = [
    "Verify the sender's identity through official channels",
    "Look for spelling and grammar errors which are common in scams",
    "Check if the offer seems too good to be true (it probably is)",
    "Contact the organization directly using contact info from their official website",
    "Never share OTP, PIN, or password with anyone",
];

/// Build an `AiVerdict` from the provider's raw reply text.
pub fn verdict_from_text(raw: &str) -> AiVerdict {
    let (explanation, safety_tips) = parse_sections(raw);
    let (verdict, badge_class, verdict_text) = derive_verdict(&explanation);
    AiVerdict {
        verdict: verdict.to_string(),
        verdict_text: verdict_text.to_string(),
        badge_class: badge_class.to_string(),
        explanation,
        safety_tips,
    }
}

/// Split the reply into the explanation paragraph and the tip list.
fn parse_sections(raw: &str) -> (String, Vec<String>) {
    let mut explanation = String::new();
    let mut tips: Vec<String> = Vec::new();
    let mut in_explanation = false;
    let mut in_tips = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        if lowered.starts_with("explanation") {
            in_explanation = true;
            in_tips = false;
            // Heading may carry the first sentence: "Explanation: ..."
            let rest = trimmed["explanation".len()..]
                .trim_start_matches(|c| c == ':' || c == ' ')
                .trim();
            explanation.push_str(rest);
        } else if lowered.starts_with("safety tips") {
            in_explanation = false;
            in_tips = true;
        } else if in_explanation && !trimmed.is_empty() {
            if !explanation.is_empty() {
                explanation.push(' ');
            }
            explanation.push_str(trimmed);
        } else if in_tips && !trimmed.is_empty() {
            if let Some(tip) = parse_tip_line(trimmed) {
                tips.push(tip);
            }
        }
    }

    if tips.is_empty() {
        tips = FALLBACK_TIPS.iter().map(|t| t.to_string()).collect();
    }

    (explanation.trim().to_string(), tips)
}

/// Accept `- tip`, `• tip`, `* tip`, and `1. tip` lines; reject prose.
fn parse_tip_line(line: &str) -> Option<String> {
    if let Some(rest) = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .or_else(|| line.strip_prefix('*'))
    {
        return Some(rest.trim().to_string());
    }

    // Numbered list: strip "N." and any following space
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && line[digits..].starts_with('.') {
        return Some(line[digits + 1..].trim().to_string());
    }

    None
}

/// Map the explanation's wording to a verdict. The provider gives prose,
/// not a label; danger terms plus an amplifier ("likely", "probably",
/// "high risk") escalate to Likely Scam, danger terms alone to Suspicious.
fn derive_verdict(explanation: &str) -> (&'static str, &'static str, &'static str) {
    const DANGER_TERMS: [&str; 5] = ["scam", "fraud", "suspicious", "dangerous", "malicious"];
    const AMPLIFIERS: [&str; 3] = ["likely", "probably", "high risk"];

    let lowered = explanation.to_lowercase();
    if DANGER_TERMS.iter().any(|t| lowered.contains(t)) {
        if AMPLIFIERS.iter().any(|a| lowered.contains(a)) {
            (
                "Likely Scam",
                "danger",
                "⚠️ DANGER! This message shows strong signs of being a financial scam",
            )
        } else {
            (
                "Suspicious",
                "warning",
                "⚠️ This message contains suspicious elements - proceed with caution",
            )
        }
    } else {
        (
            "Possibly Safe",
            "safe",
            "This message appears to be safe",
        )
    }
}
