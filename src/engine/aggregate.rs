// Explanation/tip aggregator — reduces match records to display strings.
//
// Deterministic reduction in record order. Explanations dedupe so merged
// phrase boilerplate appears once; tips dedupe case-insensitively and cap
// at a display-friendly count.

use super::matcher::MatchRecord;

/// Maximum number of unique tips returned per assessment.
pub const MAX_TIPS: usize = 6;

/// Explanation used when no pattern matched.
const NO_MATCH_EXPLANATION: &str =
    "No known scam signals were found in this message. Stay alert for unusual requests.";

/// Generic tip set returned when no pattern matched.
const DEFAULT_TIPS: [&str; 5] = [
    "Verify the sender's identity through official channels",
    "Look for spelling and grammar errors which are common in scams",
    "Check if the offer seems too good to be true (it probably is)",
    "Contact the organization directly using contact info from their official website",
    "Never share OTP, PIN, or password with anyone",
];

/// Reduce match records into one explanation string and a deduplicated,
/// capped tip list.
pub fn summarize(matches: &[MatchRecord]) -> (String, Vec<String>) {
    if matches.is_empty() {
        return (
            NO_MATCH_EXPLANATION.to_string(),
            DEFAULT_TIPS.iter().map(|t| t.to_string()).collect(),
        );
    }

    let mut explanation_parts: Vec<&str> = Vec::new();
    let mut seen_explanations: Vec<String> = Vec::new();
    for record in matches {
        let trimmed = record.explanation.trim();
        if trimmed.is_empty() {
            continue;
        }
        let folded = trimmed.to_lowercase();
        if seen_explanations.contains(&folded) {
            continue;
        }
        seen_explanations.push(folded);
        explanation_parts.push(trimmed);
    }

    let mut tips: Vec<String> = Vec::new();
    let mut seen_tips: Vec<String> = Vec::new();
    for record in matches {
        for tip in &record.safety_tips {
            let folded = tip.to_lowercase();
            if seen_tips.contains(&folded) {
                continue;
            }
            seen_tips.push(folded);
            tips.push(tip.clone());
            if tips.len() == MAX_TIPS {
                return (explanation_parts.join(" "), tips);
            }
        }
    }

    (explanation_parts.join(" "), tips)
}
