// Matcher/scorer — the keyword, category, phrase, and structural passes.
//
// Runs in a fixed order over one message and accumulates per-pattern match
// records. All three rule kinds merge onto a single key (pattern display
// name, category label, or a phrase rule's target pattern), so each key
// yields at most one record per call and the total stays auditable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::detectors;
use super::registry::{Registry, Severity};

/// Score added for an exact keyword match within a pattern.
const EXACT_KEYWORD_SCORE: u32 = 15;
/// Score added when only the first word of a multi-word keyword appears.
const PARTIAL_KEYWORD_SCORE: u32 = 8;
/// Score added per matched category keyword.
const CATEGORY_KEYWORD_SCORE: u32 = 8;
/// Fixed contribution of the URL detector.
const URL_SCORE: u32 = 40;
/// Fixed contribution of the phone number detector.
const PHONE_SCORE: u32 = 25;

/// One matched pattern (or category bucket, or structural signal) with the
/// evidence that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub pattern: String,
    pub score: u32,
    pub keywords: Vec<String>,
    pub explanation: String,
    pub safety_tips: Vec<String>,
    pub severity: Severity,
}

/// Record fields used only when a merge key is seen for the first time.
/// Later contributions to the same key add score and keywords but never
/// replace the explanation, tips, or severity.
struct RecordSeed<'a> {
    name: &'a str,
    explanation: String,
    safety_tips: Vec<String>,
    severity: Severity,
}

/// Accumulator enforcing the one-record-per-key invariant while preserving
/// first-match order.
struct ScoreBook {
    records: Vec<MatchRecord>,
    index: HashMap<String, usize>,
}

impl ScoreBook {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn credit(&mut self, seed: RecordSeed<'_>, points: u32, keywords: Vec<String>) {
        match self.index.get(seed.name) {
            Some(&i) => {
                let record = &mut self.records[i];
                record.score += points;
                record.keywords.extend(keywords);
            }
            None => {
                self.index.insert(seed.name.to_string(), self.records.len());
                self.records.push(MatchRecord {
                    pattern: seed.name.to_string(),
                    score: points,
                    keywords,
                    explanation: seed.explanation,
                    safety_tips: seed.safety_tips,
                    severity: seed.severity,
                });
            }
        }
    }
}

/// Run the full matching pass over one message.
///
/// Returns the match records in the order their keys first matched, plus
/// the total score (the sum of all record scores — no cap, no floor).
pub fn score(text: &str, registry: &Registry) -> (Vec<MatchRecord>, u32) {
    let lower = text.to_lowercase();
    let mut book = ScoreBook::new();

    // Pass 1: registry patterns. Exact substring beats partial first-word;
    // duplicate keyword entries score independently by design.
    for pattern in &registry.patterns {
        for keyword in &pattern.keywords {
            let keyword_lower = keyword.to_lowercase();
            if lower.contains(&keyword_lower) {
                debug!(keyword = %keyword, pattern = %pattern.name, "exact keyword match");
                book.credit(pattern_seed(pattern), EXACT_KEYWORD_SCORE, vec![keyword.clone()]);
            } else if let Some(first_word) = partial_trigger(&keyword_lower, &lower) {
                debug!(
                    keyword = %keyword,
                    first_word = %first_word,
                    pattern = %pattern.name,
                    "partial keyword match"
                );
                book.credit(
                    pattern_seed(pattern),
                    PARTIAL_KEYWORD_SCORE,
                    vec![format!("{keyword} (partial)")],
                );
            }
        }
    }

    // Pass 2: category groups. Score-only buckets merged by label.
    for group in &registry.categories {
        for keyword in &group.keywords {
            if lower.contains(&keyword.to_lowercase()) {
                debug!(keyword = %keyword, category = %group.label, "category keyword match");
                book.credit(
                    RecordSeed {
                        name: &group.label,
                        explanation: String::new(),
                        safety_tips: Vec::new(),
                        severity: Severity::Low,
                    },
                    CATEGORY_KEYWORD_SCORE,
                    vec![format!("{} ({})", keyword, group.label)],
                );
            }
        }
    }

    // Pass 3: special phrases. Merge into the named pattern's record, or
    // create one with a generic explanation if the pattern never matched.
    for rule in &registry.phrases {
        if lower.contains(&rule.phrase.to_lowercase()) {
            debug!(phrase = %rule.phrase, pattern = %rule.pattern, "scam phrase match");
            book.credit(
                RecordSeed {
                    name: &rule.pattern,
                    explanation: format!("Detected common scam phrase: \"{}\"", rule.phrase),
                    safety_tips: vec![
                        "Be extremely cautious with messages containing this phrase".to_string(),
                    ],
                    severity: Severity::High,
                },
                rule.score,
                vec![rule.phrase.clone()],
            );
        }
    }

    // Pass 4: structural detectors over the original-case text.
    let urls = detectors::extract_urls(text);
    if !urls.is_empty() {
        debug!(count = urls.len(), "URLs detected");
        book.credit(
            RecordSeed {
                name: "Suspicious Link Detected",
                explanation: "Message contains clickable links. Scammers often use shortened \
                              or fake URLs to trick users into visiting malicious websites."
                    .to_string(),
                safety_tips: vec![
                    "Never click on links in unsolicited messages".to_string(),
                    "Hover over links to see the actual URL before clicking".to_string(),
                    "Use URL scanners like VirusTotal to check suspicious links".to_string(),
                    "Type website addresses directly into your browser instead of clicking links"
                        .to_string(),
                ],
                severity: Severity::High,
            },
            URL_SCORE,
            urls,
        );
    }

    let phones = detectors::extract_phone_numbers(text);
    if !phones.is_empty() {
        debug!(count = phones.len(), "phone numbers detected");
        book.credit(
            RecordSeed {
                name: "Phone Number Request",
                explanation: "Message contains phone numbers. Scammers often ask you to call \
                              a number to share personal information or make payments."
                    .to_string(),
                safety_tips: vec![
                    "Never call numbers provided in unsolicited messages".to_string(),
                    "Verify any contact information through official websites".to_string(),
                    "Use official customer service numbers from bank websites".to_string(),
                ],
                severity: Severity::Medium,
            },
            PHONE_SCORE,
            phones,
        );
    }

    let total = book.records.iter().map(|r| r.score).sum();
    (book.records, total)
}

fn pattern_seed(pattern: &super::registry::Pattern) -> RecordSeed<'_> {
    RecordSeed {
        name: &pattern.name,
        explanation: pattern.explanation.clone(),
        safety_tips: pattern.safety_tips.clone(),
        severity: pattern.severity,
    }
}

/// A multi-word keyword triggers a partial match when its first word
/// appears in the text. Returns the first word, or None.
fn partial_trigger<'a>(keyword_lower: &'a str, text_lower: &str) -> Option<&'a str> {
    if !keyword_lower.contains(' ') {
        return None;
    }
    let first_word = keyword_lower.split(' ').next()?;
    text_lower.contains(first_word).then_some(first_word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{CategoryGroup, Pattern, PhraseRule};

    fn test_registry() -> Registry {
        Registry {
            patterns: vec![Pattern {
                key: "fake_loan_offer".to_string(),
                name: "Fake Loan Offer".to_string(),
                keywords: vec!["instant loan".to_string(), "quick loan".to_string()],
                explanation: "Loan scam.".to_string(),
                safety_tips: vec!["Do not pay processing fees".to_string()],
                severity: Severity::High,
            }],
            categories: vec![CategoryGroup {
                label: "urgency".to_string(),
                keywords: vec!["urgent".to_string(), "hurry".to_string()],
            }],
            phrases: vec![
                PhraseRule {
                    phrase: "instant loan".to_string(),
                    score: 25,
                    pattern: "Fake Loan Offer".to_string(),
                },
                PhraseRule {
                    phrase: "click here".to_string(),
                    score: 30,
                    pattern: "Suspicious Link".to_string(),
                },
            ],
        }
    }

    #[test]
    fn exact_keyword_scores_fifteen() {
        let registry = test_registry();
        let (matches, total) = score("get an INSTANT LOAN today", &registry);
        let record = matches.iter().find(|m| m.pattern == "Fake Loan Offer").unwrap();
        assert!(record.keywords.contains(&"instant loan".to_string()));
        // 15 (exact) + 25 (phrase rule merges into the same record)
        assert_eq!(record.score, 40);
        assert_eq!(total, 40);
    }

    #[test]
    fn partial_match_scores_eight_with_annotation() {
        let registry = test_registry();
        let (matches, total) = score("instant cash for you", &registry);
        let record = matches.iter().find(|m| m.pattern == "Fake Loan Offer").unwrap();
        assert_eq!(record.score, 8);
        assert_eq!(record.keywords, vec!["instant loan (partial)"]);
        assert_eq!(total, 8);
    }

    #[test]
    fn exact_match_short_circuits_partial() {
        let registry = test_registry();
        let (matches, _) = score("instant loan now", &registry);
        let record = matches.iter().find(|m| m.pattern == "Fake Loan Offer").unwrap();
        assert!(!record.keywords.iter().any(|k| k.contains("(partial)")));
    }

    #[test]
    fn one_record_per_pattern_name() {
        let registry = test_registry();
        // Both keywords hit: "instant loan" exact, "quick loan" exact.
        let (matches, total) = score("instant loan or quick loan", &registry);
        let loan_records: Vec<_> =
            matches.iter().filter(|m| m.pattern == "Fake Loan Offer").collect();
        assert_eq!(loan_records.len(), 1);
        // 15 + 15 + 25 (phrase)
        assert_eq!(loan_records[0].score, 55);
        assert_eq!(total, 55);
    }

    #[test]
    fn category_contribution_merges_under_label() {
        let registry = test_registry();
        let (matches, total) = score("urgent! hurry!", &registry);
        assert_eq!(matches.len(), 1);
        let record = &matches[0];
        assert_eq!(record.pattern, "urgency");
        assert_eq!(record.score, 16);
        assert_eq!(record.keywords, vec!["urgent (urgency)", "hurry (urgency)"]);
        assert!(record.explanation.is_empty());
        assert!(record.safety_tips.is_empty());
        assert_eq!(total, 16);
    }

    #[test]
    fn phrase_rule_creates_record_for_unmatched_pattern() {
        let registry = test_registry();
        let (matches, total) = score("please click here", &registry);
        let record = matches.iter().find(|m| m.pattern == "Suspicious Link").unwrap();
        assert_eq!(record.score, 30);
        assert_eq!(
            record.explanation,
            "Detected common scam phrase: \"click here\""
        );
        assert_eq!(record.severity, Severity::High);
        assert_eq!(total, 30);
    }

    #[test]
    fn url_record_is_fixed_forty_with_all_urls() {
        let registry = test_registry();
        let (matches, total) =
            score("see https://a.example/x and http://b.example/y", &registry);
        let record = matches
            .iter()
            .find(|m| m.pattern == "Suspicious Link Detected")
            .unwrap();
        assert_eq!(record.score, 40);
        assert_eq!(record.keywords.len(), 2);
        assert_eq!(record.severity, Severity::High);
        assert_eq!(record.safety_tips.len(), 4);
        assert_eq!(total, 40);
    }

    #[test]
    fn phone_record_is_fixed_twenty_five() {
        let registry = test_registry();
        let (matches, total) = score("call 9876543210", &registry);
        let record = matches
            .iter()
            .find(|m| m.pattern == "Phone Number Request")
            .unwrap();
        assert_eq!(record.score, 25);
        assert_eq!(record.severity, Severity::Medium);
        assert_eq!(total, 25);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let registry = test_registry();
        let (upper, _) = score("INSTANT LOAN", &registry);
        let (lower, _) = score("instant loan", &registry);
        assert_eq!(upper, lower);
    }

    #[test]
    fn clean_text_yields_nothing() {
        let registry = test_registry();
        let (matches, total) = score("see you at the library at five", &registry);
        assert!(matches.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn total_is_sum_of_record_scores() {
        let registry = test_registry();
        let (matches, total) = score("urgent instant loan, click here: http://x.in/1", &registry);
        let sum: u32 = matches.iter().map(|m| m.score).sum();
        assert_eq!(total, sum);
    }
}
