// Pattern registry — the engine's only configuration.
//
// Three read-only tables drive the matcher: named scam patterns, category
// keyword groups, and special phrase rules. Adding a pattern never touches
// scoring code; the tables are plain data, loadable from JSON or compiled
// in via `Registry::builtin()`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Severity tag carried by patterns and match records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named scam archetype: keywords that trigger it, the explanation shown
/// to the user, and remediation tips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    /// Stable key, e.g. `fake_loan_offer`. Used for lookup and extension;
    /// match records carry the display name.
    pub key: String,
    pub name: String,
    /// Keyword list. Single words match as substrings; multi-word phrases
    /// also match at reduced score when only their first word appears.
    pub keywords: Vec<String>,
    pub explanation: String,
    pub safety_tips: Vec<String>,
    pub severity: Severity,
}

/// A secondary keyword group not tied to one named pattern. Contributes
/// score and keyword attribution only — no explanation or tips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category label, e.g. `urgency`. Acts as the merge key for the
    /// group's score bucket.
    pub label: String,
    pub keywords: Vec<String>,
}

/// A known high-signal phrase pre-bound to a pattern name and fixed score.
/// The named pattern need not exist in the registry — a record is created
/// on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseRule {
    pub phrase: String,
    pub score: u32,
    pub pattern: String,
}

/// The full rule set: patterns, category groups, and phrase rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub patterns: Vec<Pattern>,
    pub categories: Vec<CategoryGroup>,
    pub phrases: Vec<PhraseRule>,
}

impl Registry {
    /// Load a registry from a JSON file with the same shape as `builtin()`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file {}", path.display()))?;
        let registry: Registry = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse rules file {}", path.display()))?;
        Ok(registry)
    }

    /// The compiled-in default tables, built from scam SMS wording commonly
    /// reported by Indian students: loan offers, account suspension, lottery
    /// wins, OTP/KYC phishing, job offers, and investment schemes.
    pub fn builtin() -> Self {
        Registry {
            patterns: vec![
                pattern(
                    "fake_loan_offer",
                    "Fake Loan Offer",
                    Severity::High,
                    &[
                        "instant loan",
                        "pre-approved",
                        "pre approved",
                        "click here",
                        "limited time",
                        "guaranteed approval",
                        "no documents",
                        "0% interest",
                        "low interest",
                        "quick loan",
                        "personal loan",
                        "loan approved",
                        "loan offer",
                        "loan amount",
                        "immediate loan",
                    ],
                    "🚨 FAKE LOAN ALERT! Scammers send fake loan approval messages to \
                     trick people into paying 'processing fees' or sharing personal \
                     information. Real banks NEVER approve loans via SMS without proper \
                     verification.",
                    &[
                        "Never pay any 'processing fees' for loan approvals via SMS",
                        "Real banks require proper documentation and in-person verification",
                        "Check loan offers by visiting the bank's official website directly",
                        "Verify by calling the bank's official customer service number",
                        "Never share Aadhaar, PAN, or banking details via SMS links",
                    ],
                ),
                pattern(
                    "bank_account_suspended",
                    "Fake Account Suspension",
                    Severity::High,
                    &[
                        "suspended",
                        "blocked",
                        "deactivated",
                        "verify now",
                        "click to restore",
                        "security alert",
                        "temporarily locked",
                        "reactivate",
                        "last warning",
                        "immediate action",
                        "within 24 hours",
                        "final notice",
                    ],
                    "⚠️ ACCOUNT SUSPENSION SCAM! Banks never suspend accounts via SMS \
                     without prior notice. These messages create fake urgency to trick \
                     you into clicking malicious links.",
                    &[
                        "Never click 'verify account' or 'reactivate' links in SMS",
                        "Check your account status by logging into official banking app/website",
                        "Call your bank's official customer service number (from their website)",
                        "Enable transaction alerts in your banking app for real notifications",
                    ],
                ),
                pattern(
                    "lottery_prize",
                    "Lottery / Prize Scam",
                    Severity::High,
                    &[
                        "lottery",
                        "lucky draw",
                        "claim your prize",
                        "cash prize",
                        "lucky winner",
                        "jackpot",
                        "prize money",
                        "won a lottery",
                        "selected as winner",
                        "congratulations winner",
                    ],
                    "🎰 LOTTERY SCAM! You cannot win a lottery you never entered. These \
                     messages ask for a 'release fee' or bank details to deliver a prize \
                     that does not exist.",
                    &[
                        "No legitimate lottery asks winners to pay a fee upfront",
                        "Never share bank details to 'receive' prize money",
                        "Ignore and report messages about contests you never entered",
                    ],
                ),
                pattern(
                    "otp_phishing",
                    "OTP / KYC Phishing",
                    Severity::High,
                    &[
                        "share otp",
                        "otp",
                        "kyc update",
                        "kyc expired",
                        "verify kyc",
                        "update kyc",
                        "share pin",
                        "cvv",
                        "aadhaar",
                        "pan card",
                        "net banking password",
                        "upi pin",
                    ],
                    "🔐 OTP/KYC PHISHING! Banks, wallets, and government agencies never \
                     ask for OTPs, PINs, or KYC details over SMS. Anyone asking for an \
                     OTP is trying to take over your account.",
                    &[
                        "Never share OTP, PIN, CVV, or passwords with anyone",
                        "KYC updates happen through official apps and branches, never SMS links",
                        "Report phishing attempts to your bank and to 1930 (cybercrime helpline)",
                    ],
                ),
                pattern(
                    "fake_job_offer",
                    "Fake Job Offer",
                    Severity::Medium,
                    &[
                        "work from home",
                        "earn money",
                        "part time job",
                        "daily income",
                        "no experience",
                        "registration fee",
                        "joining fee",
                        "easy income",
                        "weekly payout",
                    ],
                    "💼 FAKE JOB OFFER! Real employers never charge registration or \
                     joining fees. 'Easy income' messages recruit for fraud or collect \
                     upfront payments that vanish.",
                    &[
                        "Legitimate jobs never require payment to apply or join",
                        "Research the company on its official website and LinkedIn",
                        "Be wary of salaries far above market rate for simple tasks",
                    ],
                ),
                pattern(
                    "investment_fraud",
                    "Investment Fraud",
                    Severity::High,
                    &[
                        "double your money",
                        "guaranteed returns",
                        "risk free",
                        "high returns",
                        "crypto investment",
                        "trading tips",
                        "stock tips",
                        "assured profit",
                        "multiply your investment",
                    ],
                    "📈 INVESTMENT FRAUD! No genuine investment guarantees returns. \
                     Schemes promising to double your money are Ponzi operations that \
                     pay early victims with later victims' deposits.",
                    &[
                        "No legitimate investment can guarantee returns",
                        "Check SEBI registration before trusting any advisor",
                        "Avoid 'exclusive' tips delivered over SMS or WhatsApp",
                    ],
                ),
            ],
            categories: vec![
                category(
                    "urgency",
                    &[
                        "urgent",
                        "hurry",
                        "act now",
                        "expires today",
                        "last chance",
                        "immediately",
                        "don't delay",
                    ],
                ),
                category(
                    "reward",
                    &["free", "cashback", "bonus", "reward", "prize", "discount"],
                ),
                category(
                    "pressure",
                    &[
                        "legal action",
                        "police complaint",
                        "penalty",
                        "court notice",
                        "pay fine",
                    ],
                ),
            ],
            phrases: vec![
                phrase("instant loan", 25, "Fake Loan Offer"),
                phrase("pre approved", 20, "Fake Loan Offer"),
                phrase("no documents", 20, "Fake Loan Offer"),
                phrase("click here", 30, "Suspicious Link"),
                phrase("urgent", 15, "Urgency Scam"),
                phrase("guaranteed", 15, "Investment Fraud"),
            ],
        }
    }
}

fn pattern(
    key: &str,
    name: &str,
    severity: Severity,
    keywords: &[&str],
    explanation: &str,
    safety_tips: &[&str],
) -> Pattern {
    Pattern {
        key: key.to_string(),
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        explanation: explanation.to_string(),
        safety_tips: safety_tips.iter().map(|t| t.to_string()).collect(),
        severity,
    }
}

fn category(label: &str, keywords: &[&str]) -> CategoryGroup {
    CategoryGroup {
        label: label.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn phrase(phrase: &str, score: u32, pattern: &str) -> PhraseRule {
    PhraseRule {
        phrase: phrase.to_string(),
        score,
        pattern: pattern.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_nonempty() {
        let registry = Registry::builtin();
        assert!(!registry.patterns.is_empty());
        assert!(!registry.categories.is_empty());
        assert!(!registry.phrases.is_empty());
    }

    #[test]
    fn builtin_patterns_have_keywords_and_tips() {
        for pattern in Registry::builtin().patterns {
            assert!(!pattern.keywords.is_empty(), "{} has no keywords", pattern.key);
            assert!(!pattern.explanation.is_empty(), "{} has no explanation", pattern.key);
            assert!(!pattern.safety_tips.is_empty(), "{} has no tips", pattern.key);
        }
    }

    #[test]
    fn builtin_keys_are_unique() {
        let registry = Registry::builtin();
        let mut keys: Vec<&str> = registry.patterns.iter().map(|p| p.key.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), registry.patterns.len());
    }

    #[test]
    fn registry_round_trips_through_json() {
        let registry = Registry::builtin();
        let json = serde_json::to_string(&registry).unwrap();
        let parsed: Registry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.patterns.len(), registry.patterns.len());
        assert_eq!(parsed.categories.len(), registry.categories.len());
        assert_eq!(parsed.phrases.len(), registry.phrases.len());
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(Severity::Medium.as_str(), "medium");
    }
}
