// Scam signal detection engine.
//
// A pure, synchronous pipeline: keyword/category/phrase/structural matching,
// score accumulation, threshold classification, explanation aggregation.
// The registry tables are read-only; concurrent calls share them freely.

use serde::{Deserialize, Serialize};
use tracing::info;

pub mod aggregate;
pub mod classifier;
pub mod detectors;
pub mod matcher;
pub mod registry;

pub use classifier::RiskTier;
pub use matcher::MatchRecord;
pub use registry::{Registry, Severity};

/// The complete result of one analysis call. A pure function of the input
/// text and the engine's registry — no identity, no lifecycle.
///
/// Serializes to the flat camelCase structure the web API and CLI `--json`
/// output expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub verdict: String,
    pub verdict_text: String,
    pub badge_class: String,
    pub total_score: u32,
    pub matches: Vec<MatchRecord>,
    pub detected_patterns: Vec<String>,
    pub explanation: String,
    pub safety_tips: Vec<String>,
}

/// The detection engine: a registry plus the analysis entry point.
pub struct ScamEngine {
    registry: Registry,
}

impl ScamEngine {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Engine with the compiled-in default rule tables.
    pub fn builtin() -> Self {
        Self::new(Registry::builtin())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Analyze one message. Total function: every input yields a valid
    /// Assessment. Empty input classifies as POSSIBLY SAFE with zero
    /// matches — callers should reject empty messages before this point.
    pub fn analyze(&self, message: &str) -> Assessment {
        let (matches, total_score) = matcher::score(message, &self.registry);
        let tier = RiskTier::from_score(total_score as i64);
        let (explanation, safety_tips) = aggregate::summarize(&matches);
        let detected_patterns: Vec<String> =
            matches.iter().map(|m| m.pattern.clone()).collect();

        info!(
            total_score,
            matches = matches.len(),
            verdict = tier.verdict(),
            "analyzed message"
        );

        Assessment {
            verdict: tier.verdict().to_string(),
            verdict_text: tier.verdict_text().to_string(),
            badge_class: tier.badge_class().to_string(),
            total_score,
            matches,
            detected_patterns,
            explanation,
            safety_tips,
        }
    }
}
