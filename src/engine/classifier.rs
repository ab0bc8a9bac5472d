// Verdict classifier — total score to risk tier.
//
// An ordered cascade of inclusive lower bounds, highest first. Total over
// all integers: scores are never negative by construction, but a negative
// input still classifies (to the bottom tier) rather than panicking.

use serde::{Deserialize, Serialize};

/// The five ordered risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    PossiblySafe,
    LowRisk,
    Caution,
    Suspicious,
    HighRisk,
}

impl RiskTier {
    /// Classify a total score. Boundary scores (40, 25, 15, 5) belong to
    /// the higher tier; there is no upper bound.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 40 => RiskTier::HighRisk,
            s if s >= 25 => RiskTier::Suspicious,
            s if s >= 15 => RiskTier::Caution,
            s if s >= 5 => RiskTier::LowRisk,
            _ => RiskTier::PossiblySafe,
        }
    }

    /// The verdict label shown in reports and JSON output.
    pub fn verdict(&self) -> &'static str {
        match self {
            RiskTier::HighRisk => "HIGH RISK SCAM",
            RiskTier::Suspicious => "SUSPICIOUS",
            RiskTier::Caution => "CAUTION ADVISED",
            RiskTier::LowRisk => "LOW RISK",
            RiskTier::PossiblySafe => "POSSIBLY SAFE",
        }
    }

    /// The one-line display text accompanying the verdict.
    pub fn verdict_text(&self) -> &'static str {
        match self {
            RiskTier::HighRisk => {
                "⚠️ DANGER! This message shows multiple signs of being a dangerous financial scam"
            }
            RiskTier::Suspicious => {
                "⚠️ This message contains several warning signs of potential fraud"
            }
            RiskTier::Caution => {
                "⚠️ This message shows some scam indicators - proceed with caution"
            }
            RiskTier::LowRisk => "This message has minor risk indicators",
            RiskTier::PossiblySafe => "No obvious scam patterns detected, but remain vigilant",
        }
    }

    /// CSS-style badge class used by the web frontend and for terminal
    /// color selection.
    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskTier::HighRisk => "danger",
            RiskTier::Suspicious => "warning",
            RiskTier::Caution => "caution",
            RiskTier::LowRisk | RiskTier::PossiblySafe => "safe",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verdict())
    }
}
