// Verdict producer trait — the swap-ready abstraction.
//
// A producer turns free text into a verdict using an external generative-AI
// provider. It shares its output shape with the deterministic engine so a
// caller can fall back from one to the other transparently.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::engine::Assessment;

/// An AI-derived verdict: the subset of `Assessment` an external provider
/// can produce (no per-pattern match records, no numeric score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiVerdict {
    pub verdict: String,
    pub verdict_text: String,
    pub badge_class: String,
    pub explanation: String,
    pub safety_tips: Vec<String>,
}

impl From<&Assessment> for AiVerdict {
    fn from(assessment: &Assessment) -> Self {
        AiVerdict {
            verdict: assessment.verdict.clone(),
            verdict_text: assessment.verdict_text.clone(),
            badge_class: assessment.badge_class.clone(),
            explanation: assessment.explanation.clone(),
            safety_tips: assessment.safety_tips.clone(),
        }
    }
}

/// Trait for producing a verdict from message text. Implementations are
/// async because providers require HTTP API calls.
#[async_trait]
pub trait VerdictProducer: Send + Sync {
    /// Analyze a single message.
    async fn check(&self, message: &str) -> Result<AiVerdict>;
}
