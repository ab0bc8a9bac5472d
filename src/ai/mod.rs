// AI-derived verdicts — the peer "text → verdict" producer.
//
// A generative provider and the deterministic engine expose the same output
// shape, so callers can fall back from one to the other transparently.

use tracing::warn;

use crate::engine::ScamEngine;

pub mod gemini;
pub mod parse;
pub mod traits;

pub use traits::{AiVerdict, VerdictProducer};

/// Check a message with the producer, falling back to the deterministic
/// engine on any provider error. Provider failures never propagate — the
/// engine has no external failure modes.
pub async fn check_with_fallback(
    producer: &dyn VerdictProducer,
    engine: &ScamEngine,
    message: &str,
) -> AiVerdict {
    match producer.check(message).await {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!(error = %e, "AI producer failed, falling back to rule engine");
            AiVerdict::from(&engine.analyze(message))
        }
    }
}
